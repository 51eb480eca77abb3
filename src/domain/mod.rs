//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `schema` - Declarative question, category, tier and band tables
//! - `wizard` - Step sequencing and answer collection
//! - `scoring` - Weighted-percentage score engine and recommendations
//! - `pricing` - Decluttering and winter-service price estimators
//! - `advice` - De-icing ranking and stain-removal lookup
//! - `catalog` - The full set of tools offered
//! - `carousel` - Scroll bookkeeping for the tool carousel
//! - `share` - Share payloads and outcomes
//!
//! Every calculator implements [`Estimator`]; none of them fail.

pub mod advice;
pub mod carousel;
pub mod catalog;
mod estimator;
pub mod foundation;
pub mod pricing;
pub mod schema;
pub mod scoring;
pub mod share;
pub mod wizard;

pub use estimator::Estimator;
