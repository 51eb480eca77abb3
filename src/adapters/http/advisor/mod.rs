//! Advisor HTTP adapter - REST API for the assessment and calculator tools.
//!
//! Provides endpoints for:
//! - Listing tools and fetching assessment schemas
//! - Scoring assessments
//! - Decluttering, winter-service, de-icing and stain calculators

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::{AdvisorApiError, AdvisorAppState};
pub use routes::advisor_router;
