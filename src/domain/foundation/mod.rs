//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary shared by every advisor and calculator.

mod errors;
mod ids;
mod money;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CategoryId, QuestionId, ToolId};
pub use money::Euros;
pub use percentage::Percentage;
