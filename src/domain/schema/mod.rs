//! Schema module - Declarative tool tables.
//!
//! Questions, categories, tier ladders and banded price tables are plain
//! serializable data. They are loaded once at startup and treated as
//! immutable afterwards; none of them know how they are rendered.

mod assessment;
mod bands;
mod category;
mod question;
mod tier;

pub use assessment::AssessmentSchema;
pub use bands::{Band, BandTable};
pub use category::{Category, Remediation, DEFAULT_IMPROVEMENT_THRESHOLD};
pub use question::{ChoiceOption, Question, QuestionKind, DEFAULT_AFFIRMATIVE};
pub use tier::{Tier, TierLadder};
