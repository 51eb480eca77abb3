//! Wizard module - multi-step advisor state.
//!
//! - `step` - `StepController`, the intro → categories → results sequence
//! - `answers` - `AnswerStore`, upsert-only answer map
//! - `wizard` - `Wizard`, both of the above bound to one schema

mod answers;
mod step;
#[allow(clippy::module_inception)]
mod wizard;

pub use answers::{AnswerStore, AnswerValue};
pub use step::{StepController, Transition, WizardStep};
pub use wizard::{Advance, Progress, Wizard};
