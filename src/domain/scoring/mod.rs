//! Scoring module - weighted-percentage variant of the score engine.
//!
//! Per question: boolean, scale, single- and multi-choice contributions.
//! Per category and overall: `round(100 * achieved / max)` with a zero
//! guard, then a tier lookup and remediation texts.

mod engine;
mod recommendations;
mod result;

pub use engine::{question_score, ScoreEngine};
pub use recommendations::recommend;
pub use result::{CategoryScore, Recommendation, ScoreBreakdown, ScoreResult, Severity};
