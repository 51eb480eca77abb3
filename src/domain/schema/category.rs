//! Categories group questions into wizard steps.

use serde::{Deserialize, Serialize};

use super::Question;
use crate::domain::foundation::{CategoryId, ValidationError};

/// Categories scoring below this percentage get a remediation message
/// unless the table sets its own threshold.
pub const DEFAULT_IMPROVEMENT_THRESHOLD: u8 = 70;

/// Remediation texts emitted for a weak category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remediation {
    /// Used when the category scores below half its threshold.
    pub urgent: String,
    /// Used when the category is below threshold but not urgent.
    pub advisory: String,
}

/// A named, ordered group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub questions: Vec<Question>,
    #[serde(default = "default_threshold")]
    pub improvement_threshold: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
}

fn default_threshold() -> u8 {
    DEFAULT_IMPROVEMENT_THRESHOLD
}

impl Category {
    /// Sum of the max weights of every question in this category.
    pub fn max_weight(&self) -> u32 {
        self.questions.iter().map(Question::max_weight).sum()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id.as_str() == id)
    }

    pub fn required_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.required)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::empty_field(format!(
                "categories.{}.label",
                self.id
            )));
        }
        if self.improvement_threshold > 100 {
            return Err(ValidationError::out_of_range(
                format!("categories.{}.improvement_threshold", self.id),
                0,
                100,
                i64::from(self.improvement_threshold),
            ));
        }
        for (i, question) in self.questions.iter().enumerate() {
            if self.questions[..i].iter().any(|q| q.id == question.id) {
                return Err(ValidationError::invalid_format(
                    format!("categories.{}.questions", self.id),
                    format!("duplicate question id '{}'", question.id),
                ));
            }
            question.validate()?;
        }
        Ok(())
    }
}
