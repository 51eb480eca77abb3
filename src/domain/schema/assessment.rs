//! Assessment schemas: the static tables behind a weighted advisor.

use serde::{Deserialize, Serialize};

use super::{Category, TierLadder};
use crate::domain::foundation::{ToolId, ValidationError};

/// Full declarative description of one weighted-percentage advisor.
///
/// Category order is the wizard's step order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSchema {
    pub id: ToolId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub categories: Vec<Category>,
    pub tiers: TierLadder,
    /// Appended to every result regardless of score.
    #[serde(default)]
    pub closing_recommendations: Vec<String>,
}

impl AssessmentSchema {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    pub fn category_at(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Sum of every question's max weight across all categories.
    pub fn total_max_weight(&self) -> u32 {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter())
            .map(|q| q.max_weight())
            .sum()
    }

    /// Checks ids for uniqueness and every category for consistency.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|c| c.id == category.id) {
                return Err(ValidationError::invalid_format(
                    "categories",
                    format!("duplicate category id '{}'", category.id),
                ));
            }
            category.validate()?;
        }
        Ok(())
    }
}
