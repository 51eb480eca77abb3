//! Score result structures handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, Percentage, ToolId};
use crate::domain::schema::Tier;

/// Achieved versus achievable weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub achieved: u32,
    pub max: u32,
    pub percentage: Percentage,
}

impl ScoreBreakdown {
    pub fn new(achieved: u32, max: u32) -> Self {
        Self {
            achieved,
            max,
            percentage: Percentage::of(achieved, max),
        }
    }
}

/// Subtotal for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: CategoryId,
    pub label: String,
    #[serde(flatten)]
    pub score: ScoreBreakdown,
}

/// How pressing a recommendation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Urgent,
    Advisory,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    pub severity: Severity,
    pub message: String,
}

/// Complete outcome of a weighted assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub tool: ToolId,
    pub categories: Vec<CategoryScore>,
    pub overall: ScoreBreakdown,
    pub tier: Tier,
    pub recommendations: Vec<Recommendation>,
}

impl ScoreResult {
    pub fn category(&self, id: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category.as_str() == id)
    }
}
