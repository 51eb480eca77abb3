//! AdviseStainHandler - Query handler for stain-removal instructions.

use std::sync::Arc;

use crate::domain::advice::{MatchLevel, StainAdvice, StainAdvisor, StainInput};
use crate::domain::catalog::Catalog;
use crate::domain::Estimator;

#[derive(Debug, Clone)]
pub struct AdviseStainQuery {
    pub input: StainInput,
}

pub struct AdviseStainHandler {
    catalog: Arc<Catalog>,
}

impl AdviseStainHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: AdviseStainQuery) -> StainAdvice {
        let advice = StainAdvisor::new(self.catalog.stains()).estimate(&query.input);
        if advice.match_level == MatchLevel::Fallback {
            tracing::debug!(stain = %query.input.stain, "No stain entry, using generic advice");
        }
        advice
    }
}
