//! RecommendDeicerHandler - Command handler for the de-icing agent ranking.

use std::sync::Arc;

use crate::domain::advice::{DeicingAdvice, DeicingInput, DeicingRecommender};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::Estimator;

/// Plausible range for the lowest expected temperature, in °C.
const TEMPERATURE_RANGE: (f64, f64) = (-50.0, 15.0);

#[derive(Debug, Clone)]
pub struct RecommendDeicerCommand {
    pub input: DeicingInput,
}

pub struct RecommendDeicerHandler {
    catalog: Arc<Catalog>,
}

impl RecommendDeicerHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, cmd: RecommendDeicerCommand) -> Result<DeicingAdvice, DomainError> {
        validate(&cmd.input).map_err(|e| {
            tracing::warn!(field = e.field(), "Rejected de-icing input");
            DomainError::from(e)
        })?;

        let advice = DeicingRecommender::new(self.catalog.deicing()).estimate(&cmd.input);
        tracing::debug!(
            surface = %advice.surface,
            recommended = advice.recommended.as_deref().unwrap_or("-"),
            excluded = advice.excluded.len(),
            "Ranked de-icing agents"
        );
        Ok(advice)
    }
}

fn validate(input: &DeicingInput) -> Result<(), ValidationError> {
    let (min, max) = TEMPERATURE_RANGE;
    if !input.temperature.is_finite() || input.temperature < min || input.temperature > max {
        return Err(ValidationError::out_of_range(
            "temperature",
            min as i64,
            max as i64,
            if input.temperature.is_finite() {
                input.temperature.round() as i64
            } else {
                0
            },
        ));
    }
    if input.eco_priority > 100 {
        return Err(ValidationError::out_of_range(
            "ecoPriority",
            0,
            100,
            i64::from(input.eco_priority),
        ));
    }
    Ok(())
}
