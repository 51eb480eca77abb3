//! EstimateDeclutteringHandler - Command handler for decluttering price ranges.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::pricing::{DeclutteringEstimate, DeclutteringEstimator, DeclutteringInput};
use crate::domain::Estimator;
use crate::ports::CosmeticDelay;

#[derive(Debug, Clone)]
pub struct EstimateDeclutteringCommand {
    pub input: DeclutteringInput,
}

pub struct EstimateDeclutteringHandler {
    catalog: Arc<Catalog>,
    delay: Arc<dyn CosmeticDelay>,
}

impl EstimateDeclutteringHandler {
    pub fn new(catalog: Arc<Catalog>, delay: Arc<dyn CosmeticDelay>) -> Self {
        Self { catalog, delay }
    }

    /// Never fails: unknown rooms, factors and extras fall back to defaults.
    pub async fn handle(&self, cmd: EstimateDeclutteringCommand) -> DeclutteringEstimate {
        let estimate = DeclutteringEstimator::new(self.catalog.decluttering()).estimate(&cmd.input);
        self.delay.pause().await;

        tracing::debug!(
            volume_m3 = estimate.volume_m3,
            min = estimate.range.min.value(),
            max = estimate.range.max.value(),
            "Estimated decluttering cost"
        );
        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::EmbeddedCatalog;
    use crate::adapters::delay::NoDelay;

    #[tokio::test]
    async fn floor_scenario_returns_smallest_bucket() {
        let catalog = Arc::new(EmbeddedCatalog::catalog().unwrap());
        let handler = EstimateDeclutteringHandler::new(catalog, Arc::new(NoDelay));
        let estimate = handler
            .handle(EstimateDeclutteringCommand {
                input: DeclutteringInput {
                    square_meters: 20.0,
                    access: Some("easy".to_string()),
                    ..Default::default()
                },
            })
            .await;
        assert_eq!(estimate.range.min.value(), 300);
        assert_eq!(estimate.range.max.value(), 600);
    }
}
