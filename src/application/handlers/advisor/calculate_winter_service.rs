//! CalculateWinterServiceHandler - Command handler for the DIY vs. contractor comparison.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::DomainError;
use crate::domain::pricing::{WinterServiceComparison, WinterServiceEstimator, WinterServiceInput};
use crate::domain::Estimator;
use crate::ports::CosmeticDelay;

#[derive(Debug, Clone, Copy)]
pub struct CalculateWinterServiceCommand {
    pub input: WinterServiceInput,
}

pub struct CalculateWinterServiceHandler {
    catalog: Arc<Catalog>,
    delay: Arc<dyn CosmeticDelay>,
}

impl CalculateWinterServiceHandler {
    pub fn new(catalog: Arc<Catalog>, delay: Arc<dyn CosmeticDelay>) -> Self {
        Self { catalog, delay }
    }

    /// Rejects inputs outside the table's limits, then compares both options.
    pub async fn handle(
        &self,
        cmd: CalculateWinterServiceCommand,
    ) -> Result<WinterServiceComparison, DomainError> {
        let table = self.catalog.winter_service();
        if let Err(e) = cmd.input.validate(&table.limits) {
            tracing::warn!(field = e.field(), "Rejected winter-service input");
            return Err(e.into());
        }

        let comparison = WinterServiceEstimator::new(table).estimate(&cmd.input);
        self.delay.pause().await;

        tracing::debug!(
            diy_total = comparison.diy.total.value(),
            professional_midpoint = comparison.professional.midpoint.value(),
            "Calculated winter-service comparison"
        );
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::EmbeddedCatalog;
    use crate::adapters::delay::NoDelay;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> CalculateWinterServiceHandler {
        let catalog = Arc::new(EmbeddedCatalog::catalog().unwrap());
        CalculateWinterServiceHandler::new(catalog, Arc::new(NoDelay))
    }

    #[tokio::test]
    async fn valid_input_produces_comparison() {
        let comparison = handler()
            .handle(CalculateWinterServiceCommand {
                input: WinterServiceInput {
                    area: 120.0,
                    snow_depth: 10.0,
                    frequency: 20,
                },
            })
            .await
            .unwrap();
        assert_eq!(comparison.diy.total.value(), 1140);
        assert_eq!(
            comparison.cost_difference,
            comparison.professional.midpoint - comparison.diy.total
        );
    }

    #[tokio::test]
    async fn negative_area_is_rejected() {
        let err = handler()
            .handle(CalculateWinterServiceCommand {
                input: WinterServiceInput {
                    area: -5.0,
                    snow_depth: 10.0,
                    frequency: 20,
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.details.get("field").map(String::as_str), Some("area"));
    }
}
