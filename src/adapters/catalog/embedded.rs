//! Tool tables compiled into the binary.

use std::borrow::Cow;

use async_trait::async_trait;

use super::CatalogSources;
use crate::domain::catalog::Catalog;
use crate::ports::{CatalogError, ToolCatalog};

const ASSESSMENTS: &[(&str, &str)] = &[
    (
        "security_check.yaml",
        include_str!("../../../data/assessments/security_check.yaml"),
    ),
    (
        "hygiene_check.yaml",
        include_str!("../../../data/assessments/hygiene_check.yaml"),
    ),
];
const DECLUTTERING: &str = include_str!("../../../data/decluttering.yaml");
const WINTER_SERVICE: &str = include_str!("../../../data/winter_service.yaml");
const DEICING: &str = include_str!("../../../data/deicing.yaml");
const STAINS: &str = include_str!("../../../data/stain_solutions.json");

/// Catalog backed by the `data/` directory as it was at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Borrows the compiled-in texts; nothing is copied.
    pub(crate) fn sources() -> CatalogSources {
        CatalogSources {
            assessments: ASSESSMENTS
                .iter()
                .map(|&(file, text)| (Cow::Borrowed(file), Cow::Borrowed(text)))
                .collect(),
            decluttering: Cow::Borrowed(DECLUTTERING),
            winter_service: Cow::Borrowed(WINTER_SERVICE),
            deicing: Cow::Borrowed(DEICING),
            stains: Cow::Borrowed(STAINS),
        }
    }

    /// Parses the embedded tables synchronously.
    pub fn catalog() -> Result<Catalog, CatalogError> {
        Self::sources().parse()
    }
}

#[async_trait]
impl ToolCatalog for EmbeddedCatalog {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = Self::catalog()?;
        tracing::info!(
            tools = catalog.tools().len(),
            "Loaded embedded tool catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ToolKind;

    #[test]
    fn embedded_tables_parse_and_validate() {
        let catalog = EmbeddedCatalog::catalog().unwrap();
        assert!(catalog.assessment("security-check").is_some());
        assert!(catalog.assessment("hygiene-check").is_some());
        assert_eq!(catalog.tools().len(), 6);
    }

    #[test]
    fn sources_borrow_compiled_tables() {
        let sources = EmbeddedCatalog::sources();
        assert!(matches!(sources.stains, Cow::Borrowed(_)));
        assert!(sources
            .assessments
            .iter()
            .all(|(file, text)| matches!((file, text), (Cow::Borrowed(_), Cow::Borrowed(_)))));
    }

    #[test]
    fn tools_list_assessments_before_calculators() {
        let catalog = EmbeddedCatalog::catalog().unwrap();
        let kinds: Vec<ToolKind> = catalog.tools().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToolKind::Assessment,
                ToolKind::Assessment,
                ToolKind::PriceRange,
                ToolKind::CostComparison,
                ToolKind::Ranking,
                ToolKind::Lookup,
            ]
        );
    }

    #[test]
    fn security_check_uses_risk_ladder() {
        let catalog = EmbeddedCatalog::catalog().unwrap();
        let schema = catalog.assessment("security-check").unwrap();
        let labels: Vec<&str> = schema.tiers.tiers().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Niedrig", "Mittel", "Hoch", "Kritisch"]);
    }

    #[test]
    fn require_assessment_distinguishes_calculators() {
        use crate::domain::foundation::ErrorCode;

        let catalog = EmbeddedCatalog::catalog().unwrap();
        assert_eq!(
            catalog.require_assessment("decluttering").unwrap_err().code,
            ErrorCode::WrongToolKind
        );
        assert_eq!(
            catalog.require_assessment("nope").unwrap_err().code,
            ErrorCode::ToolNotFound
        );
    }
}
