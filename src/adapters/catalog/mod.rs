//! Catalog adapters - load the tool tables from YAML/JSON text.
//!
//! - `EmbeddedCatalog` - tables compiled into the binary from `data/`
//! - `DirectoryCatalog` - per-file overrides read from a directory at startup

mod directory;
mod embedded;

pub use directory::DirectoryCatalog;
pub use embedded::EmbeddedCatalog;

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::domain::catalog::Catalog;
use crate::domain::schema::AssessmentSchema;
use crate::ports::CatalogError;

pub(crate) const DECLUTTERING_FILE: &str = "decluttering.yaml";
pub(crate) const WINTER_SERVICE_FILE: &str = "winter_service.yaml";
pub(crate) const DEICING_FILE: &str = "deicing.yaml";
pub(crate) const STAINS_FILE: &str = "stain_solutions.json";
pub(crate) const ASSESSMENTS_DIR: &str = "assessments";

/// Raw table texts keyed by their file name.
#[derive(Debug, Clone)]
pub(crate) struct CatalogSources {
    /// `(file name, yaml)` per assessment, in load order.
    pub assessments: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    pub decluttering: Cow<'static, str>,
    pub winter_service: Cow<'static, str>,
    pub deicing: Cow<'static, str>,
    pub stains: Cow<'static, str>,
}

impl CatalogSources {
    /// Parses and validates every table.
    pub fn parse(&self) -> Result<Catalog, CatalogError> {
        let assessments = self
            .assessments
            .iter()
            .map(|(file, text)| yaml::<AssessmentSchema>(file, text))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::new(
            assessments,
            yaml(DECLUTTERING_FILE, &self.decluttering)?,
            yaml(WINTER_SERVICE_FILE, &self.winter_service)?,
            yaml(DEICING_FILE, &self.deicing)?,
            serde_json::from_str(&self.stains).map_err(|e| CatalogError::parse(STAINS_FILE, e))?,
        )?;
        Ok(catalog)
    }
}

fn yaml<T: DeserializeOwned>(file: &str, text: &str) -> Result<T, CatalogError> {
    serde_yaml::from_str(text).map_err(|e| CatalogError::parse(file, e))
}
