//! Catalog configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the tool tables come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Directory with table overrides; embedded tables only when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// The override directory, when set, must exist.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.data_dir {
            Some(dir) if !dir.is_dir() => {
                Err(ValidationError::DataDirMissing(dir.display().to_string()))
            }
            _ => Ok(()),
        }
    }
}
