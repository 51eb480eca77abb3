//! Tool Catalog Port - where the declarative tool tables come from.
//!
//! The catalog is loaded once at startup and shared read-only afterwards.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::DomainError;

/// Errors that can occur while loading tool tables.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

impl CatalogError {
    pub fn parse(file: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.to_string(),
        }
    }
}

/// Port for loading the full tool catalog.
#[async_trait]
pub trait ToolCatalog: Send + Sync {
    /// Loads and validates every tool table.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when a table is missing, malformed or
    /// fails validation.
    async fn load(&self) -> Result<Catalog, CatalogError>;
}
