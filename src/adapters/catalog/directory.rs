//! Directory-backed Catalog Adapter
//!
//! Reads tool tables from a directory laid out like `data/`:
//!
//! ```text
//! <dir>/assessments/*.yaml
//! <dir>/decluttering.yaml
//! <dir>/winter_service.yaml
//! <dir>/deicing.yaml
//! <dir>/stain_solutions.json
//! ```
//!
//! Every file is optional. A present table file replaces its embedded
//! counterpart; a present `assessments/` directory replaces the embedded
//! assessment list and is read in file-name order.

use async_trait::async_trait;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{
    CatalogSources, EmbeddedCatalog, ASSESSMENTS_DIR, DECLUTTERING_FILE, DEICING_FILE,
    STAINS_FILE, WINTER_SERVICE_FILE,
};
use crate::domain::catalog::Catalog;
use crate::ports::{CatalogError, ToolCatalog};

#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    base_path: PathBuf,
}

impl DirectoryCatalog {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Reads `name` if it exists, `None` otherwise.
    async fn read_optional(&self, name: &str) -> Result<Option<String>, CatalogError> {
        let path = self.base_path.join(name);
        if !fs::try_exists(&path).await.map_err(|e| io(&path, e))? {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "Reading catalog override");
        fs::read_to_string(&path)
            .await
            .map(Some)
            .map_err(|e| io(&path, e))
    }

    async fn read_assessments(&self) -> Result<Option<Vec<(String, String)>>, CatalogError> {
        let dir = self.base_path.join(ASSESSMENTS_DIR);
        if !fs::try_exists(&dir).await.map_err(|e| io(&dir, e))? {
            return Ok(None);
        }

        let mut entries = fs::read_dir(&dir).await.map_err(|e| io(&dir, e))?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| io(&dir, e))? {
            let path = entry.path();
            let is_yaml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| ext == "yaml" || ext == "yml");
            if is_yaml {
                files.push(path);
            }
        }
        files.sort();

        let mut assessments = Vec::with_capacity(files.len());
        for path in files {
            let text = fs::read_to_string(&path).await.map_err(|e| io(&path, e))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            assessments.push((name, text));
        }
        Ok(Some(assessments))
    }

    async fn sources(&self) -> Result<CatalogSources, CatalogError> {
        let mut sources = EmbeddedCatalog::sources();
        if let Some(assessments) = self.read_assessments().await? {
            sources.assessments = assessments
                .into_iter()
                .map(|(file, text)| (Cow::Owned(file), Cow::Owned(text)))
                .collect();
        }
        for (file, slot) in [
            (DECLUTTERING_FILE, &mut sources.decluttering),
            (WINTER_SERVICE_FILE, &mut sources.winter_service),
            (DEICING_FILE, &mut sources.deicing),
            (STAINS_FILE, &mut sources.stains),
        ] {
            if let Some(text) = self.read_optional(file).await? {
                *slot = Cow::Owned(text);
            }
        }
        Ok(sources)
    }
}

fn io(path: &Path, source: std::io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl ToolCatalog for DirectoryCatalog {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = self.sources().await?.parse()?;
        tracing::info!(
            path = %self.base_path.display(),
            tools = catalog.tools().len(),
            "Loaded tool catalog with directory overrides"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TINY_ASSESSMENT: &str = r#"
id: tiny-check
title: Tiny
categories:
  - id: eins
    label: Eins
    questions:
      - id: frage
        prompt: Ja?
        input: {kind: boolean, weight: 1}
tiers:
  - {min: 0, label: Alle}
"#;

    #[tokio::test]
    async fn empty_directory_matches_embedded_catalog() {
        let dir = TempDir::new().unwrap();
        let catalog = DirectoryCatalog::new(dir.path()).load().await.unwrap();
        let embedded = EmbeddedCatalog::catalog().unwrap();
        assert_eq!(catalog.tools(), embedded.tools());
    }

    #[tokio::test]
    async fn assessments_directory_replaces_embedded_list() {
        let dir = TempDir::new().unwrap();
        let assessments = dir.path().join("assessments");
        std::fs::create_dir(&assessments).unwrap();
        std::fs::write(assessments.join("tiny.yaml"), TINY_ASSESSMENT).unwrap();
        std::fs::write(assessments.join("notes.txt"), "ignored").unwrap();

        let catalog = DirectoryCatalog::new(dir.path()).load().await.unwrap();
        assert_eq!(catalog.assessments().len(), 1);
        assert!(catalog.assessment("tiny-check").is_some());
        assert!(catalog.assessment("security-check").is_none());
    }

    #[tokio::test]
    async fn table_file_overrides_embedded_table() {
        let dir = TempDir::new().unwrap();
        let deicing = r#"
title: Eigener Streumittel-Berater
surfaces: [{id: asphalt, label: Asphalt}]
weights: {effectiveness: 1, eco: 0, pet_safety: 0, affordability: 0}
agents:
  - {id: sand, label: Sand, effectiveness: 1, eco: 5, pet_safety: 5, affordability: 5}
"#;
        std::fs::write(dir.path().join("deicing.yaml"), deicing).unwrap();

        let catalog = DirectoryCatalog::new(dir.path()).load().await.unwrap();
        assert_eq!(catalog.deicing().title, "Eigener Streumittel-Berater");
        assert_eq!(catalog.decluttering(), EmbeddedCatalog::catalog().unwrap().decluttering());
    }

    #[tokio::test]
    async fn malformed_file_reports_parse_error_with_file_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("stain_solutions.json"), "{ not json").unwrap();

        let err = DirectoryCatalog::new(dir.path()).load().await.unwrap_err();
        match err {
            CatalogError::Parse { file, .. } => assert_eq!(file, "stain_solutions.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_table_is_rejected() {
        let dir = TempDir::new().unwrap();
        let broken = r#"
title: Kaputt
surfaces: []
weights: {effectiveness: 1, eco: 0, pet_safety: 0, affordability: 0}
agents: []
"#;
        std::fs::write(dir.path().join("deicing.yaml"), broken).unwrap();

        let err = DirectoryCatalog::new(dir.path()).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }
}
