use super::catalogue_repository::CatalogueRepository;
use crate::domain::catalogue::Catalogue;
use async_trait::async_trait;
use std::path::PathBuf;

/// Flat-file implementation of the catalogue source. Reads the JSON document
/// on every call, so content edits are picked up without a restart.
pub struct FileCatalogueRepository {
    data_file: PathBuf,
}

impl FileCatalogueRepository {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}

#[async_trait]
impl CatalogueRepository for FileCatalogueRepository {
    async fn load(&self) -> Catalogue {
        let raw = match tokio::fs::read_to_string(&self.data_file).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    data_file = %self.data_file.display(),
                    error = %e,
                    "Catalogue document unreadable, serving empty catalogue"
                );
                return Catalogue::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(catalogue) => catalogue,
            Err(e) => {
                tracing::error!(
                    data_file = %self.data_file.display(),
                    error = %e,
                    "Catalogue document malformed, serving empty catalogue"
                );
                Catalogue::default()
            }
        }
    }
}
