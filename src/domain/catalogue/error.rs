use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogueServiceError {
    #[error("phrase not found")]
    NotFound,
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CatalogueServiceError> for AppError {
    fn from(err: CatalogueServiceError) -> Self {
        match err {
            CatalogueServiceError::NotFound => AppError::NotFound("Phrase not found".to_string()),
            CatalogueServiceError::Dependency(msg) => AppError::Internal(msg),
            CatalogueServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
