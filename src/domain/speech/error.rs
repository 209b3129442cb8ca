use crate::domain::catalogue::CatalogueServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("phrase not found")]
    PhraseNotFound,
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CatalogueServiceError> for SpeechServiceError {
    fn from(err: CatalogueServiceError) -> Self {
        match err {
            CatalogueServiceError::NotFound => SpeechServiceError::PhraseNotFound,
            CatalogueServiceError::Dependency(msg) => SpeechServiceError::Dependency(msg),
            CatalogueServiceError::Other(e) => SpeechServiceError::Other(e),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::PhraseNotFound => {
                AppError::NotFound("Phrase not found".to_string())
            }
            // An unknown language is a client addressing error, same as a
            // missing phrase
            SpeechServiceError::UnsupportedLanguage(code) => {
                AppError::NotFound(format!("Unsupported language: {}", code))
            }
            SpeechServiceError::Dependency(msg) => AppError::ExternalService(msg),
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
