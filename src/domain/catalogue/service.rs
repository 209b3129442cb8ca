use super::error::CatalogueServiceError;
use super::model::{Category, Phrase, PhraseList};
use crate::infrastructure::repositories::CatalogueRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CatalogueService {
    catalogue_repo: Arc<dyn CatalogueRepository>,
}

impl CatalogueService {
    pub fn new(catalogue_repo: Arc<dyn CatalogueRepository>) -> Self {
        Self { catalogue_repo }
    }
}

#[async_trait]
pub trait CatalogueServiceApi: Send + Sync {
    /// All categories in stored order, unfiltered.
    async fn list_categories(&self) -> Vec<Category>;

    /// All phrases in stored order, with their count.
    async fn list_all_phrases(&self) -> PhraseList;

    /// Phrases belonging to the given category, in stored order.
    /// An unknown category id yields an empty list, never an error.
    async fn list_phrases_by_category(&self, category_id: &str) -> Vec<Phrase>;

    /// The unique phrase with the given id.
    async fn get_phrase_by_id(&self, phrase_id: &str) -> Result<Phrase, CatalogueServiceError>;
}

#[async_trait]
impl CatalogueServiceApi for CatalogueService {
    async fn list_categories(&self) -> Vec<Category> {
        self.catalogue_repo.load().await.categories
    }

    async fn list_all_phrases(&self) -> PhraseList {
        let phrases = self.catalogue_repo.load().await.phrases;
        PhraseList {
            total: phrases.len(),
            phrases,
        }
    }

    async fn list_phrases_by_category(&self, category_id: &str) -> Vec<Phrase> {
        self.catalogue_repo
            .load()
            .await
            .phrases
            .into_iter()
            .filter(|phrase| phrase.in_category(category_id))
            .collect()
    }

    async fn get_phrase_by_id(&self, phrase_id: &str) -> Result<Phrase, CatalogueServiceError> {
        // Ids are unique, so the first match is the only match
        self.catalogue_repo
            .load()
            .await
            .phrases
            .into_iter()
            .find(|phrase| phrase.id == phrase_id)
            .ok_or(CatalogueServiceError::NotFound)
    }
}
