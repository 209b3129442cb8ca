use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::catalogue::{CatalogueService, CatalogueServiceApi, Category, Phrase},
    error::{AppError, AppResult},
};

/// Response for GET /api/categories
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// Response for GET /api/phrases
#[derive(Debug, Serialize, Deserialize)]
pub struct PhrasesResponse {
    pub success: bool,
    pub total: usize,
    pub phrases: Vec<Phrase>,
}

/// Response for GET /api/phrases/category/{categoryId}
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPhrasesResponse {
    pub success: bool,
    pub category: String,
    pub total: usize,
    pub phrases: Vec<Phrase>,
}

/// Response for GET /api/phrase/{phraseId}
#[derive(Debug, Serialize, Deserialize)]
pub struct PhraseResponse {
    pub success: bool,
    pub phrase: Phrase,
}

pub struct CatalogueController {
    catalogue_service: Arc<CatalogueService>,
}

impl CatalogueController {
    pub fn new(catalogue_service: Arc<CatalogueService>) -> Self {
        Self { catalogue_service }
    }

    /// GET /api/categories - List all categories
    pub async fn list_categories(
        State(controller): State<Arc<CatalogueController>>,
    ) -> Json<CategoriesResponse> {
        let categories = controller.catalogue_service.list_categories().await;
        Json(CategoriesResponse {
            success: true,
            categories,
        })
    }

    /// GET /api/phrases - List all phrases
    pub async fn list_phrases(
        State(controller): State<Arc<CatalogueController>>,
    ) -> Json<PhrasesResponse> {
        let list = controller.catalogue_service.list_all_phrases().await;
        Json(PhrasesResponse {
            success: true,
            total: list.total,
            phrases: list.phrases,
        })
    }

    /// GET /api/phrases/category/{categoryId} - List phrases in a category.
    /// An unknown category id yields an empty list, not a 404.
    pub async fn list_phrases_by_category(
        State(controller): State<Arc<CatalogueController>>,
        Path(category_id): Path<String>,
    ) -> Json<CategoryPhrasesResponse> {
        let phrases = controller
            .catalogue_service
            .list_phrases_by_category(&category_id)
            .await;
        Json(CategoryPhrasesResponse {
            success: true,
            category: category_id,
            total: phrases.len(),
            phrases,
        })
    }

    /// GET /api/phrase/{phraseId} - Get a single phrase
    pub async fn get_phrase(
        State(controller): State<Arc<CatalogueController>>,
        Path(phrase_id): Path<String>,
    ) -> AppResult<Json<PhraseResponse>> {
        let phrase = controller
            .catalogue_service
            .get_phrase_by_id(&phrase_id)
            .await
            .map_err(AppError::from)?;
        Ok(Json(PhraseResponse {
            success: true,
            phrase,
        }))
    }
}
