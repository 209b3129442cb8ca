use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::catalogue::{CatalogueService, CatalogueServiceApi};

/// GET /api/health - Liveness check
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "app": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /health/ready - Readiness check. An empty catalogue is still ready
/// (the service answers with empty results by design), but it is reported
/// so operators can tell content problems from healthy emptiness.
pub async fn health_ready(
    State(catalogue_service): State<Arc<CatalogueService>>,
) -> impl IntoResponse {
    let list = catalogue_service.list_all_phrases().await;
    let catalogue_state = if list.total == 0 { "empty" } else { "loaded" };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "catalogue": catalogue_state,
            "phrases": list.total
        })),
    )
}
