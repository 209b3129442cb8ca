use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::controllers::{audio::AudioController, catalogue::CatalogueController, health};
use crate::domain::catalogue::CatalogueService;
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Build the application router with all routes configured
pub fn build_router(
    config: &Config,
    catalogue_service: Arc<CatalogueService>,
    catalogue_controller: Arc<CatalogueController>,
    audio_controller: Arc<AudioController>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    // Catalogue routes
    let catalogue_routes = Router::new()
        .route(
            "/api/categories",
            get(CatalogueController::list_categories),
        )
        .route("/api/phrases", get(CatalogueController::list_phrases))
        .route(
            "/api/phrases/category/:categoryId",
            get(CatalogueController::list_phrases_by_category),
        )
        .route("/api/phrase/:phraseId", get(CatalogueController::get_phrase))
        .with_state(catalogue_controller);

    // Audio route
    let audio_routes = Router::new()
        .route(
            "/api/audio/:phraseId/:language",
            get(AudioController::get_audio),
        )
        .with_state(audio_controller);

    // Readiness reports catalogue state
    let ready_routes = Router::new()
        .route("/health/ready", get(health::health_ready))
        .with_state(catalogue_service);

    // The two pages plus their assets
    let static_dir = config.static_dir.clone();
    let pages = Router::new()
        .route_service("/", ServeFile::new(format!("{}/index.html", static_dir)))
        .route_service("/app", ServeFile::new(format!("{}/app.html", static_dir)))
        .nest_service("/static", ServeDir::new(static_dir));

    Router::new()
        .route("/api/health", get(health::health))
        .merge(catalogue_routes)
        .merge(audio_routes)
        .merge(ready_routes)
        .merge(pages)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    catalogue_service: Arc<CatalogueService>,
    catalogue_controller: Arc<CatalogueController>,
    audio_controller: Arc<AudioController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(
        &config,
        catalogue_service,
        catalogue_controller,
        audio_controller,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
