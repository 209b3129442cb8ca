use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phrasebook_backend::domain::catalogue::{self, CatalogueService};
use phrasebook_backend::domain::speech::SpeechService;
use phrasebook_backend::infrastructure::config::{Config, LogFormat};
use phrasebook_backend::infrastructure::http::start_http_server;
use phrasebook_backend::infrastructure::repositories::{
    CatalogueRepository, FileCatalogueRepository, GoogleTtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Phrasebook Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    let catalogue_repo = Arc::new(FileCatalogueRepository::new(&config.data_file));
    let synthesis_repo = Arc::new(
        GoogleTtsRepository::new(
            config.tts_base_url.clone(),
            Duration::from_secs(config.tts_timeout_secs),
        )
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?,
    );

    // Surface catalogue content problems at startup; a bad document still
    // serves, but the integrity report goes to the log
    report_catalogue_integrity(catalogue_repo.as_ref()).await;

    // 2. Instantiate services (inject repositories)
    let catalogue_service = Arc::new(CatalogueService::new(catalogue_repo));
    let speech_service = Arc::new(SpeechService::new(
        catalogue_service.clone(),
        synthesis_repo,
    ));

    // 3. Instantiate controllers (inject services)
    let catalogue_controller = Arc::new(
        phrasebook_backend::controllers::catalogue::CatalogueController::new(
            catalogue_service.clone(),
        ),
    );
    let audio_controller = Arc::new(phrasebook_backend::controllers::audio::AudioController::new(
        speech_service,
    ));

    // Start HTTP server with all routes
    start_http_server(
        config,
        catalogue_service,
        catalogue_controller,
        audio_controller,
    )
    .await?;

    Ok(())
}

async fn report_catalogue_integrity(catalogue_repo: &dyn CatalogueRepository) {
    let loaded = catalogue_repo.load().await;
    let report = catalogue::validate(&loaded);

    tracing::info!(
        categories = loaded.categories.len(),
        phrases = loaded.phrases.len(),
        "Catalogue loaded"
    );

    for error in &report.errors {
        tracing::error!(issue = %error, "Catalogue integrity error");
    }
    for warning in &report.warnings {
        tracing::warn!(issue = %warning, "Catalogue integrity warning");
    }
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "phrasebook_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "phrasebook_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
