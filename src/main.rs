use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use localize_backend::controllers::{translate::TranslateController, tts::TtsController};
use localize_backend::domain::{speech::SpeechService, translation::TranslationService};
use localize_backend::infrastructure::config::{
    Config, CredentialProvider, EnvCredentialProvider, LogFormat,
};
use localize_backend::infrastructure::http::{build_router, start_http_server};
use localize_backend::infrastructure::repositories::{
    SarvamClient, SarvamTranslationRepository, SarvamTtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting localize backend on {}:{}",
        config.host,
        config.port
    );

    // The key itself is read per request; only report whether it is there now
    let credentials: Arc<dyn CredentialProvider> = Arc::new(EnvCredentialProvider);
    let has_api_key = credentials.api_key().is_some();
    tracing::info!(
        has_api_key = has_api_key,
        development = config.is_development(),
        "Sarvam credential environment check"
    );
    if !has_api_key {
        tracing::warn!("SARVAM_API_KEY not set; translate and tts requests will be rejected until it is");
    }

    // Shared upstream client
    let http_client = config.http_client()?;
    let sarvam_client = Arc::new(SarvamClient::new(config.sarvam_base_url.clone(), http_client));
    tracing::info!(
        base_url = sarvam_client.base_url(),
        timeout_secs = ?config.upstream_timeout_secs,
        "Sarvam client initialized"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let translation_repo = Arc::new(SarvamTranslationRepository::new(sarvam_client.clone()));
    let tts_repo = Arc::new(SarvamTtsRepository::new(sarvam_client));

    // 2. Instantiate services (inject repositories and credentials)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(
        translation_repo,
        credentials.clone(),
        config.translate_max_concurrency,
    ));
    let speech_service = Arc::new(SpeechService::new(tts_repo, credentials.clone()));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let translate_controller = Arc::new(TranslateController::new(translation_service));
    let tts_controller = Arc::new(TtsController::new(speech_service));

    // Start HTTP server with all routes
    let app = build_router(translate_controller, tts_controller, credentials);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "localize_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "localize_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
