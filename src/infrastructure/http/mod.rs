use axum::{
    http::{header, HeaderName, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{health, languages, translate::TranslateController, tts::TtsController};
use crate::error::AppError;
use crate::infrastructure::config::{Config, CredentialProvider};

pub mod request_id;

pub use request_id::request_id_middleware;

/// Wildcard-origin CORS. The layer answers every OPTIONS request itself
/// with an empty 200, so no route registers an OPTIONS handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    AppError::Internal(message).into_response()
}

/// Build the application router with all routes configured
pub fn build_router(
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
    credentials: Arc<dyn CredentialProvider>,
) -> Router {
    // Paths mirror the edge functions the wizard already calls
    let translate_routes = Router::new()
        .route("/functions/v1/sarvam-translate", post(TranslateController::translate))
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    let tts_routes = Router::new()
        .route("/functions/v1/sarvam-tts", post(TtsController::synthesize))
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(credentials)
        .route("/api/languages", get(languages::list_languages))
        .merge(translate_routes)
        .merge(tts_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
