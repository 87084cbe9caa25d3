use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::CredentialProvider;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State(credentials): State<Arc<dyn CredentialProvider>>,
) -> impl IntoResponse {
    match credentials.api_key() {
        Some(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "credential": "configured",
                "translate": "available",
                "tts": "available"
            })),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "credential": "missing",
                "translate": "unavailable",
                "tts": "unavailable"
            })),
        ),
    }
}
