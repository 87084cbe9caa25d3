use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::AppResult;

pub mod health;
pub mod languages;
pub mod translate;
pub mod tts;

/// Decode a JSON request body whatever its declared content type.
/// Browsers posting a plain string send `text/plain`.
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    Ok(serde_json::from_slice(body)?)
}
