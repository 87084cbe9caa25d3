use serde::{Deserialize, Serialize};

/// Request for POST /functions/v1/sarvam-tts
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Marks a response that carries the placeholder tone instead of speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackNote {
    /// Provider answered with a non-success status
    FallbackBeep,
    /// Provider answered but the body had no usable audio
    FallbackShape,
    /// Transport failure or undecodable body
    FallbackException,
}

/// Response for POST /functions/v1/sarvam-tts
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsResponse {
    pub audio_base64: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<FallbackNote>,
}
