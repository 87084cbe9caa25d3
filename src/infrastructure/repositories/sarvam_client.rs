use super::error::UpstreamError;
use serde::Serialize;

pub const TRANSLATE_PATH: &str = "/translate";
pub const TEXT_TO_SPEECH_PATH: &str = "/text-to-speech";

const API_KEY_HEADER: &str = "api-subscription-key";

/// Thin JSON-over-HTTP client for the Sarvam API
pub struct SarvamClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl SarvamClient {
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and return the parsed JSON response.
    ///
    /// Non-success statuses are returned as `UpstreamError::Status` with the
    /// response text attached for logging.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        api_key: &str,
        body: &B,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
