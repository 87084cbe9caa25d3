use super::error::UpstreamError;
use super::sarvam_client::{SarvamClient, TRANSLATE_PATH};
use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Scripts are always submitted as Hindi.
// TODO: take the source locale from the request once the wizard lets users pick the script language.
pub const SOURCE_LOCALE: &str = "hi-IN";
const MODEL: &str = "mayura:v1";

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    input: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
    speaker_gender: &'a str,
    mode: &'a str,
    model: &'a str,
    enable_preprocessing: bool,
}

impl<'a> TranslateBody<'a> {
    fn new(input: &'a str, target_language_code: &'a str) -> Self {
        Self {
            input,
            source_language_code: SOURCE_LOCALE,
            target_language_code,
            speaker_gender: "Female",
            mode: "formal",
            model: MODEL,
            enable_preprocessing: true,
        }
    }
}

/// Sarvam implementation of the translation repository
pub struct SarvamTranslationRepository {
    client: Arc<SarvamClient>,
}

impl SarvamTranslationRepository {
    pub fn new(client: Arc<SarvamClient>) -> Self {
        Self { client }
    }
}

/// Pull `translated_text` out of a success body; empty strings count as missing.
fn extract_translated_text(body: &serde_json::Value) -> Option<String> {
    body.get("translated_text")
        .and_then(|value| value.as_str())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl TranslationRepository for SarvamTranslationRepository {
    async fn translate(
        &self,
        api_key: &str,
        text: &str,
        target_locale: &str,
    ) -> Result<Option<String>, UpstreamError> {
        let start_time = std::time::Instant::now();

        let body = TranslateBody::new(text, target_locale);
        let response = self
            .client
            .post_json(TRANSLATE_PATH, api_key, &body)
            .await?;

        tracing::debug!(
            provider = "sarvam",
            target_locale = target_locale,
            latency_ms = start_time.elapsed().as_millis(),
            "Translation call completed"
        );

        Ok(extract_translated_text(&response))
    }
}
