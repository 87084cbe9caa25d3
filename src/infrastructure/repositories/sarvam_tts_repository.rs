use super::error::UpstreamError;
use super::sarvam_client::{SarvamClient, TEXT_TO_SPEECH_PATH};
use super::tts_repository::{SynthesisPayload, TtsRepository};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

const SPEAKER: &str = "meera";
const MODEL: &str = "bulbul:v1";
const SPEECH_SAMPLE_RATE: u32 = 8000;

#[derive(Debug, Serialize)]
struct TextToSpeechBody<'a> {
    inputs: [&'a str; 1],
    target_language_code: &'a str,
    speaker: &'a str,
    pitch: f32,
    pace: f32,
    loudness: f32,
    speech_sample_rate: u32,
    enable_preprocessing: bool,
    model: &'a str,
}

impl<'a> TextToSpeechBody<'a> {
    fn new(text: &'a str, target_language_code: &'a str) -> Self {
        Self {
            inputs: [text],
            target_language_code,
            speaker: SPEAKER,
            pitch: 0.0,
            pace: 1.0,
            loudness: 1.0,
            speech_sample_rate: SPEECH_SAMPLE_RATE,
            enable_preprocessing: true,
            model: MODEL,
        }
    }
}

/// Sarvam implementation of TTS repository
pub struct SarvamTtsRepository {
    client: Arc<SarvamClient>,
}

impl SarvamTtsRepository {
    pub fn new(client: Arc<SarvamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TtsRepository for SarvamTtsRepository {
    async fn synthesize(
        &self,
        api_key: &str,
        text: &str,
        locale: &str,
    ) -> Result<SynthesisPayload, UpstreamError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            provider = "sarvam",
            locale = locale,
            speaker = SPEAKER,
            text_length = text.len(),
            "Calling Sarvam text-to-speech"
        );

        let body = TextToSpeechBody::new(text, locale);
        let response = self
            .client
            .post_json(TEXT_TO_SPEECH_PATH, api_key, &body)
            .await?;

        let payload = SynthesisPayload::from_body(&response);

        tracing::info!(
            provider = "sarvam",
            locale = locale,
            latency_ms = start_time.elapsed().as_millis(),
            recognized = payload != SynthesisPayload::Unrecognized,
            "TTS synthesis completed"
        );

        Ok(payload)
    }
}
