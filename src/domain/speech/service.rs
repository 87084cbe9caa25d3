use super::dto::{FallbackNote, TtsRequest, TtsResponse};
use super::error::SpeechServiceError;
use super::tone::Tone;
use crate::domain::language::to_locale;
use crate::infrastructure::config::CredentialProvider;
use crate::infrastructure::repositories::{SynthesisPayload, TtsRepository, UpstreamError};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::Arc;

pub const AUDIO_CONTENT_TYPE: &str = "audio/wav";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    pub audio_base64: String,
    pub content_type: &'static str,
    pub note: Option<FallbackNote>,
}

impl From<SynthesisResult> for TtsResponse {
    fn from(result: SynthesisResult) -> Self {
        TtsResponse {
            audio_base64: result.audio_base64,
            content_type: result.content_type.to_string(),
            note: result.note,
        }
    }
}

pub struct SpeechService {
    tts_repo: Arc<dyn TtsRepository>,
    credentials: Arc<dyn CredentialProvider>,
    placeholder_base64: String,
}

impl SpeechService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            tts_repo,
            credentials,
            placeholder_base64: STANDARD.encode(Tone::PLACEHOLDER.to_wav()),
        }
    }

    /// Read the provider key for this request, before the body is decoded.
    pub fn api_key(&self) -> Result<String, SpeechServiceError> {
        self.credentials
            .api_key()
            .ok_or_else(|| SpeechServiceError::MissingCredential(self.credentials.name()))
    }

    /// Synthesize one text in one language.
    ///
    /// Only missing input fails the call. Every upstream problem degrades to
    /// the placeholder tone, tagged with a note.
    pub async fn synthesize(
        &self,
        api_key: &str,
        request: TtsRequest,
    ) -> Result<SynthesisResult, SpeechServiceError> {
        let (text, lang) = match (request.text, request.lang) {
            (Some(text), Some(lang)) if !text.is_empty() && !lang.is_empty() => (text, lang),
            _ => {
                return Err(SpeechServiceError::Invalid(
                    "text and lang required".to_string(),
                ))
            }
        };

        let locale = to_locale(&lang);

        tracing::info!(
            lang = %lang,
            locale = locale,
            text_length = text.len(),
            "TTS synthesis request"
        );

        let response = self.tts_repo.synthesize(api_key, &text, locale).await;

        let note = match response.map(SynthesisPayload::into_audio) {
            Ok(Some(audio_base64)) => {
                return Ok(SynthesisResult {
                    audio_base64,
                    content_type: AUDIO_CONTENT_TYPE,
                    note: None,
                });
            }
            Ok(None) => {
                tracing::warn!(locale = locale, "TTS unknown response shape, using fallback");
                FallbackNote::FallbackShape
            }
            Err(e) => {
                tracing::error!(error = %e, locale = locale, "TTS call failed, using fallback");
                fallback_note_for(&e)
            }
        };

        Ok(self.placeholder(note))
    }

    fn placeholder(&self, note: FallbackNote) -> SynthesisResult {
        SynthesisResult {
            audio_base64: self.placeholder_base64.clone(),
            content_type: AUDIO_CONTENT_TYPE,
            note: Some(note),
        }
    }
}

fn fallback_note_for(err: &UpstreamError) -> FallbackNote {
    if err.is_status() {
        FallbackNote::FallbackBeep
    } else {
        FallbackNote::FallbackException
    }
}
