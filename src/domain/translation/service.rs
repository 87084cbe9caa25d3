use super::dto::TranslateRequest;
use super::error::TranslationServiceError;
use crate::domain::language::to_locale;
use crate::infrastructure::config::CredentialProvider;
use crate::infrastructure::repositories::{TranslationRepository, UpstreamError};
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Why a language ended up with the fallback string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    /// Provider answered with a non-success status
    Status,
    /// Transport failure or undecodable body
    Exception,
    /// Success status but no `translated_text`
    MissingTranslation,
}

impl From<&UpstreamError> for FallbackCause {
    fn from(err: &UpstreamError) -> Self {
        if err.is_status() {
            FallbackCause::Status
        } else {
            FallbackCause::Exception
        }
    }
}

/// Settled result for one requested language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOutcome {
    pub code: String,
    pub text: String,
    pub fallback: Option<FallbackCause>,
}

/// Deterministic substitute used when a language could not be translated
pub fn fallback_text(code: &str, source_text: &str) -> String {
    format!("[{}] {}", code, source_text)
}

#[derive(Debug, Clone)]
pub struct TranslationResult {
    /// One outcome per requested code, in request order
    pub outcomes: Vec<LanguageOutcome>,
}

impl TranslationResult {
    pub fn fallback_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.fallback.is_some()).count()
    }

    /// Collapse into the code → text mapping returned to callers.
    /// Duplicate codes land on the same key.
    pub fn into_translations(self) -> BTreeMap<String, String> {
        self.outcomes
            .into_iter()
            .map(|outcome| (outcome.code, outcome.text))
            .collect()
    }
}

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
    credentials: Arc<dyn CredentialProvider>,
    max_concurrency: Option<usize>,
}

impl TranslationService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        credentials: Arc<dyn CredentialProvider>,
        max_concurrency: Option<usize>,
    ) -> Self {
        Self {
            translation_repo,
            credentials,
            max_concurrency,
        }
    }

    /// Read the provider key for this request. Callers check this before
    /// decoding the request body.
    pub fn api_key(&self) -> Result<String, TranslationServiceError> {
        self.credentials
            .api_key()
            .ok_or_else(|| TranslationServiceError::MissingCredential(self.credentials.name()))
    }

    /// Translate one text into every requested language.
    ///
    /// Input problems fail the whole call before any upstream request is
    /// made. After that the call always succeeds: a language whose upstream
    /// call fails gets `"[code] text"` instead.
    pub async fn translate(
        &self,
        api_key: &str,
        request: TranslateRequest,
    ) -> Result<TranslationResult, TranslationServiceError> {
        let (text, codes) = match (request.text, request.target_langs) {
            (Some(text), Some(codes)) if !text.is_empty() && !codes.is_empty() => (text, codes),
            _ => {
                return Err(TranslationServiceError::Invalid(
                    "text and target_langs[] required".to_string(),
                ))
            }
        };

        tracing::info!(
            text_length = text.len(),
            language_count = codes.len(),
            max_concurrency = ?self.max_concurrency,
            "Translation request"
        );

        // Every future is driven to completion; none short-circuits the rest.
        let width = self.max_concurrency.unwrap_or(codes.len()).max(1);
        let outcomes: Vec<LanguageOutcome> = stream::iter(codes)
            .map(|code| self.translate_one(api_key, &text, code))
            .buffered(width)
            .collect()
            .await;

        let result = TranslationResult { outcomes };

        tracing::info!(
            language_count = result.outcomes.len(),
            fallback_count = result.fallback_count(),
            "Translation request completed"
        );

        Ok(result)
    }

    async fn translate_one(&self, api_key: &str, text: &str, code: String) -> LanguageOutcome {
        let locale = to_locale(&code);

        let response = self.translation_repo.translate(api_key, text, locale).await;

        let fallback = match response {
            Ok(Some(translated)) => {
                return LanguageOutcome {
                    code,
                    text: translated,
                    fallback: None,
                };
            }
            Ok(None) => {
                tracing::warn!(
                    lang = %code,
                    locale = locale,
                    "Translation response had no translated_text, using fallback"
                );
                FallbackCause::MissingTranslation
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    lang = %code,
                    locale = locale,
                    "Translation call failed, using fallback"
                );
                FallbackCause::from(&e)
            }
        };

        LanguageOutcome {
            text: fallback_text(&code, text),
            code,
            fallback: Some(fallback),
        }
    }
}
