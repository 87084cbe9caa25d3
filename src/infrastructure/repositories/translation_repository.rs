use super::error::UpstreamError;
use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the underlying provider so the dispatcher can be tested without a network.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` into `target_locale`.
    ///
    /// Returns `Ok(None)` when the provider answered successfully but the
    /// response carried no usable translation.
    ///
    /// # Errors
    /// Returns error on non-success status, transport failure or an
    /// undecodable body.
    async fn translate(
        &self,
        api_key: &str,
        text: &str,
        target_locale: &str,
    ) -> Result<Option<String>, UpstreamError>;
}
