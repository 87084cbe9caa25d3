/// Failure talking to the upstream provider.
///
/// Never surfaced to API callers; services turn it into a fallback value.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// True when the provider answered with a non-success status
    pub fn is_status(&self) -> bool {
        matches!(self, UpstreamError::Status { .. })
    }
}
