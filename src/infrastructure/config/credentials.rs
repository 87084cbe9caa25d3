/// Name of the environment variable holding the upstream subscription key
pub const SARVAM_API_KEY: &str = "SARVAM_API_KEY";

/// Source of the upstream credential.
///
/// Handlers ask for the key on every request, so rotating the variable
/// takes effect without a restart.
pub trait CredentialProvider: Send + Sync {
    /// Name reported to callers when the key is missing
    fn name(&self) -> &'static str {
        SARVAM_API_KEY
    }

    /// Current key, `None` when absent or empty. Any other value is passed
    /// to the provider as-is.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from the process environment
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn api_key(&self) -> Option<String> {
        std::env::var(SARVAM_API_KEY)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

/// Fixed key, used by tests and embedders
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider(Option<String>);

impl StaticCredentialProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.is_empty())
    }
}
