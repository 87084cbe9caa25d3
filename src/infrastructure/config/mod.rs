use serde::Deserialize;
use std::env;
use std::time::Duration;

pub mod credentials;

pub use credentials::{
    CredentialProvider, EnvCredentialProvider, StaticCredentialProvider, SARVAM_API_KEY,
};

pub const DEFAULT_SARVAM_BASE_URL: &str = "https://api.sarvam.ai";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Upstream provider
    pub sarvam_base_url: String,
    pub upstream_timeout_secs: Option<u64>,
    // Translation fan-out; None keeps every language in flight at once
    pub translate_max_concurrency: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            sarvam_base_url: env::var("SARVAM_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_SARVAM_BASE_URL.to_string()),
            upstream_timeout_secs: optional_var("UPSTREAM_TIMEOUT_SECS")?,
            translate_max_concurrency: optional_var::<usize>("TRANSLATE_MAX_CONCURRENCY")?
                .filter(|limit| *limit > 0),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }

    /// Build the shared HTTP client used for every upstream call
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.upstream_timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

fn optional_var<T>(name: &str) -> Result<Option<T>, Box<dyn std::error::Error>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => Ok(Some(raw.trim().parse()?)),
        _ => Ok(None),
    }
}
