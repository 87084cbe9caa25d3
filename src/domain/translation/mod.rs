pub mod dto;
pub mod error;
pub mod service;

pub use dto::{TranslateRequest, TranslateResponse};
pub use error::TranslationServiceError;
pub use service::{fallback_text, FallbackCause, LanguageOutcome, TranslationResult, TranslationService};
