use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("missing credential {0}")]
    MissingCredential(&'static str),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::MissingCredential(name) => AppError::MissingCredential(name),
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
        }
    }
}
