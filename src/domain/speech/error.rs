use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("missing credential {0}")]
    MissingCredential(&'static str),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::MissingCredential(name) => AppError::MissingCredential(name),
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
        }
    }
}
