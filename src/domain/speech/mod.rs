pub mod dto;
pub mod error;
pub mod service;
pub mod tone;

pub use dto::{FallbackNote, TtsRequest, TtsResponse};
pub use error::SpeechServiceError;
pub use service::{SpeechService, SynthesisResult, AUDIO_CONTENT_TYPE};
pub use tone::Tone;
