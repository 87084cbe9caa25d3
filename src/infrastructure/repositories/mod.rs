pub mod error;
pub mod sarvam_client;
pub mod sarvam_translation_repository;
pub mod sarvam_tts_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use error::UpstreamError;
pub use sarvam_client::SarvamClient;
pub use sarvam_translation_repository::SarvamTranslationRepository;
pub use sarvam_tts_repository::SarvamTtsRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::{SynthesisPayload, TtsRepository};
