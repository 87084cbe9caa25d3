use super::error::UpstreamError;
use async_trait::async_trait;
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

/// Providers may drop padding or wrap long clips across lines; both still play.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decoded shape of a successful synthesis response.
///
/// The provider either returns a list of base64 clips (`audios`) or a single
/// clip (`audio`). Anything else is `Unrecognized` and handled by the caller
/// exactly like a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisPayload {
    /// First clip of a populated `audios` list
    AudioList(String),
    /// Direct `audio` field
    Audio(String),
    Unrecognized,
}

impl SynthesisPayload {
    pub fn from_body(body: &serde_json::Value) -> Self {
        if let Some(first) = body
            .get("audios")
            .and_then(|audios| audios.as_array())
            .and_then(|audios| audios.first())
        {
            return match first.as_str().filter(|clip| is_playable(clip)) {
                Some(clip) => SynthesisPayload::AudioList(clip.to_string()),
                None => SynthesisPayload::Unrecognized,
            };
        }

        match body
            .get("audio")
            .and_then(|audio| audio.as_str())
            .filter(|clip| is_playable(clip))
        {
            Some(clip) => SynthesisPayload::Audio(clip.to_string()),
            None => SynthesisPayload::Unrecognized,
        }
    }

    /// Base64 audio carried by a recognized payload
    pub fn into_audio(self) -> Option<String> {
        match self {
            SynthesisPayload::AudioList(clip) | SynthesisPayload::Audio(clip) => Some(clip),
            SynthesisPayload::Unrecognized => None,
        }
    }
}

fn is_playable(clip: &str) -> bool {
    let compact: Vec<u8> = clip
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    !compact.is_empty() && LENIENT_BASE64.decode(&compact).is_ok()
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` in `locale`
    ///
    /// # Errors
    /// Returns error on non-success status, transport failure or an
    /// undecodable body. A decodable body of the wrong shape is
    /// `Ok(SynthesisPayload::Unrecognized)`.
    async fn synthesize(
        &self,
        api_key: &str,
        text: &str,
        locale: &str,
    ) -> Result<SynthesisPayload, UpstreamError>;
}
