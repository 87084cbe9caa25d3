use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use super::decode_body;
use crate::{
    domain::speech::{SpeechService, TtsRequest, TtsResponse},
    error::AppResult,
};

pub struct TtsController {
    speech_service: Arc<SpeechService>,
}

impl TtsController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /functions/v1/sarvam-tts - Convert text to speech.
    /// Always answers with playable audio once the request is valid.
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        body: Bytes,
    ) -> AppResult<Json<TtsResponse>> {
        let api_key = controller.speech_service.api_key()?;
        let request: TtsRequest = decode_body(&body)?;

        let result = controller
            .speech_service
            .synthesize(&api_key, request)
            .await?;

        Ok(Json(result.into()))
    }
}
