use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use super::decode_body;
use crate::{
    domain::translation::{TranslateRequest, TranslateResponse, TranslationService},
    error::AppResult,
};

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /functions/v1/sarvam-translate - Translate a script into every requested language
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        body: Bytes,
    ) -> AppResult<Json<TranslateResponse>> {
        // Credential is reported before anything about the body
        let api_key = controller.translation_service.api_key()?;
        let request: TranslateRequest = decode_body(&body)?;

        let result = controller
            .translation_service
            .translate(&api_key, request)
            .await?;

        Ok(Json(TranslateResponse {
            translations: result.into_translations(),
        }))
    }
}
