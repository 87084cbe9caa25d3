use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::language::LanguageCode;

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub locale: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

/// GET /api/languages - Languages with a known provider locale
pub async fn list_languages() -> Json<LanguagesResponse> {
    let languages = LanguageCode::ALL
        .iter()
        .map(|lang| LanguageInfo {
            code: lang.to_string(),
            name: lang.display_name().to_string(),
            locale: lang.locale().to_string(),
        })
        .collect();

    Json(LanguagesResponse { languages })
}
