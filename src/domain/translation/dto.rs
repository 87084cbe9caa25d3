use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request for POST /functions/v1/sarvam-translate
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_langs: Option<Vec<String>>,
}

/// Response for POST /functions/v1/sarvam-translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translations: BTreeMap<String, String>,
}
