/// Short language codes offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCode {
    Hindi,
    Marathi,
    Telugu,
    Tamil,
    Kannada,
    Bengali,
    English,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 7] = [
        LanguageCode::Hindi,
        LanguageCode::Marathi,
        LanguageCode::Telugu,
        LanguageCode::Tamil,
        LanguageCode::Kannada,
        LanguageCode::Bengali,
        LanguageCode::English,
    ];

    /// Get the short code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Hindi => "hi",
            LanguageCode::Marathi => "mr",
            LanguageCode::Telugu => "te",
            LanguageCode::Tamil => "ta",
            LanguageCode::Kannada => "kn",
            LanguageCode::Bengali => "bn",
            LanguageCode::English => "en",
        }
    }

    /// Locale tag expected by the provider
    pub fn locale(&self) -> &'static str {
        match self {
            LanguageCode::Hindi => "hi-IN",
            LanguageCode::Marathi => "mr-IN",
            LanguageCode::Telugu => "te-IN",
            LanguageCode::Tamil => "ta-IN",
            LanguageCode::Kannada => "kn-IN",
            LanguageCode::Bengali => "bn-IN",
            LanguageCode::English => "en-IN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::Hindi => "Hindi",
            LanguageCode::Marathi => "Marathi",
            LanguageCode::Telugu => "Telugu",
            LanguageCode::Tamil => "Tamil",
            LanguageCode::Kannada => "Kannada",
            LanguageCode::Bengali => "Bengali",
            LanguageCode::English => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.as_str() == code)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a user-selected code to the provider locale tag.
///
/// Codes outside the supported set are passed through unchanged so the
/// provider gets to decide what to do with them.
pub fn to_locale(code: &str) -> &str {
    match LanguageCode::from_code(code) {
        Some(lang) => lang.locale(),
        None => code,
    }
}
