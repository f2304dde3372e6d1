use crate::TranslateError;

pub const MISSING_KEY_MESSAGE: &str = "번역 API 키가 설정되지 않았습니다.";
pub const INVALID_KEY_MESSAGE: &str = "번역 API 키가 유효하지 않습니다.";
pub const QUOTA_EXCEEDED_MESSAGE: &str = "일일 번역 한도를 초과했습니다.";

/// Why a word could not be translated, in the terms shown to the learner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationFailure {
    MissingKey,
    InvalidKey,
    QuotaExceeded,
    Other(String),
}

impl TranslationFailure {
    pub fn classify(error: &TranslateError) -> Self {
        match error {
            TranslateError::AuthenticationError => return TranslationFailure::MissingKey,
            TranslateError::RateLimitExceeded => return TranslationFailure::QuotaExceeded,
            _ => {}
        }

        let raw = error.to_string();
        let lowered = raw.to_lowercase();

        // Google reports these as free text inside the error body
        if lowered.contains("api key not valid") {
            TranslationFailure::InvalidKey
        } else if lowered.contains("daily limit exceeded") {
            TranslationFailure::QuotaExceeded
        } else {
            TranslationFailure::Other(raw)
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            TranslationFailure::MissingKey => MISSING_KEY_MESSAGE.to_string(),
            TranslationFailure::InvalidKey => INVALID_KEY_MESSAGE.to_string(),
            TranslationFailure::QuotaExceeded => QUOTA_EXCEEDED_MESSAGE.to_string(),
            TranslationFailure::Other(raw) => format!("번역 실패: {raw}"),
        }
    }
}
