//! Error types for the Machine Translation module

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MtError {
    /// Provider misconfiguration (missing key, rejected request)
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Transport-level failure talking to the provider
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Error during translation phase
    #[error("Translation error: {0}")]
    TranslationError(String),
    /// Locale code with invalid syntax
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
    /// Locale code the provider does not offer
    #[error("Language {code} not recognised. Valid languages: {}", .valid.join(", "))]
    UnsupportedLanguage {
        code: String,
        /// Offered languages, rendered as `code (name)`
        valid: Vec<String>,
    },
    /// General error with context
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_lists_valid_codes() {
        let err = MtError::UnsupportedLanguage {
            code: "xx".to_string(),
            valid: vec!["de".to_string(), "fr".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("xx"));
        assert!(msg.contains("de, fr"));
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            MtError::NetworkError("timeout".to_string()).to_string(),
            "Network error: timeout"
        );
        assert_eq!(MtError::Other("plain".to_string()).to_string(), "plain");
    }
}
