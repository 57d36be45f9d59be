//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the language file transformer can run against Google Translate or a
//! deterministic mock without knowing which one it talks to.
//!
//! # Example
//!
//! ```ignore
//! use df_language_mt::mt::{MachineTranslator, GoogleTranslateProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::from_env()?;
//!
//!     let words = vec!["fire".to_string(), "sword".to_string()];
//!     let results = provider.translate_batch(&words, "en", "fr").await?;
//!     println!("{:?}", results); // ["feu", "épée"]
//!
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A target language offered by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Code accepted as a translation target (e.g. "fr", "zh-CN")
    #[serde(rename = "language")]
    pub code: String,
    /// Human readable name, when the provider supplies one
    #[serde(default)]
    pub name: Option<String>,
}

impl Language {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: Some(name.to_string()),
        }
    }

    /// `"fr (French)"`, or just the code when no name is known
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.code, name),
            None => self.code.clone(),
        }
    }
}

/// Generic trait for machine translation providers
///
/// Implementations of this trait handle the actual translation work,
/// whether through an API (Google Translate) or deterministic logic (Mock).
///
/// All methods are async to support I/O-bound operations like network requests.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate multiple strings in a single batch operation
    ///
    /// The batch either succeeds or fails as a whole. Results come back in
    /// input order; a provider may return fewer results than inputs, and
    /// callers are expected to cope with the shortfall.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>>;

    /// Fetch the set of target languages this provider currently offers
    ///
    /// `display_locale` selects the language of the returned names.
    async fn supported_languages(&self, display_locale: &str) -> MtResult<Vec<Language>>;

    /// Get the name of this translation provider
    ///
    /// Used for logging to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code contains only alphanumeric characters,
/// hyphens, and underscores.
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

/// Check a requested target code against the provider's language list
///
/// Matching is exact: `zh-CN` must be requested as `zh-CN`, not `zh`.
/// On failure the error carries every valid code, with its name when the
/// provider sent one, so it can be shown to the user.
pub fn ensure_supported(code: &str, languages: &[Language]) -> MtResult<()> {
    if languages.iter().any(|lang| lang.code == code) {
        return Ok(());
    }

    Err(MtError::UnsupportedLanguage {
        code: code.to_string(),
        valid: languages.iter().map(Language::label).collect(),
    })
}
