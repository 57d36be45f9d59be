//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for testing
//! the language file pipeline without requiring API keys or network access.
//! The CLI exposes it through `--mock` for dry runs.
//!
//! # Example
//!
//! ```ignore
//! use df_language_mt::mt::{MachineTranslator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let words = vec!["fire".to_string()];
//!     let result = mock.translate_batch(&words, "en", "fr").await.unwrap();
//!     assert_eq!(result, vec!["fire_fr"]);
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{Language, MachineTranslator};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append locale suffix: "fire" → "fire_fr"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target_locale) → translation, falling back to `Suffix`
    Mappings(HashMap<(String, String), String>),

    /// Like `Suffix`, but return at most this many results per batch
    Truncate(usize),

    /// Simulate API errors on every call
    Error(String),

    /// Succeed for this many batch calls, then fail every call after
    FailAfter(usize),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    languages: Vec<Language>,
    /// Number of `translate_batch` calls served so far
    batch_calls: AtomicUsize,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            languages: default_languages(),
            batch_calls: AtomicUsize::new(0),
        }
    }

    /// Replace the advertised language list
    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    /// How many batch round-trips this translator has served
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix | MockMode::Truncate(_) | MockMode::FailAfter(_) => {
                Ok(format!("{}_{}", text, target))
            }
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

/// A small, fixed subset of the languages Google Translate offers
fn default_languages() -> Vec<Language> {
    [
        ("de", "German"),
        ("es", "Spanish"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("it", "Italian"),
        ("ja", "Japanese"),
        ("pl", "Polish"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("zh-CN", "Chinese (Simplified)"),
    ]
    .into_iter()
    .map(|(code, name)| Language::new(code, name))
    .collect()
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate_batch(
        &self,
        texts: &[String],
        _source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        let served = self.batch_calls.fetch_add(1, Ordering::SeqCst);
        if let MockMode::FailAfter(limit) = self.mode {
            if served >= limit {
                return Err(MtError::NetworkError(format!(
                    "connection reset after {} batches",
                    limit
                )));
            }
        }

        let take = match self.mode {
            MockMode::Truncate(max) => max.min(texts.len()),
            _ => texts.len(),
        };

        texts[..take]
            .iter()
            .map(|text| self.apply_translation(text, target_locale))
            .collect()
    }

    async fn supported_languages(&self, _display_locale: &str) -> MtResult<Vec<Language>> {
        if let MockMode::Error(msg) = &self.mode {
            return Err(MtError::NetworkError(msg.clone()));
        }
        Ok(self.languages.clone())
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
