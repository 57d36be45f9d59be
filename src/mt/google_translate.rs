//! Google Translate API provider for machine translation
//!
//! This module integrates with Google Translate API v2 to provide real
//! machine translation capabilities.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GOOGLE_TRANSLATE_API_KEY`
//! environment variable. Obtain a key from:
//! https://console.cloud.google.com/
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
//!     let languages = provider.supported_languages("en").await?;
//!     println!("{} target languages", languages.len());
//!
//!     let words = vec!["fire".to_string(), "stone".to_string()];
//!     let results = provider.translate_batch(&words, "en", "de").await?;
//!     println!("{:?}", results);
//!
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{Language, MachineTranslator, validate_locale};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

/// Default endpoint of the v2 REST API
const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Translate API v2 provider
///
/// Communicates with Google's translation API to perform real translations.
/// Translates in batches, chunking large requests automatically.
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for Google Translate API
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Maximum number of texts per API request
    /// Google Translate v2 API accepts up to 128 texts per request
    const MAX_BATCH_SIZE: usize = 128;

    /// Maximum characters per string (30KB per Google Translate API limits)
    const MAX_CHARS_PER_STRING: usize = 30_000;

    /// Create a new GoogleTranslateProvider with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If API key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a GoogleTranslateProvider from the `GOOGLE_TRANSLATE_API_KEY` environment variable
    pub fn from_env() -> MtResult<Self> {
        let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY").map_err(|_| {
            MtError::ConfigError(
                "GOOGLE_TRANSLATE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Self::new(api_key)
    }

    /// Point the provider at a different endpoint (proxies, regional hosts)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Chunk a batch of texts into API-safe sizes
    ///
    /// Google Translate API has a limit of 128 texts per request.
    fn chunk_batch(texts: &[String]) -> Vec<&[String]> {
        texts.chunks(Self::MAX_BATCH_SIZE).collect()
    }

    /// Map a non-success HTTP status to the matching error variant
    async fn status_error(response: reqwest::Response) -> MtError {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if status.is_client_error() {
            MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
        } else {
            MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
        }
    }

    /// Translate a single chunk of texts via the API
    ///
    /// Texts should already be at most `MAX_BATCH_SIZE` long.
    async fn translate_chunk(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        let url = format!("{}?key={}", self.base_url, self.api_key);

        let body = json!({
            "q": texts,
            "source": source_locale,
            "target": target_locale,
            "format": "text"
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        let translations = json["data"]["translations"].as_array().ok_or_else(|| {
            MtError::TranslationError(
                "Invalid API response: missing 'data.translations' array".to_string(),
            )
        })?;

        translations
            .iter()
            .map(|t| {
                t["translatedText"]
                    .as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| {
                        MtError::TranslationError(
                            "Invalid API response: missing 'translatedText' field".to_string(),
                        )
                    })
            })
            .collect()
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if texts.is_empty() {
            return Ok(Vec::new());
        }

        for (i, text) in texts.iter().enumerate() {
            if text.len() > Self::MAX_CHARS_PER_STRING {
                return Err(MtError::TranslationError(format!(
                    "Text at index {} exceeds maximum length of {} characters",
                    i,
                    Self::MAX_CHARS_PER_STRING
                )));
            }
        }

        let mut all_results = Vec::with_capacity(texts.len());
        for chunk in Self::chunk_batch(texts) {
            let chunk_results = self
                .translate_chunk(chunk, source_locale, target_locale)
                .await?;
            all_results.extend(chunk_results);
        }

        if all_results.len() != texts.len() {
            warn!(
                requested = texts.len(),
                received = all_results.len(),
                "Google Translate returned a short batch"
            );
        }
        debug!(count = all_results.len(), "batch translated");

        Ok(all_results)
    }

    async fn supported_languages(&self, display_locale: &str) -> MtResult<Vec<Language>> {
        validate_locale(display_locale)?;

        let url = format!(
            "{}/languages?key={}&target={}",
            self.base_url, self.api_key, display_locale
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        parse_languages(json)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

/// Extract `data.languages` from a `/languages` response body
fn parse_languages(mut json: serde_json::Value) -> MtResult<Vec<Language>> {
    let languages = json
        .pointer_mut("/data/languages")
        .filter(|value| value.is_array())
        .map(serde_json::Value::take)
        .ok_or_else(|| {
            MtError::TranslationError(
                "Invalid API response: missing 'data.languages' array".to_string(),
            )
        })?;

    serde_json::from_value(languages).map_err(|e| {
        MtError::TranslationError(format!("Invalid language entry in API response: {}", e))
    })
}
