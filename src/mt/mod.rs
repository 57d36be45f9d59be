/// Machine Translation Module
///
/// Provider abstraction used by the language file transformer.
///
/// # Overview
///
/// 1. **MT Trait** - `MachineTranslator`, a batch-oriented async interface
/// 2. **Google Translate** - the production provider (API v2)
/// 3. **Mock** - a deterministic provider for tests and `--mock` dry runs
///
/// # Example
///
/// ```ignore
/// use df_language_mt::mt::{MachineTranslator, GoogleTranslateProvider, ensure_supported};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = GoogleTranslateProvider::from_env()?;
///     let languages = provider.supported_languages("en").await?;
///     ensure_supported("fr", &languages)?;
///
///     let words = vec!["fire".to_string(), "sword".to_string()];
///     let translated = provider.translate_batch(&words, "en", "fr").await?;
///     println!("{:?}", translated);
///     Ok(())
/// }
/// ```
pub mod error;
pub mod google_translate;
pub mod mock;
pub mod translator;

pub use error::{MtError, MtResult};
pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use translator::{Language, MachineTranslator, ensure_supported, validate_locale};
