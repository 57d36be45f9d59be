//! Machine translation for Dwarf Fortress language files
//!
//! Reads a CP437 `language_*.txt` file, sends the base word of every
//! `[T_WORD:<english>:<translation>]` marker through a machine translator in
//! batches, and writes a copy of the file with the translations replaced.
//!
//! # Example
//!
//! ```ignore
//! use df_language_mt::langfile::{LineTransformer, output_path, validate_input_path};
//! use df_language_mt::mt::GoogleTranslateProvider;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let input = Path::new("raw/objects/language_DWARF.txt");
//!     validate_input_path(input)?;
//!
//!     let provider = GoogleTranslateProvider::from_env()?;
//!     let stats = LineTransformer::new(&provider, "en", "fr")
//!         .translate_file(input, &output_path(input, "fr"), |_| {})
//!         .await?;
//!     println!("{} markers translated", stats.markers);
//!     Ok(())
//! }
//! ```

pub mod langfile;
pub mod mt;

pub use langfile::{LangFileError, LangFileResult, LineTransformer, TransformStats};
pub use mt::{GoogleTranslateProvider, MachineTranslator, MockMode, MockTranslator, MtError};
