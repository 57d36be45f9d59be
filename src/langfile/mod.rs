//! Dwarf Fortress language files
//!
//! Language files are CP437 text. Most lines are copied through untouched;
//! lines carrying a `[T_WORD:<english>:<translation>]` marker get a new
//! translation. Only the four stock files are accepted as input, and the
//! result is written next to the input as `<stem>-<lang_code>.txt`.

pub mod codec;
pub mod normalize;
pub mod token;
pub mod transformer;


use crate::mt::MtError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use codec::{decode_cp437, encode_cp437, to_cp437_compatible};
pub use normalize::normalize_translation;
pub use token::TokenMarker;
pub use transformer::{BATCH_SIZE, LineTransformer, MISSING_TRANSLATION, TransformStats};

/// Base names of the language files the game ships with
pub const LANG_FILES: [&str; 4] = [
    "language_DWARF.txt",
    "language_ELF.txt",
    "language_GOBLIN.txt",
    "language_HUMAN.txt",
];

#[derive(Debug, Error)]
pub enum LangFileError {
    #[error("{name} is not a valid language file (expected one of: {})", LANG_FILES.join(", "))]
    InvalidLanguageFile { name: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error during batch translation: {0}")]
    Translation(#[from] MtError),
}

pub type LangFileResult<T> = Result<T, LangFileError>;

/// Check that `path` names one of `LANG_FILES`, returning its base name
///
/// Only the path string is inspected; the file is not touched.
pub fn validate_input_path(path: &Path) -> LangFileResult<&str> {
    let name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
    if LANG_FILES.contains(&name) {
        Ok(name)
    } else {
        Err(LangFileError::InvalidLanguageFile {
            name: if name.is_empty() {
                path.display().to_string()
            } else {
                name.to_string()
            },
        })
    }
}

/// Path of the translated file: `<dir>/<stem>-<lang_code>.txt`
pub fn output_path(input: &Path, lang_code: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{}-{}.txt", stem, lang_code))
}

/// Count the lines of a file (a final unterminated line counts)
pub fn count_lines(path: &Path) -> LangFileResult<usize> {
    let reader = BufReader::new(File::open(path)?);
    let mut count = 0;
    for line in reader.split(b'\n') {
        line?;
        count += 1;
    }
    Ok(count)
}
