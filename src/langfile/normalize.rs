//! Normalization of translated words before they go back into a language file

use crate::langfile::codec::to_cp437_compatible;
use deunicode::deunicode_with_tofu;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Turn a raw machine translation into a single lower-case CP437 token
///
/// Steps, in order:
/// 1. transliterate to ASCII, dropping glyphs with no ASCII approximation
/// 2. restrict to code page 437 (`?` for anything left over)
/// 3. collapse each whitespace run into one `-`
/// 4. remove backticks
/// 5. lower-case
///
/// The output is a fixed point: normalizing it again changes nothing.
pub fn normalize_translation(word: &str) -> String {
    let ascii = deunicode_with_tofu(word, "");
    let encodable = to_cp437_compatible(&ascii);
    let single_token = WHITESPACE_RUN.replace_all(&encodable, "-");
    single_token.replace('`', "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_word_is_lower_cased() {
        assert_eq!(normalize_translation("Feu"), "feu");
    }

    #[test]
    fn test_diacritics_and_spaces() {
        assert_eq!(normalize_translation("grand épée"), "grand-epee");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(normalize_translation("a  \t b"), "a-b");
    }

    #[test]
    fn test_backticks_removed() {
        assert_eq!(normalize_translation("`Quote`"), "quote");
    }

    #[test]
    fn test_non_latin_is_transliterated() {
        let out = normalize_translation("Огонь");
        assert!(out.starts_with("ogon"));
        assert!(out.is_ascii());
    }

    #[test]
    fn test_placeholder_passes_through() {
        assert_eq!(normalize_translation("?"), "?");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for word in [
            "Feu",
            "grand épée",
            "Schwert  des Königs",
            "`tick` tock",
            "Огонь",
            "北京",
            " leading and trailing ",
            "",
        ] {
            let once = normalize_translation(word);
            assert_eq!(normalize_translation(&once), once, "input: {:?}", word);
        }
    }

    #[test]
    fn test_output_has_no_whitespace_or_uppercase() {
        let out = normalize_translation("Großes Schwert");
        assert!(!out.chars().any(char::is_whitespace));
        assert_eq!(out, out.to_lowercase());
        assert!(out.is_ascii());
    }
}
