//! `[T_WORD:<key>:<value>]` token markers
//!
//! A marker line names an English word and its current translation:
//!
//! ```text
//!     [T_WORD:fire_sword:placeholder]
//! ```
//!
//! Only the value is ever rewritten. The key is echoed back verbatim, but
//! only its base word (`fire` above) is sent for translation.

use regex::Regex;
use std::sync::LazyLock;

static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\t ]*)\[T_WORD:([^:]+):([^\]]+)\]").expect("marker pattern is valid")
});

/// A token marker found in a language file line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMarker<'a> {
    /// Tabs and spaces directly before the opening bracket
    pub prefix: &'a str,
    /// English key, e.g. `fire_sword`
    pub key: &'a str,
    /// Existing translated value (placeholder or earlier translation)
    pub value: &'a str,
}

impl<'a> TokenMarker<'a> {
    /// Find the first marker in `line`, if any
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = MARKER_PATTERN.captures(line)?;
        Some(Self {
            prefix: captures.get(1).map_or("", |m| m.as_str()),
            key: captures.get(2)?.as_str(),
            value: captures.get(3)?.as_str(),
        })
    }

    /// Leading run of the key up to the first space or underscore
    ///
    /// `None` when the key starts with one of those delimiters.
    pub fn base_word(&self) -> Option<&'a str> {
        let end = self.key.find([' ', '_']).unwrap_or(self.key.len());
        if end == 0 {
            None
        } else {
            Some(&self.key[..end])
        }
    }

    /// Rebuild the marker line with `translated` as the new value
    pub fn render(&self, translated: &str) -> String {
        format!("{}[T_WORD:{}:{}]\n", self.prefix, self.key, translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indented_marker() {
        let marker = TokenMarker::parse("  [T_WORD:fire_sword:placeholder]\n").unwrap();
        assert_eq!(marker.prefix, "  ");
        assert_eq!(marker.key, "fire_sword");
        assert_eq!(marker.value, "placeholder");
    }

    #[test]
    fn test_parse_tab_prefix() {
        let marker = TokenMarker::parse("\t[T_WORD:ABBEY:abbaye]").unwrap();
        assert_eq!(marker.prefix, "\t");
        assert_eq!(marker.key, "ABBEY");
    }

    #[test]
    fn test_parse_without_prefix() {
        let marker = TokenMarker::parse("[T_WORD:stone:pierre]\n").unwrap();
        assert_eq!(marker.prefix, "");
    }

    #[test]
    fn test_plain_lines_do_not_match() {
        assert_eq!(TokenMarker::parse("# comment\n"), None);
        assert_eq!(TokenMarker::parse("[TRANSLATION:DWARF]\n"), None);
        assert_eq!(TokenMarker::parse("\n"), None);
    }

    #[test]
    fn test_malformed_markers_do_not_match() {
        assert_eq!(TokenMarker::parse("[T_WORD:fire]\n"), None);
        assert_eq!(TokenMarker::parse("[T_WORD::feu]\n"), None);
        assert_eq!(TokenMarker::parse("[T_WORD:fire:]\n"), None);
        assert_eq!(TokenMarker::parse("[T_WORD:fire:feu\n"), None);
    }

    #[test]
    fn test_base_word_stops_at_delimiters() {
        let marker = TokenMarker::parse("[T_WORD:fire_sword:x]").unwrap();
        assert_eq!(marker.base_word(), Some("fire"));

        let marker = TokenMarker::parse("[T_WORD:war hammer:x]").unwrap();
        assert_eq!(marker.base_word(), Some("war"));

        let marker = TokenMarker::parse("[T_WORD:ABBEY:x]").unwrap();
        assert_eq!(marker.base_word(), Some("ABBEY"));
    }

    #[test]
    fn test_base_word_missing_for_leading_delimiter() {
        let marker = TokenMarker::parse("[T_WORD:_fire:x]").unwrap();
        assert_eq!(marker.base_word(), None);
    }

    #[test]
    fn test_render_keeps_prefix_and_key() {
        let marker = TokenMarker::parse("  [T_WORD:fire_sword:placeholder]\n").unwrap();
        assert_eq!(marker.render("feu"), "  [T_WORD:fire_sword:feu]\n");
    }

    #[test]
    fn test_render_always_ends_with_newline() {
        let marker = TokenMarker::parse("[T_WORD:stone:pierre]").unwrap();
        assert_eq!(marker.render("stein"), "[T_WORD:stone:stein]\n");
    }
}
