//! CP437 text codec for language files
//!
//! Language files are stored in code page 437. Every byte value decodes to
//! exactly one `char`, so decoding a line and encoding it again gives back
//! the original bytes.

use codepage_437::CP437_CONTROL;

/// Substitute for characters code page 437 cannot represent
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Decode CP437 bytes into a string. Never fails.
pub fn decode_cp437(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| CP437_CONTROL.decode(byte)).collect()
}

/// Encode a string as CP437, writing `?` for unrepresentable characters
///
/// The dialect also maps some lookalikes (`€` to `ε`, `ø` to `φ`); only
/// bytes that decode back to the same character are kept.
pub fn encode_cp437(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(c: char) -> u8 {
    CP437_CONTROL
        .encode(c)
        .filter(|&byte| CP437_CONTROL.decode(byte) == c)
        .unwrap_or(REPLACEMENT_BYTE)
}

/// Restrict a string to the characters code page 437 can hold
pub fn to_cp437_compatible(text: &str) -> String {
    decode_cp437(&encode_cp437(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let line = "[T_WORD:fire:feu]\n";
        assert_eq!(encode_cp437(line), line.as_bytes());
        assert_eq!(decode_cp437(line.as_bytes()), line);
    }

    #[test]
    fn test_every_byte_survives_decode_encode() {
        let bytes: Vec<u8> = (0..=255u8).collect();
        assert_eq!(encode_cp437(&decode_cp437(&bytes)), bytes);
    }

    #[test]
    fn test_high_half_characters() {
        // 0x82 is é, 0x9C is £, 0xDB is the full block
        assert_eq!(decode_cp437(&[0x82, 0x9C, 0xDB]), "é£█");
        assert_eq!(encode_cp437("é£█"), vec![0x82, 0x9C, 0xDB]);
    }

    #[test]
    fn test_unrepresentable_becomes_question_mark() {
        assert_eq!(encode_cp437("a€b"), b"a?b");
        assert_eq!(to_cp437_compatible("日本"), "??");
    }

    #[test]
    fn test_lookalikes_are_not_substituted() {
        assert_eq!(encode_cp437("ØøβΔΠμϕð"), b"????????");
        assert_eq!(to_cp437_compatible("Ørn"), "?rn");
    }

    #[test]
    fn test_encoded_characters_decode_to_themselves() {
        for c in (0x80u32..=0x2FFFF).filter_map(char::from_u32) {
            let byte = encode_char(c);
            if byte != REPLACEMENT_BYTE {
                assert_eq!(CP437_CONTROL.decode(byte), c, "U+{:04X}", c as u32);
            }
        }
    }

    #[test]
    fn test_compatible_keeps_cp437_letters() {
        assert_eq!(to_cp437_compatible("épée"), "épée");
    }
}
