//! Hex encoding of text for PDF show-text operators.

use unicode_normalization::UnicodeNormalization;

/// Encode a string as the uppercase hex byte sequence a content stream can
/// render with the shared WinAnsi (Latin-1 compatible) font.
///
/// The input is NFC-normalized first so accented characters collapse to
/// single code points where a matching single-byte glyph exists. Control
/// characters become a space, whitespace runs collapse to a single space,
/// and any code point that does not fit in one byte is replaced with `?`.
///
/// This never fails: the result is always valid, even-length hex, and the
/// empty string encodes to an empty result.
pub fn text_to_pdf_hex(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut hex = String::new();
    let mut pending_space = false;

    for ch in text.nfc() {
        let ch = if (ch as u32) < 0x20 { ' ' } else { ch };
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            // Collapsed run; leading whitespace still yields one space.
            push_byte(&mut hex, b' ');
            pending_space = false;
        }
        let byte = match ch as u32 {
            cp if cp <= 0xFF => cp as u8,
            _ => b'?',
        };
        push_byte(&mut hex, byte);
    }

    // A trailing (or whitespace-only) run is kept as one space; no trimming
    // happens at this layer.
    if pending_space {
        push_byte(&mut hex, b' ');
    }

    hex
}

fn push_byte(hex: &mut String, byte: u8) {
    use std::fmt::Write;
    // Writing to a String cannot fail.
    let _ = write!(hex, "{:02X}", byte);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_hex() {
        assert_eq!(text_to_pdf_hex(""), "");
    }

    #[test]
    fn test_ascii_encoding() {
        assert_eq!(text_to_pdf_hex("Hi"), "4869");
        assert_eq!(text_to_pdf_hex(" "), "20");
    }

    #[test]
    fn test_latin1_accents_survive_nfc() {
        // "é" as e + combining acute composes to U+00E9 under NFC.
        assert_eq!(text_to_pdf_hex("e\u{0301}"), "E9");
        assert_eq!(text_to_pdf_hex("ç"), "E7");
    }

    #[test]
    fn test_out_of_range_becomes_question_mark() {
        assert_eq!(text_to_pdf_hex("\u{1F600}"), "3F"); // emoji -> '?'
        assert_eq!(text_to_pdf_hex("日"), "3F");
    }

    #[test]
    fn test_control_chars_and_whitespace_collapse() {
        assert_eq!(text_to_pdf_hex("a\x00\x01b"), "612062"); // "a b"
        assert_eq!(text_to_pdf_hex("a \t\n b"), "612062");
    }

    #[test]
    fn test_output_length_always_even() {
        for input in ["", "abc", "çãé", "🎂 bolo", "\t\t"] {
            assert_eq!(text_to_pdf_hex(input).len() % 2, 0);
        }
    }
}
