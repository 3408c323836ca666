//! Unicode normalization for rewrite input and table data
//!
//! Built-in tables are written with precomposed characters, so text is
//! brought to NFC before it is rewritten.

use unicode_normalization::UnicodeNormalization;

/// Normalize text using NFC (canonical composition)
pub fn nfc_normalize(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_composes_decomposed_input() {
        let decomposed = "ye\u{0301}ziliq";
        assert_eq!(nfc_normalize(decomposed), "yéziliq");
        assert!(nfc_normalize(decomposed).len() < decomposed.len());
    }

    #[test]
    fn test_nfc_leaves_composed_text() {
        assert_eq!(nfc_normalize("üzüm"), "üzüm");
        assert_eq!(nfc_normalize("ئۈزۈم"), "ئۈزۈم");
        assert_eq!(nfc_normalize("үзүм"), "үзүм");
    }

    #[test]
    fn test_nfc_multi_line() {
        assert_eq!(nfc_normalize("o\u{0308}\nu\u{0308}\nqiz"), "ö\nü\nqiz");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(nfc_normalize(""), "");
        assert_eq!(nfc_normalize(" \t"), " \t");
    }
}
