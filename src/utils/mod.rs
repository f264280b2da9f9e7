//! Utility functions and helpers.

pub mod clock;
pub mod json;

pub use clock::{Clock, FixedClock, SystemClock};

/// Decode an S3 event object key.
///
/// Keys arrive form-encoded: `+` stands for a space and reserved bytes are
/// `%XX` escapes, so `%2B` is a literal `+`. Byte sequences that are not
/// UTF-8 after decoding become U+FFFD.
pub fn decode_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_key() {
        assert_eq!(decode_key("input/plain.txt"), "input/plain.txt");
        assert_eq!(decode_key("input/sample%2Bfile.txt"), "input/sample+file.txt");
        assert_eq!(decode_key("a+b%20c"), "a b c");
        assert_eq!(decode_key("avis/r%C3%A9sum%C3%A9.txt"), "avis/résumé.txt");
        assert_eq!(decode_key("100%.txt"), "100%.txt");
    }

    #[test]
    fn test_decode_key_replaces_invalid_utf8() {
        assert_eq!(decode_key("bad%FF.txt"), "bad\u{FFFD}.txt");
    }
}
