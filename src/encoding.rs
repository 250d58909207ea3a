//! Character encoding detection and transcoding.
//!
//! Article text usually arrives as UTF-8 from dump files, but exports may
//! carry a byte order mark or an XML declaration naming another charset.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<?xml ... encoding="..."?>` declaration
#[allow(clippy::expect_used)]
static XML_ENCODING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<\?xml[^>]*encoding\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

/// Detect character encoding from raw bytes.
///
/// Looks for, in order:
/// 1. A byte order mark
/// 2. `<?xml ... encoding="..."?>`
/// 3. Defaults to UTF-8
///
/// Only examines the first 1024 bytes for the declaration.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = &bytes[..bytes.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    extract_xml_encoding(&head_str)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Extract the charset label from an XML declaration.
fn extract_xml_encoding(text: &str) -> Option<String> {
    XML_ENCODING_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode raw bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with � rather than failing.
///
/// # Examples
///
/// ```
/// use wikitext_clean::encoding::transcode_to_utf8;
///
/// let text = transcode_to_utf8(b"\xEF\xBB\xBF[[Earth]]");
/// assert_eq!(text, "[[Earth]]");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);

    if encoding == UTF_8 {
        let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        return String::from_utf8_lossy(body).into_owned();
    }

    // decode() strips a matching BOM itself
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_to_utf8() {
        assert_eq!(detect_encoding(b"'''Earth''' is a planet."), UTF_8);
    }

    #[test]
    fn detect_utf16_from_bom() {
        let bytes = b"\xFF\xFEa\x00";
        assert_eq!(detect_encoding(bytes).name(), "UTF-16LE");
        assert_eq!(transcode_to_utf8(bytes), "a");
    }

    #[test]
    fn detect_from_xml_declaration() {
        let bytes = br#"<?xml version="1.0" encoding="ISO-8859-1"?><text>x</text>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(bytes).name(), "windows-1252");
    }

    #[test]
    fn transcode_latin1_declaration() {
        let bytes = b"<?xml version='1.0' encoding='latin1'?>Caf\xE9";
        assert!(transcode_to_utf8(bytes).ends_with("Café"));
    }

    #[test]
    fn strips_utf8_bom() {
        assert_eq!(transcode_to_utf8(b"\xEF\xBB\xBFabc"), "abc");
    }

    #[test]
    fn handle_invalid_utf8_gracefully() {
        let result = transcode_to_utf8(b"Test \xFF\xFE Invalid");
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let bytes = br#"<?xml version="1.0" encoding="no-such-charset"?>"#;
        assert_eq!(detect_encoding(bytes), UTF_8);
    }
}
