//! Result types for link extraction output.
//!
//! Offsets in [`LinkRecord`] always point into [`LinkExtraction::text`], the
//! string the caller renders, never into the markup that was scanned.

use serde::{Deserialize, Serialize};

/// A wikilink found during extraction.
///
/// `begin` and `end` are character (Unicode scalar) offsets into the output
/// text, so `text.chars().count() == end - begin`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Offset of the first display character in the output text.
    pub begin: usize,

    /// Offset one past the last display character in the output text.
    pub end: usize,

    /// Raw link target, including any namespace prefix.
    pub link: String,

    /// Display text spliced into the output.
    pub text: String,
}

impl LinkRecord {
    /// Number of characters this link occupies in the output text.
    ///
    /// A record with `end < begin` has length 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Returns `true` if the link renders no text (e.g. `[[]]`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Namespace prefix of the target (text before the first `:`), if any.
    ///
    /// ```
    /// use wikitext_clean::LinkRecord;
    ///
    /// let record = LinkRecord {
    ///     begin: 0,
    ///     end: 7,
    ///     link: "Category:Science".to_string(),
    ///     text: "Science".to_string(),
    /// };
    /// assert_eq!(record.namespace(), Some("Category"));
    /// ```
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.link.split_once(':').map(|(ns, _)| ns)
    }
}

/// Output of link extraction: the rendered text and the links within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkExtraction {
    /// Text with every matched `[[...]]` replaced by its display text.
    pub text: String,

    /// Links in the order they appear in `text`.
    pub links: Vec<LinkRecord>,
}
