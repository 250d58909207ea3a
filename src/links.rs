//! Wikilink extraction.
//!
//! Every top-level `[[...]]` span is replaced by its display text, and a
//! [`LinkRecord`] locating that text in the output is emitted alongside.

use log::{debug, trace};

use crate::brackets::{char_len_at, match_span};
use crate::result::{LinkExtraction, LinkRecord};

/// How the inner content of a `[[...]]` span was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `[[Target]]`: display text is the target.
    Plain,
    /// `[[Namespace:Target]]`: display text follows the last `:`.
    Namespaced,
    /// `[[Target|Label]]`: display text is the label.
    Piped,
}

/// The target and display text of one wikilink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLink<'a> {
    pub kind: LinkKind,
    /// Raw target, namespace prefix included.
    pub target: &'a str,
    pub display: &'a str,
}

/// Classifies the content between `[[` and `]]`.
///
/// With three or more `|`-separated parts only the first two are used.
#[must_use]
pub fn classify(inner: &str) -> ParsedLink<'_> {
    let mut parts = inner.split('|');
    let target = parts.next().unwrap_or_default();

    if let Some(label) = parts.next() {
        return ParsedLink {
            kind: LinkKind::Piped,
            target,
            display: label,
        };
    }

    match inner.rsplit_once(':') {
        Some((_, display)) => ParsedLink {
            kind: LinkKind::Namespaced,
            target: inner,
            display,
        },
        None => ParsedLink {
            kind: LinkKind::Plain,
            target: inner,
            display: inner,
        },
    }
}

/// Replaces wikilinks with their display text and records where each landed.
///
/// Text outside bracket spans is copied unchanged. An opening `[[` that never
/// balances is kept literally and scanning resumes one character later.
///
/// # Example
///
/// ```
/// use wikitext_clean::extract_links;
///
/// let result = extract_links("See [[Earth]] now");
/// assert_eq!(result.text, "See Earth now");
/// assert_eq!(result.links[0].begin, 4);
/// assert_eq!(result.links[0].end, 9);
/// ```
#[must_use]
pub fn extract_links(text: &str) -> LinkExtraction {
    let mut out = String::with_capacity(text.len());
    let mut out_chars = 0;
    let mut links = Vec::new();
    let mut begin = 0;

    while let Some(offset) = text[begin..].find("[[") {
        let open = begin + offset;
        let before = &text[begin..open];
        out.push_str(before);
        out_chars += before.chars().count();

        let Some(end) = match_span(text, open) else {
            trace!("Unmatched [[ at byte {open}");
            let step = char_len_at(text, open);
            out.push_str(&text[open..open + step]);
            out_chars += 1;
            begin = open + step;
            continue;
        };

        let parsed = classify(&text[open + 2..end - 2]);
        let len = parsed.display.chars().count();
        links.push(LinkRecord {
            begin: out_chars,
            end: out_chars + len,
            link: parsed.target.to_string(),
            text: parsed.display.to_string(),
        });
        out.push_str(parsed.display);
        out_chars += len;
        begin = end;
    }

    out.push_str(&text[begin..]);
    debug!("Extracted {} links from {} bytes", links.len(), text.len());

    LinkExtraction { text: out, links }
}
