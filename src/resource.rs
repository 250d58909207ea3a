//! Resource embed removal.
//!
//! `[[File:...]]` and `[[Image:...]]` embeds render no text, so the whole
//! span is deleted. Captions may hold nested `[[...]]` links, which is why the
//! span end comes from the depth-counted matcher rather than a regex.

use log::trace;

use crate::brackets::{char_len_at, match_span};

/// Removes every `[[<kind>:...]]` span from `text`.
///
/// An opener whose brackets never balance is kept: its first character is
/// emitted literally and the search resumes one character later.
///
/// # Example
///
/// ```
/// use wikitext_clean::resource::strip_resource_links;
///
/// let text = "A[[File:x.png|caption with [[nested link]] text]]B";
/// assert_eq!(strip_resource_links(text, "File"), "AB");
/// ```
#[must_use]
pub fn strip_resource_links(text: &str, kind: &str) -> String {
    let pattern = format!("[[{kind}:");

    let Some(mut found) = text.find(&pattern) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    let mut begin = 0;

    loop {
        out.push_str(&text[begin..found]);

        if let Some(end) = match_span(text, found) {
            begin = end;
        } else {
            trace!("Unmatched [[{kind}: opener at byte {found}");
            let step = char_len_at(text, found);
            out.push_str(&text[found..found + step]);
            begin = found + step;
        }

        match text[begin..].find(&pattern) {
            Some(next) => found = begin + next,
            None => break,
        }
    }

    out.push_str(&text[begin..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_simple_file_embed() {
        assert_eq!(strip_resource_links("a[[File:x.png]]b", "File"), "ab");
    }

    #[test]
    fn removes_embed_with_nested_caption_links() {
        let text = "A[[File:x.png|thumb|A [[cat]] on a [[mat|rug]].]]B";
        assert_eq!(strip_resource_links(text, "File"), "AB");
    }

    #[test]
    fn removes_every_occurrence() {
        let text = "[[Image:a.png]]one[[Image:b.png|x]]two[[Image:c.png]]";
        assert_eq!(strip_resource_links(text, "Image"), "onetwo");
    }

    #[test]
    fn leaves_other_kinds_alone() {
        let text = "[[Image:a.png]] [[Earth]]";
        assert_eq!(strip_resource_links(text, "File"), text);
    }

    #[test]
    fn kind_match_is_case_sensitive() {
        let text = "[[file:a.png]]";
        assert_eq!(strip_resource_links(text, "File"), text);
    }

    #[test]
    fn unmatched_opener_is_preserved() {
        let text = "x [[File:broken.png|no close";
        assert_eq!(strip_resource_links(text, "File"), text);
    }

    #[test]
    fn inner_embed_removed_when_outer_is_unbalanced() {
        let text = "[[File:a [[File:b.png]]";
        assert_eq!(strip_resource_links(text, "File"), "[[File:a ");
    }

    #[test]
    fn text_without_pattern_is_unchanged() {
        let text = "plain [[link]] text";
        assert_eq!(strip_resource_links(text, "File"), text);
    }

    #[test]
    fn multibyte_text_around_embed() {
        let text = "地球[[File:地図.png|説明]]儀";
        assert_eq!(strip_resource_links(text, "File"), "地球儀");
    }
}
