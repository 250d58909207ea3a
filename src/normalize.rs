//! Inline markup normalization.
//!
//! Each rule is an independent textual rewrite with no state carried between
//! applications. The pipeline order is fixed: emphasis unwrapping must see
//! `'''` before `''`, and newline collapsing must run last so it can absorb
//! the blank lines left behind by earlier removals.

use log::trace;
use regex::Captures;

use crate::patterns::{
    BOLD, CHOICE_CHINESE, CHOICE_LABELED, CHOICE_PLAIN, COMMENT, HEADING, ITALIC, LANG,
    MULTIPLE_NEWLINES, REF_PAIRED, REF_SELF_CLOSING,
};

/// A single normalization rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Strip `<ref>...</ref>` and `<ref/>` tags.
    Refs,
    /// Unwrap `'''bold'''` and `''italic''`.
    Emphasis,
    /// Strip `<!-- ... -->`.
    Comments,
    /// Unwrap `{{lang-xx|text}}` and `{{lang|xx|text}}`.
    Langs,
    /// Unwrap `==Heading==`.
    Headings,
    /// Resolve `-{...}-` script-variant choices.
    VariantChoices,
    /// Collapse runs of blank lines into one newline.
    Newlines,
}

impl Rule {
    /// Every rule, in pipeline order.
    pub const ALL: [Rule; 7] = [
        Rule::Refs,
        Rule::Emphasis,
        Rule::Comments,
        Rule::Langs,
        Rule::Headings,
        Rule::VariantChoices,
        Rule::Newlines,
    ];

    /// Applies this rule to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Rule::Refs => remove_refs(text),
            Rule::Emphasis => remove_emphasis(text),
            Rule::Comments => remove_comments(text),
            Rule::Langs => remove_langs(text),
            Rule::Headings => remove_headings(text),
            Rule::VariantChoices => remove_variant_choices(text),
            Rule::Newlines => collapse_newlines(text),
        }
    }
}

/// Runs every rule in pipeline order.
#[must_use]
pub fn normalize(text: &str) -> String {
    normalize_with(text, &Rule::ALL)
}

/// Runs the rules present in `rules`, always in pipeline order.
///
/// The order of `rules` itself is ignored; duplicates have no effect.
#[must_use]
pub fn normalize_with(text: &str, rules: &[Rule]) -> String {
    let mut text = text.to_string();
    for rule in Rule::ALL {
        if rules.contains(&rule) {
            text = rule.apply(&text);
            trace!("After {rule:?}: {} bytes", text.len());
        }
    }
    text
}

/// Strips `<ref ...>...</ref>` spans, then self-closing `<ref ... />` tags.
#[must_use]
pub fn remove_refs(text: &str) -> String {
    let text = REF_PAIRED.replace_all(text, "");
    REF_SELF_CLOSING.replace_all(&text, "").into_owned()
}

/// Replaces `'''text'''` and then `''text''` with the enclosed text.
#[must_use]
pub fn remove_emphasis(text: &str) -> String {
    let text = BOLD.replace_all(text, "${1}");
    ITALIC.replace_all(&text, "${1}").into_owned()
}

/// Strips `<!-- ... -->` comments.
#[must_use]
pub fn remove_comments(text: &str) -> String {
    COMMENT.replace_all(text, "").into_owned()
}

/// Replaces inline language templates with their display text.
#[must_use]
pub fn remove_langs(text: &str) -> String {
    LANG.replace_all(text, "${1}").into_owned()
}

/// Replaces `==Heading==` (2 to 6 levels) with the heading text.
#[must_use]
pub fn remove_headings(text: &str) -> String {
    HEADING
        .replace_all(text, |caps: &Captures<'_>| {
            // exactly one branch participates in each match
            caps.iter()
                .skip(1)
                .flatten()
                .next()
                .map_or_else(String::new, |m| m.as_str().to_string())
        })
        .into_owned()
}

/// Resolves `-{...}-` choices: a simplified-Chinese variant first, then any
/// `label:text`, then a bare wrapper.
#[must_use]
pub fn remove_variant_choices(text: &str) -> String {
    let text = CHOICE_CHINESE.replace_all(text, "${1}");
    let text = CHOICE_LABELED.replace_all(&text, "${1}");
    CHOICE_PLAIN.replace_all(&text, "${1}").into_owned()
}

/// Collapses runs of two or more newlines into one.
#[must_use]
pub fn collapse_newlines(text: &str) -> String {
    MULTIPLE_NEWLINES.replace_all(text, "\n").into_owned()
}
