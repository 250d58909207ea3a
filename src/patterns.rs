//! Compiled regex patterns for markup normalization.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized in the order the normalizer applies them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Reference Patterns
// =============================================================================

/// Matches a `<ref ...>...</ref>` pair. Non-greedy, so the first closing tag
/// wins; nested refs are not balanced.
pub static REF_PAIRED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<ref.*?</ref>").expect("REF_PAIRED regex"));

/// Matches a self-closing `<ref ... />`.
pub static REF_SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<ref.*?/>").expect("REF_SELF_CLOSING regex"));

// =============================================================================
// Emphasis Patterns
// =============================================================================

/// Matches `'''bold'''`, capturing the enclosed text.
pub static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'''(.*?)'''").expect("BOLD regex"));

/// Matches `''italic''`, capturing the enclosed text.
pub static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"''(.*?)''").expect("ITALIC regex"));

// =============================================================================
// Comment Patterns
// =============================================================================

/// Matches `<!-- ... -->`, including comments spanning several lines.
pub static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT regex"));

// =============================================================================
// Template Patterns
// =============================================================================

/// Matches `{{lang-xx|display}}` and `{{lang|xx|display}}`, capturing the text
/// after the last `|`. Never crosses a newline.
pub static LANG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{lang(?:-|\|).*?\|([^|\n]*?)\}\}").expect("LANG regex")
});

// =============================================================================
// Heading Patterns
// =============================================================================

/// Matches `==Heading==` with 2 to 6 equals signs on each side.
///
/// The `regex` crate has no backreferences, so each level gets its own
/// branch. Leftmost-first alternation tries the longest run first, which picks
/// the same match as a greedy `(={2,6})(.*?)\1`.
pub static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"======(.*?)======|=====(.*?)=====|====(.*?)====|===(.*?)===|==(.*?)==")
        .expect("HEADING regex")
});

// =============================================================================
// Variant Choice Patterns (`-{...}-`)
// =============================================================================

/// Matches a choice holding a simplified-Chinese variant (`zh-hans`, `zh-cn`,
/// `zh-hk` or bare `zh`), capturing that variant's text.
pub static CHOICE_CHINESE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-\{.*?zh(?:-hans|-cn|-hk)?:(.*?)(?:;.*?\}-|\}-)").expect("CHOICE_CHINESE regex")
});

/// Matches a choice with any `label:text` form, capturing the first text.
pub static CHOICE_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-\{.*?:(.*?)(?:;.*?\}-|\}-)").expect("CHOICE_LABELED regex")
});

/// Matches any remaining `-{...}-` wrapper, capturing the inner text.
pub static CHOICE_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\{(.*?)\}-").expect("CHOICE_PLAIN regex"));

// =============================================================================
// Whitespace Patterns
// =============================================================================

/// Matches two or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("MULTIPLE_NEWLINES regex"));
