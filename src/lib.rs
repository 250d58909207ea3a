//! # wikitext-clean
//!
//! Strips MediaWiki markup from raw article text, producing plain readable
//! text and a table of the wikilinks it contained.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikitext_clean::{clean, extract_links};
//!
//! let wikitext = "==Earth==\n\n'''Earth''' is the third planet from the [[Sun|sun]].";
//!
//! let text = clean(wikitext);
//! assert_eq!(text, "Earth\nEarth is the third planet from the [[Sun|sun]].");
//!
//! let result = extract_links(&text);
//! assert_eq!(result.text, "Earth\nEarth is the third planet from the sun.");
//! assert_eq!(result.links[0].link, "Sun");
//! ```
//!
//! ## Features
//!
//! - **Resource Stripping**: Removes `[[File:...]]` and `[[Image:...]]` embeds,
//!   including captions holding nested links
//! - **Markup Normalization**: Refs, emphasis, comments, language templates,
//!   headings, and `-{...}-` variant choices
//! - **Link Extraction**: Plain, namespaced, and piped links with offsets
//!   into the rendered text
//!
//! Malformed markup never fails: an unbalanced `[[` is kept as literal text.

mod cleaner;
mod error;
mod options;
mod patterns;
mod result;

/// Depth-counted `[[...]]` span matching.
pub mod brackets;

/// Resource embed removal (`[[File:...]]`, `[[Image:...]]`).
pub mod resource;

/// Ordered inline markup normalization rules.
pub mod normalize;

/// Wikilink extraction with output offsets.
pub mod links;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use cleaner::Cleaner;
pub use error::{Error, Result};
pub use links::{extract_links, LinkKind};
pub use normalize::Rule;
pub use options::Options;
pub use result::{LinkExtraction, LinkRecord};

/// Cleans wikitext using default options.
///
/// Strips `File` then `Image` embeds and runs every normalization rule.
///
/// # Example
///
/// ```rust
/// use wikitext_clean::clean;
///
/// assert_eq!(clean("See '''bold''' and ''italic'' text"), "See bold and italic text");
/// assert_eq!(clean("A[[File:x.png|caption with [[nested link]] text]]B"), "AB");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    Cleaner::default().clean(text)
}

/// Cleans wikitext with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidResourceKind`] if `options` names an unusable
/// resource kind.
///
/// # Example
///
/// ```rust
/// use wikitext_clean::{clean_with_options, Options, Rule};
///
/// let options = Options {
///     rules: vec![Rule::Headings],
///     ..Options::default()
/// };
/// let text = clean_with_options("==Title==\n\nBody", &options)?;
/// assert_eq!(text, "Title\n\nBody");
/// # Ok::<(), wikitext_clean::Error>(())
/// ```
pub fn clean_with_options(text: &str, options: &Options) -> Result<String> {
    let cleaner = Cleaner::new(options.clone())?;
    Ok(cleaner.clean(text))
}

/// Cleans wikitext from raw bytes with automatic encoding detection.
///
/// # Example
///
/// ```rust
/// use wikitext_clean::clean_bytes;
///
/// assert_eq!(clean_bytes(b"\xEF\xBB\xBF''Caf\xC3\xA9''"), "Café");
/// ```
#[must_use]
pub fn clean_bytes(bytes: &[u8]) -> String {
    clean(&encoding::transcode_to_utf8(bytes))
}

/// Cleans wikitext with default options, then extracts links from the result.
#[must_use]
pub fn clean_and_extract(text: &str) -> LinkExtraction {
    Cleaner::default().clean_and_extract(text)
}
