//! Configuration options for cleaning.
//!
//! The `Options` struct chooses which namespaces count as resource embeds and
//! which normalization rules run.

use crate::error::{Error, Result};
use crate::normalize::Rule;

/// Configuration options for cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wikitext_clean::{Options, Rule};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     resource_kinds: vec!["File".to_string(), "Image".to_string(), "Media".to_string()],
///     rules: vec![Rule::Refs, Rule::Comments, Rule::Newlines],
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Namespace labels whose `[[<kind>:...]]` spans are removed entirely.
    ///
    /// Stripped one kind at a time, in this order. Labels are matched
    /// case-sensitively.
    ///
    /// Default: `["File", "Image"]`
    pub resource_kinds: Vec<String>,

    /// Normalization rules to apply.
    ///
    /// Rules always run in pipeline order regardless of the order listed here.
    ///
    /// Default: `Rule::ALL`
    pub rules: Vec<Rule>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            resource_kinds: vec!["File".to_string(), "Image".to_string()],
            rules: Rule::ALL.to_vec(),
        }
    }
}

impl Options {
    /// Checks that every resource kind can form a `[[<kind>:` opener.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResourceKind`] for an empty label or one
    /// containing `[`, `]` or `:`.
    pub fn validate(&self) -> Result<()> {
        for kind in &self.resource_kinds {
            if kind.is_empty() || kind.contains(['[', ']', ':']) {
                return Err(Error::InvalidResourceKind(kind.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_kind() {
        let options = Options {
            resource_kinds: vec![String::new()],
            ..Options::default()
        };
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidResourceKind(kind)) if kind.is_empty()
        ));
    }

    #[test]
    fn rejects_bracket_and_colon_kinds() {
        for bad in ["[File", "File]", "File:"] {
            let options = Options {
                resource_kinds: vec![bad.to_string()],
                ..Options::default()
            };
            assert!(options.validate().is_err(), "{bad} should be rejected");
        }
    }
}
