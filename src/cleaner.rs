//! Cleaning pipeline: resource stripping followed by normalization.

use log::debug;

use crate::error::Result;
use crate::links::extract_links;
use crate::normalize::normalize_with;
use crate::options::Options;
use crate::resource::strip_resource_links;
use crate::result::LinkExtraction;

/// A validated cleaning configuration.
///
/// Holds no mutable state, so one instance can be shared across threads and
/// reused for any number of articles.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    options: Options,
}

impl Cleaner {
    /// Builds a cleaner after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidResourceKind`] if a resource kind is
    /// unusable.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this cleaner was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Strips resource embeds, then runs the configured normalization rules.
    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        debug!("Cleaning {} bytes", text.len());

        let mut text = text.to_string();
        for kind in &self.options.resource_kinds {
            text = strip_resource_links(&text, kind);
        }

        let text = normalize_with(&text, &self.options.rules);
        debug!("Cleaned text is {} bytes", text.len());
        text
    }

    /// Replaces wikilinks with display text and records their positions.
    #[must_use]
    pub fn extract_links(&self, text: &str) -> LinkExtraction {
        extract_links(text)
    }

    /// Cleans `text`, then extracts links from the cleaned result.
    ///
    /// Offsets in the returned links index the returned text.
    #[must_use]
    pub fn clean_and_extract(&self, text: &str) -> LinkExtraction {
        extract_links(&self.clean(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Rule;

    #[test]
    fn default_cleaner_strips_files_then_images() {
        let cleaner = Cleaner::default();
        assert_eq!(cleaner.clean("a[[File:x.png]]b[[Image:y.jpg|cap]]c"), "abc");
    }

    #[test]
    fn custom_resource_kinds_are_honored() {
        let cleaner = Cleaner::new(Options {
            resource_kinds: vec!["Media".to_string()],
            ..Options::default()
        });
        let Ok(cleaner) = cleaner else {
            panic!("Media is a valid resource kind");
        };
        assert_eq!(
            cleaner.clean("a[[Media:x.ogg]]b[[File:y.png]]"),
            "ab[[File:y.png]]"
        );
    }

    #[test]
    fn rule_subset_limits_normalization() {
        let Ok(cleaner) = Cleaner::new(Options {
            rules: vec![Rule::Newlines],
            ..Options::default()
        }) else {
            panic!("default kinds are valid");
        };
        assert_eq!(cleaner.clean("'''a'''\n\n\nb"), "'''a'''\nb");
    }

    #[test]
    fn invalid_options_are_rejected() {
        let result = Cleaner::new(Options {
            resource_kinds: vec!["File:".to_string()],
            ..Options::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn clean_and_extract_offsets_index_cleaned_text() {
        let cleaner = Cleaner::default();
        let result = cleaner.clean_and_extract("'''[[Earth]]'''<ref>x</ref> orbits [[Sun|the Sun]].");
        assert_eq!(result.text, "Earth orbits the Sun.");
        assert_eq!(result.links[1].begin, 13);
        assert_eq!(result.links[1].end, 20);
    }

    #[test]
    fn cleaner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cleaner>();
    }
}
