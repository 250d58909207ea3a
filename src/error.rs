//! Error types for wikitext-clean.
//!
//! Cleaning and link extraction never fail: malformed markup degrades to
//! literal output. Errors only arise from configuration and from the I/O
//! done by the command-line wrapper.

/// Error type for configuration and I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resource namespace label cannot form a `[[<kind>:` opener.
    #[error("Invalid resource kind {0:?}: must be non-empty and contain no '[', ']' or ':'")]
    InvalidResourceKind(String),

    /// Reading input or writing output failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing output failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for wikitext-clean operations.
pub type Result<T> = std::result::Result<T, Error>;
