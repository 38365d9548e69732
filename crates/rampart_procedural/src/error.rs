//! # Visual Error Types
//!
//! Generation itself is total; errors only arise at the edges where
//! configuration or persisted tags are parsed.

use thiserror::Error;

/// Errors raised while parsing visual configuration or tags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisualError {
    /// A tag did not name any variant of its enum.
    #[error("unknown {kind} tag: {tag:?}")]
    UnknownTag {
        /// Which enum was being parsed (e.g. "damage type").
        kind: &'static str,
        /// The offending input.
        tag: String,
    },

    /// The TOML document could not be parsed.
    #[error("malformed visual config: {0}")]
    MalformedConfig(String),

    /// The config parsed but holds an unusable value.
    #[error("invalid visual config: {0}")]
    InvalidConfig(String),

    /// Reading a config file failed.
    #[error("could not read visual config {path}: {reason}")]
    Io {
        /// Path that was being read.
        path: String,
        /// OS error text.
        reason: String,
    },
}

/// Result type for visual configuration operations.
pub type VisualResult<T> = Result<T, VisualError>;
