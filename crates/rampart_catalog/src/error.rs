//! # Catalog Error Types
//!
//! All errors that can occur while loading the catalog or exporting assets.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the catalog and export pipeline.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document could not be parsed.
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// A card id is empty or not usable as a directory name.
    #[error("invalid card id {id:?}: {reason}")]
    InvalidId {
        /// The offending id.
        id: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Two cards share an id.
    #[error("duplicate card id: {0}")]
    DuplicateId(String),

    /// A card has no display name.
    #[error("card {0} has an empty name")]
    EmptyName(String),

    /// Filesystem operation failed.
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// What was being attempted ("write", "create directory", ...).
        action: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("could not serialize {what}: {reason}")]
    Serialize {
        /// What was being serialized.
        what: String,
        /// Serializer message.
        reason: String,
    },
}

impl CatalogError {
    /// Wraps an I/O error with the action and path it happened on.
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
