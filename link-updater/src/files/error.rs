//! File processing error types.

use thiserror::Error;

/// Errors that can occur while walking and updating files.
#[derive(Debug, Error)]
pub enum FileError {
    /// A file-name pattern could not be compiled.
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Directory traversal failed.
    #[error("Failed to walk '{path}': {source}")]
    WalkFailed {
        path: String,
        #[source]
        source: walkdir::Error,
    },
}
