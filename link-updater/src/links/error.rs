//! Link rule error types.

use thiserror::Error;

/// Errors that can occur while preparing a replacement rule.
#[derive(Debug, Clone, Error)]
pub enum LinkError {
    /// The matcher for a rule could not be built.
    #[error("Invalid pattern for '{old}': {source}")]
    InvalidPattern {
        old: String,
        #[source]
        source: regex::Error,
    },
}
