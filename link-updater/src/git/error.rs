//! Git error types.

use thiserror::Error;

/// Errors that can occur while running git.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be started.
    #[error("Failed to execute git {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git exited with a failure status.
    #[error("git {command} failed: {message}")]
    CommandFailed { command: String, message: String },
}
