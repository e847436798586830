//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// File pattern and traversal errors.
    #[error(transparent)]
    Files(#[from] crate::files::FileError),

    /// Git command errors.
    #[error(transparent)]
    Git(#[from] crate::git::GitError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Publishing changes requires a GitHub token.
    #[error("GitHub token not found")]
    MissingToken,
}
