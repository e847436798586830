//! Pull request error types.

use thiserror::Error;

/// Errors that can occur during PR operations.
#[derive(Debug, Error)]
pub enum PrError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The PR body could not be rendered.
    #[error("Failed to render PR body: {0}")]
    TemplateFailed(#[from] crate::templates::TemplateError),
}
