//! Repository identity error types.

use thiserror::Error;

/// Errors that can occur while parsing a repository identity.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The value is not in `owner/repo` form.
    #[error("Invalid repository '{value}': expected 'owner/repo'")]
    Malformed { value: String },
}
