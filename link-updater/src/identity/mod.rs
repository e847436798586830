//! Identity of the repository the run normalizes links toward.

mod error;

pub use error::IdentityError;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The GitHub owner and repository name a run is executing for.
///
/// Supplied once per run (usually from `GITHUB_REPOSITORY`) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoIdentity {
    /// User or organization that owns the repository.
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

impl RepoIdentity {
    /// Creates an identity from its parts.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Returns the `owner/repo` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Returns the repository's web URL.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoIdentity {
    type Err = IdentityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || IdentityError::Malformed {
            value: value.to_string(),
        };

        let (owner, repo) = value.trim().split_once('/').ok_or_else(malformed)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(malformed());
        }

        Ok(Self::new(owner, repo))
    }
}
