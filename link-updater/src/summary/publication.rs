//! How a run's changes were published.

use crate::pull_requests::PrStatus;

/// Outcome of the publish step of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Publication {
    /// Nothing changed, nothing was published.
    #[default]
    NoChanges,

    /// Changes were found in dry-run mode and left unwritten.
    DryRun,

    /// Changes were committed and pushed to the current branch.
    Committed,

    /// Changes were pushed to a new branch and a PR was attempted.
    PullRequest(PrStatus),
}

impl Publication {
    /// Returns the publication as a string for display.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoChanges => "no changes",
            Self::DryRun => "dry run",
            Self::Committed => "committed",
            Self::PullRequest(PrStatus::Created { .. }) => "pull request created",
            Self::PullRequest(PrStatus::Failed { .. }) => "pull request failed",
        }
    }
}

impl std::fmt::Display for Publication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
