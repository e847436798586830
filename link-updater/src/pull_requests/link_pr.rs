//! Link update pull request information.

use super::PrStatus;

/// A pull request opened with a run's link updates.
#[derive(Debug, Clone)]
pub struct LinkPr {
    /// Feature branch name.
    pub branch_name: String,

    /// Branch the PR targets.
    pub base_branch: String,

    /// PR title.
    pub title: String,

    /// Rendered PR body.
    pub body: String,

    /// Creation status.
    pub status: PrStatus,
}
