//! Template rendering using Handlebars.
//!
//! This module renders the change report used as the pull request body and
//! generates PR titles and branch names.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer, DEFAULT_PR_TEMPLATE};

/// Title used for link update PRs.
pub const PR_TITLE: &str = "Update repository links and keywords";

/// Generates the PR title.
#[must_use]
pub fn generate_pr_title() -> String {
    PR_TITLE.to_string()
}

/// Generates the branch name for a link update PR.
///
/// Format: "link-updates-{timestamp_millis}"
#[must_use]
pub fn generate_branch_name(timestamp_millis: u128) -> String {
    format!("link-updates-{timestamp_millis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_branch_name() {
        assert_eq!(
            generate_branch_name(1_700_000_000_000),
            "link-updates-1700000000000"
        );
    }

    #[test]
    fn generates_pr_title() {
        assert_eq!(generate_pr_title(), "Update repository links and keywords");
    }
}
