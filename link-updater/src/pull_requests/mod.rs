//! Pull request creation for link updates.

mod error;
mod link_pr;
mod status;

pub use error::PrError;
pub use link_pr::LinkPr;
pub use status::PrStatus;

use crate::identity::RepoIdentity;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Branch targeted when the repository's default branch is unknown.
const FALLBACK_BASE_BRANCH: &str = "main";

/// Opens a PR from an already pushed `branch_name` into the default branch.
///
/// # Errors
///
/// Returns [`PrError`] if the GitHub API rejects the request.
pub async fn create_pr(
    octocrab: &Octocrab,
    identity: &RepoIdentity,
    branch_name: &str,
    title: &str,
    body: &str,
) -> Result<LinkPr, PrError> {
    let span = info_span!("create_pr", repo = %identity, branch = %branch_name);

    async {
        info!("Creating link update PR");

        let base_branch = get_default_branch(octocrab, identity).await?;
        debug!(base = %base_branch, "Resolved base branch");

        let pr = octocrab
            .pulls(&identity.owner, &identity.repo)
            .create(title, branch_name, &base_branch)
            .body(body)
            .send()
            .await?;

        let url = pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| {
                format!("https://github.com/{}/pull/{}", identity.full_name(), pr.number)
            });

        info!(pr_number = pr.number, "PR created successfully");

        Ok(LinkPr {
            branch_name: branch_name.to_string(),
            base_branch,
            title: title.to_string(),
            body: body.to_string(),
            status: PrStatus::Created {
                number: pr.number,
                url,
            },
        })
    }
    .instrument(span)
    .await
}

/// Fetches the repository's default branch.
async fn get_default_branch(octocrab: &Octocrab, identity: &RepoIdentity) -> Result<String, PrError> {
    let repo = octocrab.repos(&identity.owner, &identity.repo).get().await?;
    Ok(repo
        .default_branch
        .unwrap_or_else(|| FALLBACK_BASE_BRANCH.to_string()))
}
