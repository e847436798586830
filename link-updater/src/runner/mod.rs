//! Orchestrates a link update run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::LinkConfig;
use crate::content::{ChangeLog, ContentUpdater};
use crate::files::{walk_paths, FileFilter};
use crate::git::GitRepo;
use crate::pull_requests::{create_pr, LinkPr, PrError, PrStatus};
use crate::summary::{Publication, RunSummary};
use crate::templates::{generate_branch_name, generate_pr_title, TemplateRenderer};
use octocrab::Octocrab;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Orchestrates loading config, rewriting files and publishing the result.
pub struct Runner {
    config: RunnerConfig,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Executes the full run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingToken`] before touching any file if no
    /// token is configured outside dry-run mode. Otherwise returns
    /// [`RunnerError`] if the configuration cannot be loaded, a directory
    /// cannot be walked or a git command fails. A failed PR is reported in
    /// the summary instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let token = match self.config.token() {
            Some(token) => Some(token),
            None if self.config.dry_run() => None,
            None => return Err(RunnerError::MissingToken),
        };

        let config_path = self.config.config_path();
        info!(path = %config_path.display(), "Starting link updates");
        let config = LinkConfig::load(&config_path, self.config.identity())?;

        info!(
            paths = %config.paths.join(", "),
            files = %config.files.join(", "),
            links = config.links.len(),
            github_url_types = config.github_urls.types.len(),
            mode = if config.create_pr { "Pull Request" } else { "Direct Commit" },
            "Loaded configuration"
        );

        let updater = ContentUpdater::from_config(&config, self.config.identity());
        summary.rules_skipped = updater.rule_failures().len();
        if summary.rules_skipped > 0 {
            warn!(
                count = summary.rules_skipped,
                "Skipping link rules that failed to compile"
            );
        }

        let filter = FileFilter::new(&config.files, &config.ignore)?;
        let mut changes = ChangeLog::new();
        let scan = walk_paths(
            self.config.workdir(),
            &config.paths,
            &filter,
            &updater,
            &mut changes,
            self.config.dry_run(),
        )?;
        let has_changes = scan.has_changes();
        summary.record_scan(&scan, changes);

        if !has_changes {
            info!("No changes were needed");
            return Ok(summary);
        }

        info!(
            files_changed = summary.files_changed,
            links_changed = summary.links_changed,
            "Updated files"
        );

        if self.config.dry_run() {
            info!("Dry run, skipping commit");
            summary.publication = Publication::DryRun;
            return Ok(summary);
        }

        let token = token.ok_or(RunnerError::MissingToken)?;
        summary.publication = self.publish(&config, token, &summary.changes).await?;

        Ok(summary)
    }

    async fn publish(
        &self,
        config: &LinkConfig,
        token: &str,
        changes: &ChangeLog,
    ) -> Result<Publication, RunnerError> {
        let identity = self.config.identity();
        let git = GitRepo::new(self.config.workdir());

        git.configure_bot_identity().await?;
        git.add_all().await?;
        if !git.has_changes().await? {
            warn!("Updated files are not tracked by git, nothing to commit");
            return Ok(Publication::NoChanges);
        }

        if !config.create_pr {
            git.commit(&config.commit_msg).await?;
            git.push_authenticated(identity, token, None).await?;
            info!("Successfully updated links and pushed changes");
            return Ok(Publication::Committed);
        }

        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;

        let branch_name = generate_branch_name(timestamp_millis());
        git.checkout_new_branch(&branch_name).await?;
        git.commit(&config.commit_msg).await?;
        git.push_authenticated(identity, token, Some(&branch_name))
            .await?;

        let status = match self.open_pull_request(&octocrab, &branch_name, changes).await {
            Ok(pr) => {
                info!(
                    url = pr.status.url().unwrap_or_default(),
                    "Successfully created PR with link updates"
                );
                pr.status
            }
            Err(e) => {
                warn!(branch = %branch_name, error = %e, "Failed to create PR");
                PrStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        Ok(Publication::PullRequest(status))
    }

    async fn open_pull_request(
        &self,
        octocrab: &Octocrab,
        branch_name: &str,
        changes: &ChangeLog,
    ) -> Result<LinkPr, PrError> {
        let body = self.renderer.render_pr_body(changes)?;
        create_pr(
            octocrab,
            self.config.identity(),
            branch_name,
            &generate_pr_title(),
            &body,
        )
        .await
    }
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
