//! Runner configuration.

use crate::config::DEFAULT_CONFIG_PATH;
use crate::identity::RepoIdentity;
use std::path::{Path, PathBuf};

/// Configuration for a link update run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the configuration file, relative to `workdir` unless absolute.
    config_path: PathBuf,
    /// Working tree to update.
    workdir: PathBuf,
    /// Repository the run operates on.
    identity: RepoIdentity,
    /// GitHub token used for pushes and API calls.
    token: Option<String>,
    /// Whether to report changes without writing or publishing them.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration using the default config path and the current
    /// directory as working tree.
    pub fn new(identity: RepoIdentity) -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            workdir: PathBuf::from("."),
            identity,
            token: None,
            dry_run: false,
        }
    }

    /// Sets the configuration file path.
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }

    /// Sets the working tree.
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    /// Sets the GitHub token. Empty tokens are treated as absent.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configuration file path resolved against the working tree.
    pub fn config_path(&self) -> PathBuf {
        self.workdir.join(&self.config_path)
    }

    /// Returns the working tree path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Returns the repository identity.
    pub fn identity(&self) -> &RepoIdentity {
        &self.identity
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
