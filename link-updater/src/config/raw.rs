//! Configuration file deserialization.

use crate::github_urls::UrlSelection;
use serde::Deserialize;

/// Configuration as written in the file, before defaults and validation.
///
/// Keys use the action's camelCase names; TOML files may use kebab-case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Directory roots to scan.
    pub paths: Option<Vec<String>>,

    /// File-name patterns to process.
    pub files: Option<Vec<String>>,

    /// Replacement rules.
    #[serde(default)]
    pub links: Vec<RawLink>,

    /// Files, URLs and keywords that must not be touched.
    pub ignore: Option<Vec<String>>,

    /// GitHub URL types to normalize.
    #[serde(alias = "github-urls")]
    pub github_urls: Option<GithubUrls>,

    /// Open a pull request instead of committing directly.
    #[serde(alias = "create-pr")]
    pub create_pr: Option<bool>,

    /// Commit message for the changes.
    #[serde(alias = "commit-msg")]
    pub commit_msg: Option<String>,
}

/// A replacement rule as written; either side may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLink {
    pub old: Option<String>,
    pub new: Option<String>,
}

/// The `githubUrls` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GithubUrls {
    /// URL types to rewrite, applied in order.
    #[serde(default)]
    pub types: Vec<UrlSelection>,
}

pub(crate) fn default_paths() -> Vec<String> {
    vec![".".to_string()]
}

pub(crate) fn default_files() -> Vec<String> {
    vec!["*.*".to_string()]
}

pub(crate) fn default_ignore() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}
