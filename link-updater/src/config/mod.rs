//! Configuration loading.
//!
//! This module parses the links configuration file (YAML, or TOML for a
//! `.toml` extension), applies defaults, validates it and resolves template
//! expressions in replacement values.

mod error;
mod raw;
mod template;

pub use error::ConfigError;
pub use raw::{GithubUrls, RawConfig, RawLink};
pub use template::resolve_template;

use crate::identity::RepoIdentity;
use crate::links::LinkRule;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};
use url::Url;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = ".github/links-config.yml";

/// Commit message used when none is configured.
pub const DEFAULT_COMMIT_MSG: &str = "chore: update repository links and keywords[skip ci]";

static FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.?[A-Za-z0-9_-]+(?:\.[A-Za-z0-9]+)*$")
        .expect("Invalid regex pattern for file names")
});

static EXTENSION_GLOB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\.(?:\*|[A-Za-z0-9.]+)$").expect("Invalid regex pattern for extension globs")
});

static DIRECTORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9/_-]+$").expect("Invalid regex pattern for directory paths")
});

static IGNORED_GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/[A-Za-z0-9-]+(?:/[A-Za-z0-9_.-]+)?(?:\.git)?$")
        .expect("Invalid regex pattern for ignored GitHub URLs")
});

/// Source format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension; anything but `.toml` is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Validated configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Directory roots to scan.
    pub paths: Vec<String>,

    /// File-name patterns to process.
    pub files: Vec<String>,

    /// Replacement rules with templates resolved.
    pub links: Vec<LinkRule>,

    /// Files, URLs and keywords that must not be touched.
    pub ignore: Vec<String>,

    /// GitHub URL types to normalize.
    pub github_urls: GithubUrls,

    /// Open a pull request instead of committing directly.
    pub create_pr: bool,

    /// Commit message for the changes.
    pub commit_msg: String,
}

impl LinkConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, cannot be parsed, or
    /// fails validation.
    pub fn load(path: &Path, identity: &RepoIdentity) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        info!(path = %path_str, "Loading configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile { path: path_str });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path_str.clone(),
            source: e,
        })?;

        Self::parse(&content, ConfigFormat::from_path(path), identity, &path_str)
    }

    /// Parses and validates YAML configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text cannot be parsed or fails validation.
    pub fn from_yaml_str(content: &str, identity: &RepoIdentity) -> Result<Self, ConfigError> {
        Self::parse(content, ConfigFormat::Yaml, identity, "<yaml>")
    }

    /// Parses and validates TOML configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text cannot be parsed or fails validation.
    pub fn from_toml_str(content: &str, identity: &RepoIdentity) -> Result<Self, ConfigError> {
        Self::parse(content, ConfigFormat::Toml, identity, "<toml>")
    }

    fn parse(
        content: &str,
        format: ConfigFormat,
        identity: &RepoIdentity,
        path: &str,
    ) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Err(validation(path, "Configuration is empty or invalid"));
        }

        let raw: Option<RawConfig> = match format {
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| ConfigError::YamlError {
                    path: path.to_string(),
                    source: e,
                })?
            }
            ConfigFormat::Toml => {
                Some(toml::from_str(content).map_err(|e| ConfigError::TomlError {
                    path: path.to_string(),
                    source: e,
                })?)
            }
        };
        debug!(?raw, "Parsed configuration");

        let raw = raw.ok_or_else(|| validation(path, "Configuration is empty or invalid"))?;
        Self::from_raw(raw, identity, path)
    }

    /// Applies defaults, validates and resolves templates.
    fn from_raw(raw: RawConfig, identity: &RepoIdentity, path: &str) -> Result<Self, ConfigError> {
        let github_urls = raw.github_urls.unwrap_or_default();
        if github_urls.types.is_empty() && raw.links.is_empty() {
            return Err(validation(
                path,
                "At least one of githubUrls.types or links must be configured",
            ));
        }

        let files = match raw.files {
            Some(files) => {
                if let Some(invalid) = files.iter().find(|p| !is_valid_pattern(p)) {
                    return Err(validation(
                        path,
                        format!("Invalid file type pattern: {invalid}"),
                    ));
                }
                files
            }
            None => raw::default_files(),
        };

        let ignore = match raw.ignore {
            Some(ignore) => {
                validate_ignore(&ignore, path)?;
                ignore
            }
            None => raw::default_ignore(),
        };

        let links = raw
            .links
            .into_iter()
            .map(|link| match (link.old, link.new) {
                (Some(old), Some(new)) if !old.is_empty() && !new.is_empty() => {
                    Ok(LinkRule::new(old, resolve_template(&new, identity)))
                }
                _ => Err(validation(
                    path,
                    "Each link must have both old and new properties",
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            paths: raw.paths.unwrap_or_else(raw::default_paths),
            files,
            links,
            ignore,
            github_urls,
            create_pr: raw.create_pr.unwrap_or(false),
            commit_msg: raw
                .commit_msg
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COMMIT_MSG.to_string()),
        })
    }
}

fn validation(path: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        path: path.to_string(),
        message: message.into(),
    }
}

/// Returns true for a bare name, `name.ext`, `*.ext`, a directory path, or
/// a parseable URL.
fn is_valid_pattern(pattern: &str) -> bool {
    if pattern.starts_with("http") {
        return Url::parse(pattern).is_ok();
    }

    FILE_NAME.is_match(pattern) || EXTENSION_GLOB.is_match(pattern) || DIRECTORY.is_match(pattern)
}

fn validate_ignore(ignore: &[String], path: &str) -> Result<(), ConfigError> {
    let invalid: Vec<&str> = ignore
        .iter()
        .map(String::as_str)
        .filter(|p| !is_valid_pattern(p))
        .collect();
    if !invalid.is_empty() {
        return Err(validation(
            path,
            format!("Invalid ignore patterns: {}", invalid.join(", ")),
        ));
    }

    let incomplete: Vec<&str> = ignore
        .iter()
        .map(String::as_str)
        .filter(|p| p.starts_with("https://github.com/") && !IGNORED_GITHUB_URL.is_match(p))
        .collect();
    if !incomplete.is_empty() {
        return Err(validation(
            path,
            format!("Invalid GitHub URLs in ignore list: {}", incomplete.join(", ")),
        ));
    }

    Ok(())
}
