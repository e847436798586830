//! GitHub URL sub-types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structurally distinct GitHub URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    /// `https://github.com/<handle>`
    Username,
    /// `https://github.com/<owner>/<name>[.git][/sub/path]`
    Repo,
    /// `https://github.com/sponsors/<handle>`
    Sponsors,
}

impl UrlKind {
    /// Returns the configuration symbol for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Repo => "repo",
            Self::Sponsors => "sponsors",
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured GitHub URL type: one concrete kind, or `all` to classify
/// each match individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlSelection {
    Username,
    Repo,
    Sponsors,
    All,
}

impl UrlSelection {
    /// Returns the pinned kind, or `None` for [`UrlSelection::All`].
    #[must_use]
    pub fn kind(self) -> Option<UrlKind> {
        match self {
            Self::Username => Some(UrlKind::Username),
            Self::Repo => Some(UrlKind::Repo),
            Self::Sponsors => Some(UrlKind::Sponsors),
            Self::All => None,
        }
    }

    /// Returns the configuration symbol for this selection.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.as_str(),
            None => "all",
        }
    }
}

impl fmt::Display for UrlSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
