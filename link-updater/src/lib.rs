#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod content;
pub mod files;
pub mod git;
pub mod github_urls;
pub mod identity;
pub mod ignore;
pub mod links;
pub mod pull_requests;
pub mod runner;
pub mod summary;
pub mod templates;

pub use config::{ConfigError, LinkConfig};
pub use content::{ChangeLog, ChangeRecord, ContentUpdater};
pub use files::{walk_paths, FileError, FileFilter, FileProcessor, FileScan};
pub use git::{GitError, GitRepo};
pub use github_urls::{classify, rewrite_github_urls, GithubUrlRewriter, UrlKind, UrlSelection};
pub use identity::{IdentityError, RepoIdentity};
pub use ignore::IgnoreSet;
pub use links::{rewrite_links, ChangeKind, LinkError, LinkRewriter, LinkRule};
pub use pull_requests::{create_pr, LinkPr, PrError, PrStatus};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{Publication, RunSummary};
pub use templates::{
    create_handlebars_registry, generate_branch_name, generate_pr_title, TemplateError,
    TemplateRenderer,
};
