use std::fs;
use std::path::{Path, PathBuf};

use link_updater::{
    ChangeKind, ConfigError, LinkConfig, Publication, RepoIdentity, Runner, RunnerConfig,
    RunnerError, UrlSelection,
};
use tempfile::TempDir;

const README: &str = "# Project

Docs: https://old-docs.example.com/guide.
Source: https://github.com/olduser/oldrepo/blob/main/src/lib.rs
Fork of https://github.com/keep/this
Use old-link here.
";

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn identity() -> RepoIdentity {
    RepoIdentity::new("testowner", "testrepo")
}

/// Creates a working tree containing the YAML fixture config and a few files.
fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join(".github")).unwrap();
    fs::copy(
        fixtures_root().join("links-config.yml"),
        root.join(".github/links-config.yml"),
    )
    .unwrap();

    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("README.md"), README).unwrap();
    fs::write(
        root.join("docs/guide.md"),
        "Link to https://github.com/olduser/oldrepo.\n",
    )
    .unwrap();
    fs::write(root.join("CHANGELOG.md"), "Removed old-link.\n").unwrap();

    temp
}

fn read(root: &Path, file: &str) -> String {
    fs::read_to_string(root.join(file)).unwrap()
}

#[test]
fn load_yaml_fixture() {
    let config = LinkConfig::load(&fixtures_root().join("links-config.yml"), &identity()).unwrap();

    assert_eq!(config.paths, vec!["."]);
    assert_eq!(config.files, vec!["*.md"]);
    assert_eq!(config.links.len(), 2);
    assert_eq!(config.github_urls.types, vec![UrlSelection::Repo]);
    assert!(config.create_pr);
}

#[test]
fn load_toml_fixture() {
    let config =
        LinkConfig::load(&fixtures_root().join("links-config.toml"), &identity()).unwrap();

    assert_eq!(config.paths, vec!["docs"]);
    assert_eq!(config.files, vec!["*.md", "*.txt"]);
    assert_eq!(config.links[1].new, "https://github.com/testowner/testrepo");
    assert_eq!(
        config.github_urls.types,
        vec![UrlSelection::Sponsors, UrlSelection::Username]
    );
    assert!(!config.create_pr);
    assert_eq!(config.commit_msg, "docs: refresh links");
}

#[tokio::test]
async fn dry_run_reports_changes_without_writing() {
    let temp = workspace();
    let config = RunnerConfig::new(identity())
        .with_workdir(temp.path())
        .with_dry_run(true);

    let summary = Runner::new(config).run().await.unwrap();

    assert_eq!(summary.publication, Publication::DryRun);
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_changed, 2);
    assert_eq!(summary.links_changed, 4);
    assert_eq!(summary.url_changes, 3);
    assert_eq!(summary.keyword_changes, 1);
    assert!(!summary.has_failures());

    let records = summary.changes.records();
    assert_eq!(records[0].file, "README.md");
    assert_eq!(records[0].old_link, "https://github.com/olduser/oldrepo/blob/main/src/lib.rs");
    assert_eq!(
        records[0].new_link,
        "https://github.com/testowner/testrepo/blob/main/src/lib.rs"
    );
    assert_eq!(records[2].kind, ChangeKind::Keyword);
    assert_eq!(records[3].file, "docs/guide.md");

    assert_eq!(read(temp.path(), "README.md"), README);
}

#[tokio::test]
async fn publishing_without_token_fails_before_writing() {
    let temp = workspace();
    let config = RunnerConfig::new(identity()).with_workdir(temp.path());

    let result = Runner::new(config).run().await;

    assert!(matches!(result, Err(RunnerError::MissingToken)));
    assert_eq!(read(temp.path(), "README.md"), README);
}

#[tokio::test]
async fn unchanged_tree_publishes_nothing() {
    let temp = workspace();
    fs::write(temp.path().join("README.md"), "Nothing to see.\n").unwrap();
    fs::write(
        temp.path().join("docs/guide.md"),
        "Already at https://github.com/testowner/testrepo\n",
    )
    .unwrap();

    let config = RunnerConfig::new(identity())
        .with_workdir(temp.path())
        .with_token(Some("ghp_test".to_string()));

    let summary = Runner::new(config).run().await.unwrap();

    assert_eq!(summary.publication, Publication::NoChanges);
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.links_changed, 0);
}

#[tokio::test]
async fn missing_config_is_critical() {
    let temp = TempDir::new().unwrap();
    let config = RunnerConfig::new(identity())
        .with_workdir(temp.path())
        .with_dry_run(true);

    let result = Runner::new(config).run().await;

    assert!(matches!(
        result,
        Err(RunnerError::Config(ConfigError::MissingFile { .. }))
    ));
}
