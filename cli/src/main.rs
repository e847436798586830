//! CLI for the link updater.
//!
//! This tool rewrites outdated links, keywords and GitHub URLs across a
//! repository and publishes the result as a commit or a pull request.

use clap::Parser;
use link_updater::{
    Publication, RepoIdentity, RunSummary, Runner, RunnerConfig, RunnerError, TemplateRenderer,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Link Updater - Rewrite outdated links and keywords across a repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the links configuration file (YAML or TOML).
    #[arg(long, env = "INPUT_CONFIG_PATH", default_value = ".github/links-config.yml")]
    config_path: PathBuf,

    /// GitHub token used to push changes and open pull requests.
    #[arg(long, env = "INPUT_GITHUB_TOKEN")]
    token: Option<String>,

    /// Repository the run operates on, as `owner/repo`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: RepoIdentity,

    /// Working tree to update.
    #[arg(long, default_value = ".")]
    workdir: PathBuf,

    /// Report changes without writing files, committing or opening a pull request.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Action failed");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.repository)
        .with_config_path(args.config_path)
        .with_workdir(args.workdir)
        .with_token(args.token)
        .with_dry_run(args.dry_run);

    Runner::new(config).run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Files scanned: {}", summary.files_scanned);
    println!("  Files changed: {}", summary.files_changed);
    println!(
        "  Links changed: {} ({} URL, {} keyword)",
        summary.links_changed, summary.url_changes, summary.keyword_changes
    );
    if summary.rules_skipped > 0 {
        println!("  Rules skipped: {}", summary.rules_skipped);
    }
    println!("  Result: {}", summary.publication);
    println!(
        "  Status: {}",
        if summary.all_success() {
            "OK"
        } else {
            "Completed with errors"
        }
    );

    match &summary.publication {
        Publication::PullRequest(status) => {
            if let Some(url) = status.url() {
                println!("  PR: {url}");
            }
        }
        Publication::DryRun => print_dry_run_preview(summary),
        Publication::NoChanges | Publication::Committed => {}
    }
}

fn print_dry_run_preview(summary: &RunSummary) {
    let Ok(body) = TemplateRenderer::new().render_pr_body(&summary.changes) else {
        return;
    };

    println!("\n  Change report:");
    for line in body.lines().take(20) {
        println!("    {line}");
    }
    if body.lines().count() > 20 {
        println!("    ...");
    }
}
