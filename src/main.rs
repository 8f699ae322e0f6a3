mod config;
mod crawl;
mod download;
mod error;
mod github;
mod logging;
mod manifest;
mod progress;
mod query;
mod seen;
mod types;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueHint};
use tracing::info;

use crate::config::{
    CrawlConfig, DEFAULT_BRANCH, DEFAULT_FOLDER, DEFAULT_LANGUAGE, DEFAULT_PER_PAGE, DEFAULT_TASK,
    DEFAULT_URL,
};
use crate::crawl::Crawler;
use crate::github::GitHubClient;

#[derive(Parser, Debug)]
#[command(name = "repo-harvest")]
#[command(
    about = "Search GitHub for repositories by task keyword and download their branch archives",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Task or use case to search for, e.g. text-classification. Dash separated terms.
    #[arg(long, default_value = DEFAULT_TASK)]
    task: String,
    /// Base search URL the query is appended to
    #[arg(long, default_value = DEFAULT_URL, value_hint = ValueHint::Url)]
    url: String,
    /// Programming language to search for
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,
    /// Directory to save archives and the manifest to
    #[arg(long, default_value = DEFAULT_FOLDER, value_hint = ValueHint::DirPath)]
    folder: PathBuf,
    /// Number of repositories to request per page of results
    #[arg(
        long = "per_page",
        visible_alias = "per-page",
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    per_page: u32,
    /// Branch whose archive is downloaded
    #[arg(long, default_value = DEFAULT_BRANCH)]
    branch: String,
}

impl From<Cli> for CrawlConfig {
    fn from(cli: Cli) -> Self {
        CrawlConfig {
            task: cli.task,
            base_url: cli.url,
            language: cli.language,
            folder: cli.folder,
            per_page: cli.per_page,
            branch: cli.branch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = CrawlConfig::from(Cli::parse());
    let client = GitHubClient::new().context("Can't create HTTP client")?;

    let span = tracing::info_span!("crawl", task = %config.task);
    let report = span
        .in_scope(|| Crawler::new(&client, &config).run())
        .context("Crawl aborted, no manifest written")?;

    info!(
        pages = report.pages,
        repositories = report.repositories,
        downloaded = report.downloaded,
        failed = report.failed,
        "Wrote {}",
        report.manifest.display()
    );
    Ok(())
}
