//! The crawl: query, paginate, dedupe, download, write the manifest.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::config::CrawlConfig;
use crate::download::{archive_file_name, download_repo};
use crate::error::{Error, Result};
use crate::github::RepoSource;
use crate::manifest::Manifest;
use crate::progress::PageProgress;
use crate::query;
use crate::seen::SeenSet;
use crate::types::SearchItem;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    pub pages: u64,
    pub repositories: usize,
    pub downloaded: usize,
    pub failed: usize,
    pub manifest: PathBuf,
}

/// Owns the per-run state: which repositories were seen and what goes in the manifest.
pub struct Crawler<'a, S: RepoSource + ?Sized> {
    source: &'a S,
    config: &'a CrawlConfig,
    seen: SeenSet,
    manifest: Manifest,
    report: CrawlReport,
}

impl<'a, S: RepoSource + ?Sized> Crawler<'a, S> {
    pub fn new(source: &'a S, config: &'a CrawlConfig) -> Self {
        Self {
            source,
            config,
            seen: SeenSet::new(),
            manifest: Manifest::new(),
            report: CrawlReport::default(),
        }
    }

    /// Run to completion. Any page fetch error aborts before the manifest is written.
    pub fn run(mut self) -> Result<CrawlReport> {
        fs::create_dir_all(&self.config.folder)?;

        let search_url =
            query::search_url(&self.config.base_url, &self.config.task, &self.config.language);
        debug!(url = %search_url, "querying");

        let first = self.source.fetch_page(&search_url)?;
        let total_count = first.total_count.ok_or(Error::MissingTotalCount)?;
        let page_count = query::page_count(total_count);
        info!(total_count, page_count, "search matched");

        for page in 0..page_count {
            let url = query::page_url(&search_url, self.config.per_page, page);
            let items = self.source.fetch_page(&url)?.items;
            self.report.pages += 1;

            let progress = PageProgress::new(page, page_count, items.len());
            for item in &items {
                self.process(item, &progress);
                progress.inc();
            }
            progress.finish();
        }

        let manifest_path = self.config.manifest_path();
        self.manifest.write(&manifest_path)?;
        self.report.manifest = manifest_path;
        self.report.repositories = self.manifest.records().len();
        Ok(self.report)
    }

    fn process(&mut self, item: &SearchItem, progress: &PageProgress) {
        let user = &item.owner.login;
        if !self.seen.is_new(user, &item.name) {
            return;
        }
        self.manifest.push(user, &item.name, &self.config.task);

        let dest = self.config.folder.join(archive_file_name(&item.full_name));
        match download_repo(self.source, &item.clone_url, &dest, &self.config.branch) {
            Ok(path) => {
                self.report.downloaded += 1;
                progress.suspend(|| debug!(path = %path.display(), "saved archive"));
            }
            Err(e) => {
                self.report.failed += 1;
                progress.suspend(|| error!("Could not get: {} ({})", item.clone_url, e));
            }
        }
    }
}
