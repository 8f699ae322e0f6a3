use std::io::Write;

use crate::error::{DownloadError, Error, Result};
use crate::types::SearchPage;

/// Network operations the crawl needs. Every call blocks until done.
pub trait RepoSource {
    /// Fetch and decode one page of search results.
    fn fetch_page(&self, url: &str) -> Result<SearchPage>;

    /// Stream an archive into `out`, returning the number of bytes written.
    fn fetch_archive(
        &self,
        url: &str,
        out: &mut dyn Write,
    ) -> core::result::Result<u64, DownloadError>;
}

pub struct GitHubClient {
    http: reqwest::blocking::Client,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        // GitHub rejects requests without a User-Agent. Timeout is left unset so
        // large archives are never cut off.
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("repo-harvest/", env!("CARGO_PKG_VERSION")))
            .timeout(None)
            .build()?;
        Ok(Self { http })
    }
}

impl RepoSource for GitHubClient {
    fn fetch_page(&self, url: &str) -> Result<SearchPage> {
        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let body = resp.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn fetch_archive(
        &self,
        url: &str,
        out: &mut dyn Write,
    ) -> core::result::Result<u64, DownloadError> {
        let mut resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(DownloadError::Status(resp.status().as_u16()));
        }
        Ok(resp.copy_to(out)?)
    }
}
