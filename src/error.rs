use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors that abort the whole crawl before the manifest is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Could not decode search response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Search response has no total_count")]
    MissingTotalCount,

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single archive could not be fetched. Never fatal to the crawl.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(u16),

    #[error("could not write archive: {0}")]
    Io(#[from] std::io::Error),
}
