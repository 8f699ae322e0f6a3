use std::path::PathBuf;

pub const DEFAULT_TASK: &str = "text-classification";
pub const DEFAULT_URL: &str = "https://api.github.com/search/repositories?q=";
pub const DEFAULT_LANGUAGE: &str = "python";
pub const DEFAULT_FOLDER: &str = "./";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_BRANCH: &str = "master";

pub const MANIFEST_FILE: &str = "repositories.json";

/// Settings for one crawl. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Dash separated search terms, e.g. `text-classification`.
    pub task: String,
    pub base_url: String,
    pub language: String,
    pub folder: PathBuf,
    pub per_page: u32,
    pub branch: String,
}

#[cfg(test)]
impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            task: DEFAULT_TASK.to_string(),
            base_url: DEFAULT_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            folder: PathBuf::from(DEFAULT_FOLDER),
            per_page: DEFAULT_PER_PAGE,
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl CrawlConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.folder.join(MANIFEST_FILE)
    }
}
