use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct Owner {
    pub login: String,
}

/// One repository as returned by the search endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchItem {
    pub owner: Owner,
    pub name: String,
    pub full_name: String,
    pub clone_url: String,
}

/// One page of search results. Only the first page is required to carry `total_count`.
#[derive(Deserialize, Debug)]
pub struct SearchPage {
    pub total_count: Option<u64>,
    pub items: Vec<SearchItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub user: String,
    pub repository: String,
    pub keyword: String,
}
