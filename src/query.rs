//! Search URL construction and page arithmetic.

/// Only repositories created on or after this date are searched.
pub const CREATED_SINCE: &str = "2019-06-01";

/// The number of pages is always derived from this, not from `--per_page`.
pub const PAGE_COUNT_DIVISOR: u64 = 100;

/// Build the search URL for a task keyword and language.
///
/// Dashes in the task become `+` term separators; nothing else is escaped.
pub fn search_url(base_url: &str, task: &str, language: &str) -> String {
    format!(
        "{}{}+language:{}+created%3A>%3D{}",
        base_url,
        task.replace('-', "+"),
        language.to_lowercase(),
        CREATED_SINCE
    )
}

pub fn page_url(search_url: &str, per_page: u32, page: u64) -> String {
    format!("{}&per_page={}&page={}", search_url, per_page, page)
}

pub fn page_count(total_count: u64) -> u64 {
    total_count.div_ceil(PAGE_COUNT_DIVISOR)
}
