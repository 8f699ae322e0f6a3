use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{msg}: {percent:>3}%|{bar:40}| {pos}/{len} [{elapsed_precise}]";

/// Progress over the items of one result page, labelled `page i/n`.
pub struct PageProgress {
    bar: ProgressBar,
}

impl PageProgress {
    pub fn new(page_index: u64, page_count: u64, items: usize) -> Self {
        let bar = ProgressBar::new(items as u64);
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style);
        }
        bar.set_message(format!("page {}/{}", page_index + 1, page_count));
        Self { bar }
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Run `f` with the bar hidden so log lines don't tear it.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    pub fn finish(self) {
        self.bar.finish();
    }
}
