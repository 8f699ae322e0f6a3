use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::ManifestRecord;

/// Records of every unique repository seen in a run, in first-seen order.
#[derive(Debug, Default)]
pub struct Manifest {
    records: Vec<ManifestRecord>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, user: &str, repository: &str, keyword: &str) {
        self.records.push(ManifestRecord {
            user: user.to_string(),
            repository: repository.to_string(),
            keyword: keyword.to_string(),
        });
    }

    pub fn records(&self) -> &[ManifestRecord] {
        &self.records
    }

    /// Write the records as one JSON array to `path`, replacing whatever was there.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut out, &self.records)?;
        out.flush()?;
        Ok(())
    }
}
