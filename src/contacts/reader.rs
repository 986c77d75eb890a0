//! CSV row reader for contact files.

use super::RawRecord;
use crate::error::{LintError, LintResult};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Streams raw rows out of a headerless, comma separated contact file.
///
/// Fields are kept exactly as written; the normalizers do their own trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactCsvReader;

impl ContactCsvReader {
    pub fn new() -> Self {
        Self
    }

    /// Open `path` and return its rows lazily.
    ///
    /// # Errors
    ///
    /// Returns `LintError::FileNotFound` if `path` does not exist, or
    /// `LintError::Io` if it cannot be opened.
    pub fn open(&self, path: &Path) -> LintResult<impl Iterator<Item = RawRecord>> {
        let file = File::open(path).map_err(|e| LintError::from_io(path, e))?;
        Ok(self.rows(file))
    }

    /// Rows from any reader. Rows that cannot be decoded are logged and skipped.
    pub fn rows<R: Read>(&self, input: R) -> impl Iterator<Item = RawRecord> {
        let reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .flexible(true) // Allow rows with different lengths
            .trim(Trim::None)
            .from_reader(input);

        reader
            .into_records()
            .filter_map(|result| match result {
                Ok(record) => Some(record.iter().map(str::to_string).collect()),
                Err(e) => {
                    let line = e.position().map(|p| p.line());
                    warn!(?line, "Skipping unreadable CSV row: {}", e);
                    None
                }
            })
    }
}
