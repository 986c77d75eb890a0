//! Batch linting: run a normalizer over every line of an input.
//!
//! The linter owns nothing between calls. Each call builds a fresh
//! [`BatchReport`] from the lines it is given, so linting two files never
//! mixes their results.

use crate::error::{LintError, LintResult};
use crate::normalizers::FieldNormalizer;
use crate::report::BatchReport;
use std::fs;
use std::path::Path;
use tracing::info;

/// Applies a [`FieldNormalizer`] to each line of a text input.
#[derive(Debug, Clone, Default)]
pub struct BatchLinter<N> {
    normalizer: N,
}

impl<N: FieldNormalizer> BatchLinter<N> {
    pub fn new(normalizer: N) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    /// Normalize every line, skipping blank and comment lines.
    pub fn lint_lines<I, S>(&self, lines: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::new(self.normalizer.kind());
        for line in lines {
            if let Some(result) = self.normalizer.normalize_and_validate(line.as_ref()) {
                report.record(result);
            }
        }
        report
    }

    /// Read `path` as UTF-8 text and lint it line by line.
    ///
    /// # Errors
    ///
    /// Returns `LintError::FileNotFound` if `path` does not exist, or
    /// `LintError::Io` if it cannot be read.
    pub fn lint_file(&self, path: &Path) -> LintResult<BatchReport> {
        let content = fs::read_to_string(path).map_err(|e| LintError::from_io(path, e))?;
        let report = self.lint_lines(content.lines());

        let summary = report.summary();
        info!(
            path = %path.display(),
            kind = ?report.kind,
            valid = summary.valid,
            invalid = summary.invalid,
            "Linted file"
        );
        Ok(report)
    }
}
