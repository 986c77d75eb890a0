//! Plain-text and JSON reports for batch linting.

use crate::domain::ValidationResult;
use serde::Serialize;
use std::fmt;

/// The kind of value a batch report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Email,
    Phone,
}

impl RecordKind {
    /// Plural noun used in report headings, e.g. "emails"; headings upper-case it.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Email => "emails",
            Self::Phone => "phone numbers",
        }
    }

    /// Width of the `=` rules framing each report section.
    pub fn rule_width(&self) -> usize {
        match self {
            Self::Email => 70,
            Self::Phone => 50,
        }
    }
}

/// Summary counts of a batch report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
}

/// Valid and invalid entries collected from one input, in input order.
///
/// Valid entries hold canonical values; invalid entries hold the trimmed
/// original lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub kind: RecordKind,
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl BatchReport {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            valid: Vec::new(),
            invalid: Vec::new(),
        }
    }

    /// File a single result under the matching section.
    pub fn record(&mut self, result: ValidationResult) {
        match result {
            ValidationResult::Valid(value) => self.valid.push(value),
            ValidationResult::Invalid(original) => self.invalid.push(original),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            valid: self.valid.len(),
            invalid: self.invalid.len(),
        }
    }

    /// Total number of results recorded.
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// JSON document with both sections and the summary counts.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            #[serde(flatten)]
            report: &'a BatchReport,
            summary: Summary,
        }

        serde_json::to_string_pretty(&JsonReport {
            report: self,
            summary: self.summary(),
        })
    }

    fn write_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        entries: &[String],
    ) -> fmt::Result {
        let rule = "=".repeat(self.kind.rule_width());
        let plural = self.kind.plural();

        writeln!(f, "{}", rule)?;
        writeln!(f, "{} {}:", label.to_uppercase(), plural.to_uppercase())?;
        writeln!(f, "{}", rule)?;
        if entries.is_empty() {
            writeln!(f, "No {} {} found.", label, plural)?;
        } else {
            for entry in entries {
                writeln!(f, "{}", entry)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(self.kind.rule_width());
        let summary = self.summary();

        self.write_section(f, "valid", &self.valid)?;
        writeln!(f)?;
        self.write_section(f, "invalid", &self.invalid)?;
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "Summary: {} valid, {} invalid",
            summary.valid, summary.invalid
        )?;
        writeln!(f, "{}", rule)
    }
}
