//! Command implementations shared by the binary and the integration tests.
//!
//! Every command takes a list of input files and processes them one at a
//! time. A file that cannot be read is reported and skipped; the command
//! carries on with the next file and returns how many files failed.

use crate::contacts::{ContactReport, ContactRowProcessor};
use crate::domain::EmailPolicy;
use crate::error::{LintError, LintResult};
use crate::linter::BatchLinter;
use crate::normalizers::{EmailNormalizer, FieldNormalizer, PhoneNormalizer};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// How reports are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Batch report for each email list.
pub fn lint_emails<W: Write>(
    paths: &[PathBuf],
    policy: EmailPolicy,
    format: OutputFormat,
    out: &mut W,
) -> LintResult<usize> {
    let linter = BatchLinter::new(EmailNormalizer::new(policy));
    lint_batch(&linter, paths, format, out)
}

/// Batch report for each phone list.
pub fn lint_phones<W: Write>(
    paths: &[PathBuf],
    format: OutputFormat,
    out: &mut W,
) -> LintResult<usize> {
    let linter = BatchLinter::new(PhoneNormalizer::new());
    lint_batch(&linter, paths, format, out)
}

/// One report block per contact row, for each contact CSV.
pub fn process_contacts<W: Write>(
    paths: &[PathBuf],
    policy: EmailPolicy,
    format: OutputFormat,
    out: &mut W,
) -> LintResult<usize> {
    let processor = ContactRowProcessor::new(EmailNormalizer::new(policy));
    let mut failed = 0;

    for path in paths {
        let reports = match processor.process_file(path) {
            Ok(reports) => reports,
            Err(e) => {
                report_unreadable(path, e, format, out)?;
                failed += 1;
                continue;
            }
        };

        let rows = match format {
            OutputFormat::Text => {
                let mut rows = 0;
                for report in reports {
                    write!(out, "{}", report)?;
                    rows += 1;
                }
                rows
            }
            OutputFormat::Json => {
                let reports: Vec<ContactReport> = reports.collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
                reports.len()
            }
        };
        info!(path = %path.display(), rows, "Processed contact file");
    }

    Ok(failed)
}

fn lint_batch<N: FieldNormalizer, W: Write>(
    linter: &BatchLinter<N>,
    paths: &[PathBuf],
    format: OutputFormat,
    out: &mut W,
) -> LintResult<usize> {
    let mut failed = 0;

    for path in paths {
        match linter.lint_file(path) {
            Ok(report) => match format {
                OutputFormat::Text => write!(out, "{}", report)?,
                OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
            },
            Err(e) => {
                report_unreadable(path, e, format, out)?;
                failed += 1;
            }
        }
    }

    Ok(failed)
}

/// Tell the user a file was skipped. Anything but a read failure is passed up.
///
/// In JSON mode the notice is itself a JSON document, so the output stays a
/// parseable stream of documents.
fn report_unreadable<W: Write>(
    path: &Path,
    err: LintError,
    format: OutputFormat,
    out: &mut W,
) -> LintResult<()> {
    #[derive(Serialize)]
    struct UnreadableFile<'a> {
        path: String,
        error: &'a str,
    }

    let prefix = match &err {
        LintError::FileNotFound(_) => "",
        LintError::Io { .. } => {
            error!(path = %path.display(), "{}", err);
            "Error: "
        }
        _ => return Err(err),
    };

    let message = err.to_string();
    match format {
        OutputFormat::Text => writeln!(out, "{}{}", prefix, message)?,
        OutputFormat::Json => {
            let notice = UnreadableFile {
                path: path.display().to_string(),
                error: &message,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&notice)?)?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_are_reported_and_counted() {
        let mut out = Vec::new();
        let paths = vec![PathBuf::from("no/such/Email.txt"), PathBuf::from("no/such/other.txt")];

        let failed = lint_emails(&paths, EmailPolicy::Repair, OutputFormat::Text, &mut out).unwrap();

        assert_eq!(failed, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("File not found: no/such/Email.txt"));
        assert!(text.contains("File not found: no/such/other.txt"));
    }

    #[test]
    fn test_missing_contact_file() {
        let mut out = Vec::new();
        let paths = vec![PathBuf::from("no/such/contacts.csv")];

        let failed =
            process_contacts(&paths, EmailPolicy::Repair, OutputFormat::Json, &mut out).unwrap();

        assert_eq!(failed, 1);
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["path"], "no/such/contacts.csv");
        assert_eq!(json["error"], "File not found: no/such/contacts.csv");
    }

    #[test]
    fn test_missing_file_in_json_stream() {
        let mut out = Vec::new();
        let paths = vec![PathBuf::from("no/such/a.txt"), PathBuf::from("no/such/b.txt")];

        let failed = lint_phones(&paths, OutputFormat::Json, &mut out).unwrap();

        assert_eq!(failed, 2);
        let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_slice(&out)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1]["error"], "File not found: no/such/b.txt");
    }
}
