//! Per-value normalizers.
//!
//! A normalizer takes one raw line or field and returns its
//! [`ValidationResult`], or `None` when the input is blank or a `#` comment
//! and should not be counted at all. Normalizers hold no accumulated state;
//! collecting results is left to the caller (see [`crate::linter`]).

pub mod email;
pub mod phone;

pub use email::EmailNormalizer;
pub use phone::PhoneNormalizer;

use crate::domain::ValidationResult;
use crate::report::RecordKind;
use tracing::debug;

/// A pure normalize-then-validate step for one kind of contact field.
pub trait FieldNormalizer {
    /// Which kind of record this normalizer handles.
    fn kind(&self) -> RecordKind;

    /// Normalize and validate a single value.
    ///
    /// Returns `None` for blank lines and comment lines.
    fn normalize_and_validate(&self, input: &str) -> Option<ValidationResult>;
}

/// Trim `input`, returning `None` if nothing but a comment or whitespace is left.
pub(crate) fn significant(input: &str) -> Option<&str> {
    let line = input.trim();
    if line.is_empty() || line.starts_with('#') {
        debug!(comment = !line.is_empty(), "Skipping line");
        None
    } else {
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_skipped_lines_are_logged() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            significant("# comment");
            significant("   ");
            significant("a@b.com");
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Skipping line").count(), 2);
        assert!(output.contains("comment=true"));
        assert!(output.contains("comment=false"));
    }

    #[test]
    fn test_significant() {
        assert_eq!(significant("  a@b.com \n"), Some("a@b.com"));
        assert_eq!(significant("   "), None);
        assert_eq!(significant(""), None);
        assert_eq!(significant("  # comment"), None);
        assert_eq!(significant("a#b"), Some("a#b"));
    }
}
