//! End-to-end tests for batch phone linting.

use contact_normalizer::{BatchLinter, PhoneNormalizer, RecordKind};

mod fixtures;
use fixtures::*;

#[test]
fn test_phone_file_report() {
    let input = write_input(PHONE_LIST);
    let linter = BatchLinter::new(PhoneNormalizer::new());

    let report = linter.lint_file(input.path()).unwrap();

    assert_eq!(report.kind, RecordKind::Phone);
    assert_eq!(
        report.valid,
        vec!["555-123-4567", "555-987-6543", "800-555-0199"]
    );
    assert_eq!(report.invalid, vec!["12345", "+1 (555) 123-4567"]);
}

#[test]
fn test_phone_report_text() {
    let input = write_input(PHONE_LIST);
    let linter = BatchLinter::new(PhoneNormalizer::new());

    let text = linter.lint_file(input.path()).unwrap().to_string();
    let rule = "=".repeat(50);

    assert!(text.starts_with(&format!("{rule}\nVALID PHONE NUMBERS:\n{rule}\n")));
    assert!(text.contains(&format!("{rule}\nINVALID PHONE NUMBERS:\n{rule}\n12345\n")));
    assert!(text.ends_with(&format!("{rule}\nSummary: 3 valid, 2 invalid\n{rule}\n")));
}

#[test]
fn test_linting_twice_does_not_accumulate() {
    let input = write_input(PHONE_LIST);
    let linter = BatchLinter::new(PhoneNormalizer::new());

    let first = linter.lint_file(input.path()).unwrap();
    let second = linter.lint_file(input.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.total(), 5);
}
