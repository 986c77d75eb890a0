//! Contact Normalizer - clean up and validate contact emails and phone numbers.
//!
//! Values are read from plain-text lists (one per line) or from contact CSV
//! files, repaired where a formatting slip is obvious, and checked against a
//! practical pattern. Each value comes out as either its canonical form or
//! the original line, flagged invalid.
//!
//! # Architecture
//!
//! - **domain**: Value objects for canonical emails and phone numbers
//! - **normalizers**: Pure per-value normalize-then-validate steps
//! - **linter**: Batch linting of line-oriented files
//! - **report**: Plain-text and JSON batch reports
//! - **contacts**: CSV contact rows and their report blocks
//! - **commands**: File-level commands used by the binary
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod contacts;
pub mod domain;
pub mod error;
pub mod linter;
pub mod normalizers;
pub mod report;

pub use commands::OutputFormat;
pub use config::Config;
pub use contacts::{ContactCsvReader, ContactReport, ContactRow, ContactRowProcessor, RawRecord};
pub use domain::{
    EmailAddress, EmailPolicy, PhoneNumber, ValidationError, ValidationResult, PHONE_PLACEHOLDER,
};
pub use error::{ConfigError, LintError, LintResult};
pub use linter::BatchLinter;
pub use normalizers::{EmailNormalizer, FieldNormalizer, PhoneNormalizer};
pub use report::{BatchReport, RecordKind, Summary};
