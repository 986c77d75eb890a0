//! Contact row processing.
//!
//! Each CSV row is read as first name, last name, email and phone. The email
//! and phone fields are run through the per-value normalizers and the row is
//! reported with both the cleaned and the original values side by side.

pub mod reader;

pub use reader::ContactCsvReader;

use crate::error::LintResult;
use crate::normalizers::{EmailNormalizer, PhoneNormalizer};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// An unparsed CSV row.
pub type RawRecord = Vec<String>;

/// Number of positional columns in a contact row.
const CONTACT_COLUMNS: usize = 4;

/// Separator printed after every contact block.
const SEPARATOR_WIDTH: usize = 40;

/// The four positional fields of a contact row, as written in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactRow {
    /// Build a row from its first four fields.
    ///
    /// Missing trailing fields become empty strings; fields past the fourth
    /// are ignored.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields = fields
            .into_iter()
            .take(CONTACT_COLUMNS)
            .map(Into::<String>::into);
        let mut next = move || fields.next().unwrap_or_default();

        Self {
            first_name: next(),
            last_name: next(),
            email: next(),
            phone: next(),
        }
    }
}

/// Report block for one contact row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReport {
    pub first_name: String,
    pub last_name: String,
    pub clean_email: String,
    pub email: String,
    pub clean_phone: String,
    pub phone: String,
}

impl fmt::Display for ContactReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "First name: {}", self.first_name)?;
        writeln!(f, "Last name: {}", self.last_name)?;
        writeln!(f, "Clean email: {}", self.clean_email)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Clean phone: {}", self.clean_phone)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

/// Applies the email and phone normalizers to contact rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactRowProcessor {
    email: EmailNormalizer,
    phone: PhoneNormalizer,
}

impl ContactRowProcessor {
    pub fn new(email: EmailNormalizer) -> Self {
        Self {
            email,
            phone: PhoneNormalizer::new(),
        }
    }

    /// Normalize one row's email and phone.
    pub fn process_row(&self, row: ContactRow) -> ContactReport {
        ContactReport {
            clean_email: self.email.clean_value(&row.email),
            clean_phone: self.phone.clean_value(&row.phone),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
        }
    }

    /// Lazily report every non-empty row.
    pub fn process<'a, I>(&'a self, rows: I) -> impl Iterator<Item = ContactReport> + 'a
    where
        I: IntoIterator<Item = RawRecord>,
        I::IntoIter: 'a,
    {
        rows.into_iter()
            .filter(|row| !row.is_empty())
            .map(move |row| self.process_row(ContactRow::from_fields(row)))
    }

    /// Open a CSV file and lazily report its rows.
    ///
    /// # Errors
    ///
    /// Returns `LintError::FileNotFound` if `path` does not exist.
    pub fn process_file<'a>(
        &'a self,
        path: &Path,
    ) -> LintResult<impl Iterator<Item = ContactReport> + 'a> {
        let rows = ContactCsvReader::new().open(path)?;
        Ok(self.process(rows))
    }
}
