//! Shared input files for integration tests.
//!
//! Fixture contents mirror the kind of hand-maintained lists the tool is
//! pointed at: comments, blank lines, stray spacing and the odd typo.

use std::io::Write;
use tempfile::NamedTempFile;

/// Email list with comments, blank lines and repairable slips.
#[allow(dead_code)]
pub const EMAIL_LIST: &str = "\
# Customer emails
alice@example.com
chloe.lopez@ example .com

bob.smith@mail,,example.org
   # indented comment
not-an-email
john@@example.com
mary @ example . co.uk
trailing@dot.
";

/// Phone list with assorted formatting.
#[allow(dead_code)]
pub const PHONE_LIST: &str = "\
# Phone numbers
(555) 123-4567
555.987.6543

12345
+1 (555) 123-4567
  800 555 0199  
#555-000-0000
";

/// Contact CSV: a full row, a short row, an overlong row and a quoted name.
#[allow(dead_code)]
pub const CONTACTS_CSV: &str = "\
Chloe,Lopez,chloe.lopez@ example .com,(555) 123-4567
Ana,Lee,ana@x.com

\"Smith, Jr.\",Bob,bob@@example.com,12345,extra
";

/// Write `contents` to a temporary file that lives as long as the handle.
pub fn write_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Write raw bytes to a temporary file.
#[allow(dead_code)]
pub fn write_bytes(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write temp file");
    file
}
