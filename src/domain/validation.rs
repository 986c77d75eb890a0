//! Outcome of normalizing a single field.

use serde::Serialize;
use std::fmt;

/// Result of normalizing and validating one value.
///
/// `Valid` carries the canonical form. `Invalid` carries the trimmed input
/// as it appeared in the source, so a report shows what needs fixing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum ValidationResult {
    Valid(String),
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The canonical value for `Valid`, the original input for `Invalid`.
    pub fn value(&self) -> &str {
        match self {
            Self::Valid(v) | Self::Invalid(v) => v,
        }
    }

    /// The canonical value, or `placeholder` when invalid.
    pub fn valid_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Self::Valid(v) => v,
            Self::Invalid(_) => placeholder,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
