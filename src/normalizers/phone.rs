//! Phone field normalizer.

use super::{significant, FieldNormalizer};
use crate::domain::{PhoneNumber, ValidationResult, PHONE_PLACEHOLDER};
use crate::report::RecordKind;
use tracing::debug;

/// Normalizes ten digit phone numbers to `XXX-XXX-XXXX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNormalizer;

impl PhoneNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Row-facing form: the canonical number, or [`PHONE_PLACEHOLDER`] for
    /// anything invalid or blank.
    pub fn clean_value(&self, input: &str) -> String {
        match self.normalize_and_validate(input) {
            Some(ValidationResult::Valid(value)) => value,
            _ => PHONE_PLACEHOLDER.to_string(),
        }
    }
}

impl FieldNormalizer for PhoneNormalizer {
    fn kind(&self) -> RecordKind {
        RecordKind::Phone
    }

    fn normalize_and_validate(&self, input: &str) -> Option<ValidationResult> {
        let line = significant(input)?;

        let result = match PhoneNumber::normalize(line) {
            Ok(phone) => ValidationResult::Valid(phone.into_inner()),
            Err(err) => {
                debug!("{}", err);
                ValidationResult::Invalid(err.into_input())
            }
        };
        Some(result)
    }
}
