//! Email field normalizer.

use super::{significant, FieldNormalizer};
use crate::domain::{EmailAddress, EmailPolicy, ValidationResult};
use crate::report::RecordKind;
use tracing::debug;

/// Value shown in place of an email that could not be normalized.
pub const EMAIL_PLACEHOLDER: &str = "xxx@xxx.xxx";

/// Normalizes email addresses according to an [`EmailPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNormalizer {
    policy: EmailPolicy,
}

impl EmailNormalizer {
    pub fn new(policy: EmailPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EmailPolicy {
        self.policy
    }

    /// Row-facing form: the canonical address, or [`EMAIL_PLACEHOLDER`] for
    /// anything invalid or blank.
    pub fn clean_value(&self, input: &str) -> String {
        match self.normalize_and_validate(input) {
            Some(ValidationResult::Valid(value)) => value,
            _ => EMAIL_PLACEHOLDER.to_string(),
        }
    }
}

impl FieldNormalizer for EmailNormalizer {
    fn kind(&self) -> RecordKind {
        RecordKind::Email
    }

    fn normalize_and_validate(&self, input: &str) -> Option<ValidationResult> {
        let line = significant(input)?;

        let result = match EmailAddress::normalize(line, self.policy) {
            Ok(email) => ValidationResult::Valid(email.into_inner()),
            Err(err) => {
                debug!(policy = %self.policy, "{}", err);
                ValidationResult::Invalid(err.into_input())
            }
        };
        Some(result)
    }
}
