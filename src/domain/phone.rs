//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Value shown in place of a phone number that could not be normalized.
pub const PHONE_PLACEHOLDER: &str = "xxx-xxx-xxxx";

/// Number of digits in a valid phone number.
const PHONE_DIGITS: usize = 10;

/// A ten digit phone number in `XXX-XXX-XXXX` form.
///
/// # Example
///
/// ```
/// use contact_normalizer::domain::PhoneNumber;
///
/// let phone = PhoneNumber::normalize("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "555-123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from a string already in canonical form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// `DDD-DDD-DDDD`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_canonical(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Drop every non-digit character and format the remaining digits.
    ///
    /// Digit order is preserved; any punctuation, spacing or letters are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone`, carrying `input` untouched,
    /// unless exactly ten digits remain.
    pub fn normalize(input: &str) -> Result<Self, ValidationError> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(input.to_string()));
        }

        Ok(Self(format!(
            "{}-{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..10]
        )))
    }

    /// Check for `DDD-DDD-DDDD`.
    fn is_canonical(phone: &str) -> bool {
        let bytes = phone.as_bytes();
        bytes.len() == 12
            && bytes.iter().enumerate().all(|(i, b)| match i {
                3 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// The leading three digit group.
    pub fn area_code(&self) -> &str {
        &self.0[0..3]
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
