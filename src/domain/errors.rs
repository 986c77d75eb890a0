//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the input exactly as it was handed to the
/// validator, before any repair was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email policy name is not recognised.
    UnknownPolicy(String),
}

impl ValidationError {
    /// The offending input.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidEmail(s) | Self::InvalidPhone(s) | Self::UnknownPolicy(s) => s,
        }
    }

    /// Consume the error, returning the offending input.
    pub fn into_input(self) -> String {
        match self {
            Self::InvalidEmail(s) | Self::InvalidPhone(s) | Self::UnknownPolicy(s) => s,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::UnknownPolicy(name) => write!(
                f,
                "Unknown email policy: {} (expected 'repair' or 'spacing-only')",
                name
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
