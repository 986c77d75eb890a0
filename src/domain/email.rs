//! EmailAddress value object and the repair steps applied before validation.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Whitespace touching an `@` or `.` separator, on either side.
static SEPARATOR_SPACING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*([@.])\s*").expect("Failed to compile separator spacing regex")
});

/// Two or more consecutive dots.
static REPEATED_DOTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.{2,}").expect("Failed to compile repeated dots regex"));

/// Local part of `[A-Za-z0-9._%+-]`, a single `@`, dot separated labels of
/// `[A-Za-z0-9-]` and an alphabetic TLD of at least two characters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Which repairs are attempted before an email is matched against the pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailPolicy {
    /// Strip spacing around separators, then in the domain turn commas into
    /// dots and collapse repeated dots.
    #[default]
    Repair,

    /// Strip spacing around separators only.
    ///
    /// Superseded by [`EmailPolicy::Repair`]; kept so older reports can be
    /// reproduced.
    SpacingOnly,
}

impl EmailPolicy {
    /// The name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repair => "repair",
            Self::SpacingOnly => "spacing-only",
        }
    }
}

impl FromStr for EmailPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repair" => Ok(Self::Repair),
            "spacing-only" | "spacing_only" => Ok(Self::SpacingOnly),
            _ => Err(ValidationError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for EmailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type-safe wrapper for email addresses.
///
/// Only addresses matching the practical email pattern can be represented.
/// Case is preserved as written.
///
/// # Example
///
/// ```
/// use contact_normalizer::domain::{EmailAddress, EmailPolicy};
///
/// let email = EmailAddress::normalize("chloe.lopez@ example .com", EmailPolicy::Repair).unwrap();
/// assert_eq!(email.as_str(), "chloe.lopez@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the string exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Repair common formatting slips in `input` and validate the result.
    ///
    /// `input` is expected to be trimmed already. On failure the error
    /// carries `input` untouched, not the repaired candidate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the repaired candidate
    /// still does not match.
    pub fn normalize(input: &str, policy: EmailPolicy) -> Result<Self, ValidationError> {
        let candidate = Self::repair(input, policy);

        if Self::is_valid(&candidate) {
            Ok(Self(candidate))
        } else {
            Err(ValidationError::InvalidEmail(input.to_string()))
        }
    }

    /// Apply the repairs `policy` allows, without validating.
    pub fn repair(input: &str, policy: EmailPolicy) -> String {
        let despaced = SEPARATOR_SPACING.replace_all(input, "$1");

        match policy {
            EmailPolicy::SpacingOnly => despaced.into_owned(),
            EmailPolicy::Repair => Self::repair_domain(&despaced),
        }
    }

    /// Fix the domain of a single-`@` candidate; anything else is returned as is.
    fn repair_domain(candidate: &str) -> String {
        if candidate.matches('@').count() != 1 {
            return candidate.to_string();
        }

        match candidate.split_once('@') {
            Some((local, domain)) => {
                let domain = domain.replace(',', ".");
                let domain = REPEATED_DOTS.replace_all(&domain, ".");
                format!("{}@{}", local, domain)
            }
            None => candidate.to_string(),
        }
    }

    /// Validate email format.
    fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
