//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for email addresses and phone
//! numbers in their canonical form, plus the per-field validation outcome.
//! A value object can only be constructed from input that passes
//! validation, so a canonical email or phone never needs re-checking.

pub mod email;
pub mod errors;
pub mod phone;
pub mod validation;

pub use email::{EmailAddress, EmailPolicy};
pub use errors::ValidationError;
pub use phone::{PhoneNumber, PHONE_PLACEHOLDER};
pub use validation::ValidationResult;
