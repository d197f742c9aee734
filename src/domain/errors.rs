//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is the empty string.
    EmptyName,

    /// The provided phone number is not a 10-digit numeric string.
    InvalidPhone(String),

    /// The provided birthday does not parse as a `YYYY.MM.DD` calendar date.
    InvalidBirthday { value: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "phone must be a 10-digit numeric string"),
            Self::InvalidBirthday { value, reason } => {
                write!(f, "invalid birthday '{}' (expected YYYY.MM.DD): {}", value, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
