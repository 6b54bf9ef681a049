//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The phone number does not normalize to exactly ten digits.
    InvalidPhone { digits: usize },

    /// The birthday is not a real `DD.MM.YYYY` calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone { digits } => {
                write!(f, "Phone must contain 10 digits, but yours has {}", digits)
            }
            Self::InvalidDate(reason) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY. {}", reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
