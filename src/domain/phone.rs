//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a phone number must have once formatting is stripped.
pub const PHONE_DIGITS: usize = 10;

/// Strip every character that is not an ASCII digit.
///
/// This never fails and is idempotent, so it is also used to compare a raw
/// user-typed number against stored ones.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A type-safe wrapper for phone numbers.
///
/// The stored value is always the normalized form: exactly ten ASCII digits.
/// Phone numbers are immutable; a record replaces them rather than editing
/// them in place.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(123) 456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from raw user input.
    ///
    /// Formatting characters (spaces, dashes, parentheses, `+`, ...) are
    /// dropped before the length check.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying the actual digit count
    /// when the normalized number is not exactly ten digits long.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let digits = normalize_phone(raw);
        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone {
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this number equals `raw` after normalization.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == normalize_phone(raw)
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
        PhoneNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
