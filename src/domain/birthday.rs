//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and parse format for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date shape regex")
});

/// A birthday parsed from a `DD.MM.YYYY` string.
///
/// Keeps both the text the user typed (for display) and the parsed calendar
/// date (for the upcoming-birthday report).
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2024").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2024");
/// assert!(Birthday::new("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday in the exact `DD.MM.YYYY` form.
    ///
    /// Day and month must be zero-padded to two digits and the year must have
    /// four. The date must exist in the Gregorian calendar, from year 1 on.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` with the underlying reason.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidDate(format!(
                "'{}' does not match DD.MM.YYYY",
                raw
            )));
        }

        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|e| ValidationError::InvalidDate(e.to_string()))?;
        if date.year() < 1 {
            return Err(ValidationError::InvalidDate(format!(
                "year {} is out of range",
                date.year()
            )));
        }

        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    /// The original string, as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
