//! Record model: one contact in the book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone matching `old_raw` with `new_raw`, keeping its position.
    ///
    /// `new_raw` is only validated when a match exists. Returns `Ok(false)`
    /// and leaves the list untouched when nothing matches.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<bool, ValidationError> {
        let Some(index) = self.position(old_raw) else {
            return Ok(false);
        };
        self.phones[index] = PhoneNumber::new(new_raw)?;
        Ok(true)
    }

    /// Find the first phone equal to `raw` after normalization.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.matches(raw))
    }

    /// Remove the first phone matching `raw`. Returns whether one was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position(raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Phones joined for display, e.g. `0501234567; 0671234567`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.matches(raw))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones_display(),
            self.birthday.as_ref().map_or("None", Birthday::as_str)
        )
    }
}
