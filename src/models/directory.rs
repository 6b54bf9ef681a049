//! Directory model: the keyed collection of records.

use super::record::Record;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

/// Outcome of [`Directory::add_record`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The record was stored under its name
    Added,
    /// A record with that name already exists; nothing was changed
    AlreadyExists,
}

/// All contacts, keyed by name, in insertion order.
///
/// Every key equals the name of the record it maps to. The directory owns its
/// records; removing one drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<ContactName, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` unless its name is already taken.
    ///
    /// An existing record is never overwritten.
    pub fn add_record(&mut self, record: Record) -> Insertion {
        if self.records.contains_key(record.name()) {
            warn!("Contact already exists: {}", record.name());
            return Insertion::AlreadyExists;
        }
        debug!("Adding contact {}", record.name());
        self.records.insert(record.name().clone(), record);
        Insertion::Added
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Direct keyed access: a miss is an error rather than `None`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::UnknownContact` when no record has this name.
    pub fn require_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| CommandError::UnknownContact(name.to_string()))
    }

    /// Remove the record named `name`, if any. Remaining records keep their order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!("Deleted contact {}", name);
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContactName, &Record)> {
        self.records.iter()
    }
}

impl FromIterator<Record> for Directory {
    /// Later records whose names are already present are dropped.
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            let _ = directory.add_record(record);
        }
        directory
    }
}

// Serde support - a snapshot is the ordered list of records
impl Serialize for Directory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
