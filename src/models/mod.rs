//! Data models for the contact book.
//!
//! This module contains the contact record and the directory that owns all
//! records, keyed by contact name.

pub mod directory;
pub mod record;

pub use directory::{Directory, Insertion};
pub use record::Record;
