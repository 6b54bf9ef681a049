//! Contact Book - a command-line assistant that keeps contacts and reminds you
//! who to congratulate.
//!
//! The library holds the contact data model and the use cases; the binary wires
//! it to stdin/stdout and a JSON snapshot on disk.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birthday, contact name)
//! - **models**: The contact record and the keyed directory of records
//! - **services**: Use-case operations and the upcoming birthday report
//! - **assistant**: Command parsing, dispatch, and the interactive session loop
//! - **repositories**: Whole-directory persistence behind an async trait
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use assistant::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StoreError};
pub use models::{Directory, Insertion, Record};
pub use repositories::{DirectoryRepository, JsonFileRepository};
