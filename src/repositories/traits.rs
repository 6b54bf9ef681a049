use crate::error::StoreResult;
use crate::models::Directory;
use async_trait::async_trait;

/// Repository for the whole-directory snapshot.
///
/// Provides abstraction over where the contact book lives between runs,
/// enabling different implementations (JSON file, in-memory mock).
/// Loads and saves are always whole-collection; there are no partial writes.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Load the saved directory, or an empty one if nothing was saved yet.
    async fn load(&self) -> StoreResult<Directory>;

    /// Replace the saved snapshot with `directory`.
    async fn save(&self, directory: &Directory) -> StoreResult<()>;
}
