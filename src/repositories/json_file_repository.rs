use crate::error::StoreResult;
use crate::models::Directory;
use crate::repositories::traits::DirectoryRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory repository backed by a JSON file.
///
/// The snapshot is an ordered array of records. Saving writes a sibling
/// `.tmp` file and renames it over the target, so a crash mid-save never
/// leaves a half-written book behind.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl DirectoryRepository for JsonFileRepository {
    async fn load(&self) -> StoreResult<Directory> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No contact book at {}, starting empty", self.path.display());
                return Ok(Directory::new());
            }
            Err(e) => return Err(e.into()),
        };

        let directory: Directory = serde_json::from_slice(&bytes)?;
        info!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    async fn save(&self, directory: &Directory) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(directory)?;
        let tmp = self.temp_path();

        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        info!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}
