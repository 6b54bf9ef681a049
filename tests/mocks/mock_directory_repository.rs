use async_trait::async_trait;
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::Directory;
use contact_book::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the "saved" snapshot in memory, can be told to fail saves, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDirectoryRepository {
    snapshot: Arc<Mutex<Option<Directory>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a new repository with nothing saved.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository whose saved snapshot is `directory`.
    pub fn with_directory(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(directory);
        repo
    }

    /// The last saved snapshot, if any.
    pub fn saved(&self) -> Option<Directory> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockDirectoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryRepository for MockDirectoryRepository {
    async fn load(&self) -> StoreResult<Directory> {
        self.track_call("load");
        Ok(self.saved().unwrap_or_default())
    }

    async fn save(&self, directory: &Directory) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only snapshot",
            )));
        }

        *self.snapshot.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
