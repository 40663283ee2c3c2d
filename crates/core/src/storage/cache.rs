use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::CoreError;

/// Key-value persistence collaborator.
///
/// One fixed key holds the serialized trip snapshot, a companion key the
/// devmode flag. Browser local storage, a directory of files and a plain
/// in-memory map all fit behind this trait.
///
/// Two sessions sharing one cache are last-write-wins; the library does not
/// arbitrate concurrent writers.
pub trait SnapshotCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// In-memory cache for tests and ephemeral sessions.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Cache("cache lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Cache("cache lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Cache("cache lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// One file per key under a directory (native targets only).
#[cfg(not(target_arch = "wasm32"))]
pub struct FileCache {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileCache {
    /// Open (and create if needed) a cache directory.
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SnapshotCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Cache(e.to_string())),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), CoreError> {
        std::fs::write(self.path_for(key), value)
            .map_err(|e| CoreError::Cache(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Cache(e.to_string())),
        }
    }
}
