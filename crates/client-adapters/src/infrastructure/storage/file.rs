//! Desktop storage with file-based persistence.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use arena_client_ports::outbound::StorageProvider;

const STORAGE_FILE: &str = "storage.json";

/// Key/value pairs kept in a JSON file.
///
/// Default location is the platform config dir, e.g.
/// `~/.config/arena-roster/storage.json` on Linux.
#[derive(Clone)]
pub struct FileStorage {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage {
    pub fn new() -> Self {
        let storage_path = match ProjectDirs::from("io", "arena", "arena-roster") {
            Some(dirs) => dirs.config_dir().join(STORAGE_FILE),
            None => PathBuf::from("arena_storage.json"),
        };
        Self::with_path(storage_path)
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::with_path(dir.join(STORAGE_FILE))
    }

    /// Open (or lazily create) storage at an explicit file path.
    pub fn with_path(storage_path: PathBuf) -> Self {
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => serde_json::from_str::<HashMap<String, String>>(&data)
                    .unwrap_or_else(|e| {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }),
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("File storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn persist(&self, snapshot: &HashMap<String, String>) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(snapshot) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize storage data: {}", e),
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut HashMap<String, String>)) {
        let snapshot = match self.cache.write() {
            Ok(mut guard) => {
                f(&mut guard);
                guard.clone()
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
                return;
            }
        };
        self.persist(&snapshot);
    }
}

impl StorageProvider for FileStorage {
    fn save(&self, key: &str, value: &str) {
        self.mutate(|map| {
            map.insert(key.to_string(), value.to_string());
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        self.mutate(|map| {
            map.remove(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_client_ports::outbound::storage_keys;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileStorage::in_dir(dir.path());
        storage.save(storage_keys::AUTH_TOKEN, "abc");
        assert_eq!(storage.load(storage_keys::AUTH_TOKEN).as_deref(), Some("abc"));

        let reopened = FileStorage::in_dir(dir.path());
        assert_eq!(
            reopened.load(storage_keys::AUTH_TOKEN).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        storage.save("a", "1");
        storage.remove("a");

        assert_eq!(FileStorage::in_dir(dir.path()).load("a"), None);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::with_path(path);
        assert_eq!(storage.load("jwtToken"), None);
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::with_path(dir.path().join("nested/deeper/storage.json"));
        storage.save("k", "v");
        assert!(storage.path().exists());
    }
}
