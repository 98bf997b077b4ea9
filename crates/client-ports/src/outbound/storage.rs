//! Persisted client-side key/value storage.
//!
//! Desktop builds keep it in a file, the web build in `localStorage`.

use std::sync::Arc;

/// Well-known storage keys
pub mod storage_keys {
    /// Bearer token written by the login flow
    pub const AUTH_TOKEN: &str = "jwtToken";
}

/// Minimal synchronous key/value storage
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StorageProvider: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

impl<S: StorageProvider + ?Sized> StorageProvider for Arc<S> {
    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
