//! Browser `localStorage` backend.

use arena_client_ports::outbound::StorageProvider;

/// Thin wrapper over `window.localStorage`.
///
/// The handle is looked up on every call; browser objects cannot be shared
/// across threads, so none is kept.
#[derive(Clone, Copy, Default)]
pub struct WebStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl StorageProvider for WebStorage {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!(%key, "Failed to write to localStorage");
                }
            }
            None => tracing::warn!("localStorage unavailable"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!(%key, "Failed to remove from localStorage");
            }
        }
    }
}
