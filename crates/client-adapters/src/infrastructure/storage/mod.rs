//! Persisted key/value storage
//!
//! The correct backend is selected at compile time based on the target
//! architecture.

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

use std::sync::Arc;

use arena_client_ports::outbound::StorageProvider;

/// Storage for the current platform.
///
/// `dir` overrides the desktop storage directory and is ignored on the web.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_storage(dir: Option<&std::path::Path>) -> Arc<dyn StorageProvider> {
    match dir {
        Some(dir) => Arc::new(FileStorage::in_dir(dir)),
        None => Arc::new(FileStorage::new()),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn platform_storage(_dir: Option<&std::path::Path>) -> Arc<dyn StorageProvider> {
    Arc::new(WebStorage)
}
