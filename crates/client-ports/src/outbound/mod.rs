//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the backend and to persisted
//! client storage without depending on concrete implementations.

pub mod api_error;
pub mod auth;
pub mod multipart;
pub mod raw_api_port;
pub mod storage;

pub use api_error::ApiError;
pub use auth::AuthContext;
pub use multipart::{FormPart, MultipartForm};
pub use raw_api_port::RawApiPort;
pub use storage::{storage_keys, StorageProvider};

#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
#[cfg(any(test, feature = "testing"))]
pub use storage::MockStorageProvider;
