//! Infrastructure layer - External adapters

pub mod config;
pub mod http_client;
pub mod storage;

pub use config::{bearer_token_from, client_config_from, ConfigSource, EnvSource};
pub use http_client::ApiAdapter;

// Test-only infrastructure fakes (ports/adapters).
// Available for integration testing from other crates as well
pub mod testing;
