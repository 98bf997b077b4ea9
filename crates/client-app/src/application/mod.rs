//! Application layer - Use cases and orchestration

pub mod api;
pub mod controllers;
pub mod error;
pub mod payload;
pub mod scope;
pub mod services;

// Re-export common types
pub use error::ServiceError;
pub use scope::RequestScope;
