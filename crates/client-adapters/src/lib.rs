//! Arena Roster Client Adapters
//!
//! Concrete implementations of the client ports: the reqwest HTTP adapter,
//! persisted storage, environment configuration, and test doubles.

pub mod infrastructure;

pub use infrastructure::testing;
