//! Test-only infrastructure fakes.
//!
//! These helpers implement outbound ports for unit tests (services/controllers),
//! allowing tests to run without a real backend.

pub mod fake_backend;

pub use fake_backend::{FakeBackend, RecordedRequest};
