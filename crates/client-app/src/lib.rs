//! Arena Roster client application layer.
//!
//! Services wrap the backend REST surface; controllers own per-page state and
//! drive it through the fetch-mutate-local-state cycle.

pub mod application;
