//! Client port definitions and shared cross-layer types.

pub mod config;
pub mod outbound;
