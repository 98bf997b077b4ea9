//! Presentation layer - components, page views, and Dioxus glue

pub mod components;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
