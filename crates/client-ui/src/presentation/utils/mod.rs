//! Presentation helpers with no Dioxus dependency

pub mod radar;
pub mod stat_styles;

pub use radar::{RadarGeometry, RING_LEVELS};
pub use stat_styles::StatStyle;
