//! Reusable UI components

pub mod character_card;
pub mod character_form;
pub mod navbar;
pub mod radar_chart;
pub mod stat_slider;

pub use character_card::CharacterCard;
pub use character_form::CharacterForm;
pub use navbar::Navbar;
pub use radar_chart::RadarChart;
pub use stat_slider::StatSlider;
