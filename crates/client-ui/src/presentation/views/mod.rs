//! Page views

pub mod character_view;
pub mod creation;
pub mod listing;
pub mod not_found;
pub mod registration;

pub use character_view::CharacterView;
pub use creation::CreationView;
pub use listing::ListingView;
pub use not_found::NotFoundView;
pub use registration::RegistrationView;
