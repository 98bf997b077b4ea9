//! Application services
//!
//! Each service wraps the typed [`Api`](crate::application::api::Api) and
//! exposes one use case per backend endpoint.

pub mod auth_service;
pub mod character_service;
pub mod session_service;

pub use auth_service::{AuthResult, AuthService};
pub use character_service::CharacterService;
pub use session_service::SessionService;

/// Backend REST paths, relative to the configured base URL.
pub mod endpoints {
    use arena_domain::CharacterId;

    pub const REGISTER: &str = "/api/register";
    pub const CREATE: &str = "/api/create";
    pub const LIST: &str = "/api/get";

    pub fn edit(id: CharacterId) -> String {
        format!("/api/edit/{}", id)
    }

    /// Deletion uses the bare id under `/api`.
    pub fn delete(id: CharacterId) -> String {
        format!("/api/{}", id)
    }
}
