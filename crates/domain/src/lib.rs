//! Arena Roster domain types.
//!
//! The backend owns every character; this crate only describes the snapshot
//! the client holds (`Character`) and the transient edit state it builds up
//! before submitting (`DraftCharacter`).

pub mod character;
pub mod credentials;
pub mod draft;
pub mod error;
pub mod ids;
pub mod image;
pub mod stats;

pub use character::Character;
pub use credentials::{AuthCredentials, BearerToken};
pub use draft::DraftCharacter;
pub use error::DomainError;
pub use ids::CharacterId;
pub use image::{ImagePayload, UPLOAD_FILE_NAME};
pub use stats::{StatBlock, StatKind, StatValue};
