//! Page controllers
//!
//! A controller owns no state of its own. Pages hand it a [`StateStore`]
//! (a Dioxus signal in the UI, a plain struct in tests) and the controller
//! runs the fetch, then writes the outcome between awaits.

pub mod character_form;
pub mod listing;
pub mod registration;

pub use character_form::{
    CharacterFormController, CharacterFormState, FormMode, FormNotice, FormPhase,
};
pub use listing::{ListingContent, ListingController, ListingState};
pub use registration::{RegistrationController, RegistrationPhase, RegistrationState};

use arena_domain::CharacterId;

/// Somewhere page state can be mutated in place.
pub trait StateStore<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;

    fn read<R>(&mut self, f: impl FnOnce(&T) -> R) -> R {
        self.update(|state| f(state))
    }
}

impl<T> StateStore<T> for T {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(self)
    }
}

/// Where a page wants the router to go next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Listing,
    Create,
    Edit(CharacterId),
}

/// How a scoped request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was written into page state
    Applied,
    /// The page was torn down first; nothing was written
    Discarded,
}

/// Why a submit never reached the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is already in flight
    InProgress,
    /// The form already succeeded and is waiting to navigate away
    Finished,
    /// Edit mode, but the character has not been loaded
    NotLoaded,
    /// Strict validation failed
    Invalid(String),
}
