//! Character listing - load everything, delete one at a time.

use arena_domain::{Character, CharacterId};

use super::{Completion, Navigation, StateStore};
use crate::application::scope::RequestScope;
use crate::application::services::CharacterService;
use crate::application::ServiceError;

const LOAD_FAILED: &str = "Could not load the characters.";
const DELETE_FAILED: &str = "Could not delete the character.";

/// What the listing page should show instead of, or above, the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingContent {
    Loading,
    /// The fetch failed; the message replaces the roster entirely
    LoadFailed,
    Empty,
    Roster,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingState {
    pub characters: Vec<Character>,
    pub loading: bool,
    /// Last fetch failed. Cleared by the next load.
    pub load_error: Option<String>,
    /// Last delete failed. The roster is still valid.
    pub action_error: Option<String>,
}

impl ListingState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    /// Replace the local collection wholesale.
    pub fn finish_load(&mut self, result: Result<Vec<Character>, ServiceError>) {
        self.loading = false;
        match result {
            Ok(characters) => {
                self.characters = characters;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Character listing failed");
                self.load_error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Drop `id` locally, but only once the backend confirmed the delete.
    pub fn finish_remove(&mut self, id: CharacterId, result: Result<(), ServiceError>) {
        match result {
            Ok(()) => {
                self.characters.retain(|c| c.id != id);
                self.action_error = None;
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Character deletion failed");
                self.action_error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn content(&self) -> ListingContent {
        if self.load_error.is_some() {
            ListingContent::LoadFailed
        } else if self.loading && self.is_empty() {
            ListingContent::Loading
        } else if self.is_empty() {
            ListingContent::Empty
        } else {
            ListingContent::Roster
        }
    }
}

#[derive(Clone)]
pub struct ListingController {
    service: CharacterService,
    scope: RequestScope,
}

impl ListingController {
    pub fn new(service: CharacterService, scope: RequestScope) -> Self {
        Self { service, scope }
    }

    pub async fn load<S: StateStore<ListingState>>(&self, state: &mut S) -> Completion {
        if self.scope.is_cancelled() {
            return Completion::Discarded;
        }
        state.update(ListingState::begin_load);
        match self.scope.run(self.service.list_characters()).await {
            Some(result) => {
                state.update(|s| s.finish_load(result));
                Completion::Applied
            }
            None => Completion::Discarded,
        }
    }

    /// Delete without optimistic removal. Concurrent removes are independent.
    pub async fn remove<S: StateStore<ListingState>>(
        &self,
        id: CharacterId,
        state: &mut S,
    ) -> Completion {
        match self.scope.run(self.service.delete_character(id)).await {
            Some(result) => {
                state.update(|s| s.finish_remove(id, result));
                Completion::Applied
            }
            None => Completion::Discarded,
        }
    }

    pub fn edit(&self, id: CharacterId) -> Navigation {
        Navigation::Edit(id)
    }
}
