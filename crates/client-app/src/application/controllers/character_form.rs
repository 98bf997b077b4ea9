//! Character form - create and edit flows share one state machine.
//!
//! ```text
//! Empty ──edit──▶ Editing ──submit──▶ Submitting ──ok──▶ Success
//!                    ▲                    │
//!                    └──edit── Failed ◀───┘ err
//! ```
//!
//! Edit mode starts in `Loading` until the character is fetched.

use arena_client_ports::outbound::AuthContext;
use arena_domain::{Character, CharacterId, DraftCharacter, ImagePayload, StatKind};

use super::{Completion, Navigation, StateStore, SubmitRejection};
use crate::application::scope::RequestScope;
use crate::application::services::CharacterService;
use crate::application::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CharacterId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fresh create form, nothing touched yet
    Empty,
    /// Edit form waiting for the character
    Loading,
    /// Edit form whose character could not be fetched
    LoadFailed,
    Editing,
    Submitting,
    /// Terminal; the page navigates away
    Success,
    /// Submission failed; the draft is untouched and can be resubmitted
    Failed,
}

/// Non-error information shown above the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    /// An image was picked on the edit form but updates only carry name and stats
    ImageNotUploaded,
}

impl FormNotice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ImageNotUploaded => {
                "Image changes are not saved when editing; only the name and stats are updated."
            }
        }
    }
}

/// Snapshot taken when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: FormMode,
    pub draft: DraftCharacter,
}

/// What the backend acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReceipt {
    Created(Character),
    Updated(CharacterId),
}

/// All state behind one character form page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterFormState {
    pub mode: FormMode,
    pub draft: DraftCharacter,
    pub phase: FormPhase,
    pub error: Option<String>,
    pub notice: Option<FormNotice>,
}

impl CharacterFormState {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: DraftCharacter::default(),
            phase: FormPhase::Empty,
            error: None,
            notice: None,
        }
    }

    pub fn edit(id: CharacterId) -> Self {
        Self {
            mode: FormMode::Edit(id),
            draft: DraftCharacter::default(),
            phase: FormPhase::Loading,
            error: None,
            notice: None,
        }
    }

    /// Edit form already filled from a fetched character.
    pub fn hydrated(character: &Character) -> Self {
        let mut state = Self::edit(character.id);
        state.finish_hydrate(Ok(character.clone()));
        state
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    /// Whether field edits are currently accepted.
    pub fn is_editable(&self) -> bool {
        matches!(
            self.phase,
            FormPhase::Empty | FormPhase::Editing | FormPhase::Failed
        )
    }

    fn touch(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.phase = FormPhase::Editing;
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let applied = self.touch();
        if applied {
            self.draft.set_name(name);
        }
        applied
    }

    pub fn set_stat(&mut self, kind: StatKind, raw: i64) -> bool {
        let applied = self.touch();
        if applied {
            self.draft.set_stat(kind, raw);
        }
        applied
    }

    pub fn select_image(&mut self, image: ImagePayload) -> bool {
        let applied = self.touch();
        if applied {
            self.draft.select_image(image);
            if matches!(self.mode, FormMode::Edit(_)) && !CharacterService::SUPPORTS_IMAGE_UPDATE {
                self.notice = Some(FormNotice::ImageNotUploaded);
            }
        }
        applied
    }

    pub fn clear_image(&mut self) -> bool {
        let applied = self.touch();
        if applied {
            self.draft.clear_image();
            self.notice = None;
        }
        applied
    }

    pub fn begin_hydrate(&mut self) {
        self.phase = FormPhase::Loading;
        self.error = None;
    }

    pub fn finish_hydrate(&mut self, result: Result<Character, ServiceError>) {
        match result {
            Ok(character) => {
                self.draft = DraftCharacter::from_character(&character);
                self.phase = FormPhase::Editing;
                self.error = None;
            }
            Err(e) => {
                self.phase = FormPhase::LoadFailed;
                self.error = Some(match e {
                    ServiceError::NotFound { .. } => e.user_message().to_string(),
                    ServiceError::RequestFailed(_) => "Could not load the character.".to_string(),
                });
            }
        }
    }

    /// Move to `Submitting` and snapshot the draft.
    pub fn begin_submit(&mut self, strict: bool) -> Result<SubmitRequest, SubmitRejection> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitRejection::InProgress),
            FormPhase::Success => return Err(SubmitRejection::Finished),
            FormPhase::Loading | FormPhase::LoadFailed => return Err(SubmitRejection::NotLoaded),
            FormPhase::Empty | FormPhase::Editing | FormPhase::Failed => {}
        }

        if strict {
            if let Err(e) = self.draft.validate() {
                let message = e.to_string();
                self.phase = FormPhase::Editing;
                self.error = Some(message.clone());
                return Err(SubmitRejection::Invalid(message));
            }
        }

        self.phase = FormPhase::Submitting;
        self.error = None;
        Ok(SubmitRequest {
            mode: self.mode,
            draft: self.draft.clone(),
        })
    }

    /// Record the backend's answer. Returns where to go on success.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitReceipt, ServiceError>,
    ) -> Option<Navigation> {
        match result {
            Ok(_) => {
                self.phase = FormPhase::Success;
                self.error = None;
                self.notice = None;
                self.draft = DraftCharacter::default();
                Some(Navigation::Listing)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Character submission failed");
                self.phase = FormPhase::Failed;
                self.error = Some(
                    match self.mode {
                        FormMode::Create => "Could not create the character.",
                        FormMode::Edit(_) => "Could not update the character.",
                    }
                    .to_string(),
                );
                None
            }
        }
    }
}

/// Drives a [`CharacterFormState`] against the backend.
#[derive(Clone)]
pub struct CharacterFormController {
    service: CharacterService,
    scope: RequestScope,
    strict_validation: bool,
}

impl CharacterFormController {
    pub fn new(service: CharacterService, scope: RequestScope) -> Self {
        Self {
            service,
            scope,
            strict_validation: false,
        }
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    /// Fill an edit form from the backend. Create forms are left alone.
    pub async fn hydrate<S: StateStore<CharacterFormState>>(&self, state: &mut S) -> Completion {
        let id = match state.read(|s| s.mode) {
            FormMode::Edit(id) => id,
            FormMode::Create => return Completion::Applied,
        };
        if self.scope.is_cancelled() {
            return Completion::Discarded;
        }

        state.update(CharacterFormState::begin_hydrate);
        match self.scope.run(self.service.find_character(id)).await {
            Some(result) => {
                state.update(|s| s.finish_hydrate(result));
                Completion::Applied
            }
            None => Completion::Discarded,
        }
    }

    /// Submit the draft through create or update depending on the mode.
    ///
    /// `Ok(Some(_))` is the navigation after success; `Ok(None)` means the
    /// request failed (the error is in state) or the page went away.
    pub async fn submit<S: StateStore<CharacterFormState>>(
        &self,
        auth: &AuthContext,
        state: &mut S,
    ) -> Result<Option<Navigation>, SubmitRejection> {
        if self.scope.is_cancelled() {
            return Ok(None);
        }
        let request = state.update(|s| s.begin_submit(self.strict_validation))?;

        let outcome = match request.mode {
            FormMode::Create => self
                .scope
                .run(self.service.create_character(auth, &request.draft))
                .await
                .map(|r| r.map(SubmitReceipt::Created)),
            FormMode::Edit(id) => self
                .scope
                .run(self.service.update_character(id, &request.draft))
                .await
                .map(|r| r.map(|()| SubmitReceipt::Updated(id))),
        };

        Ok(outcome.and_then(|result| state.update(|s| s.finish_submit(result))))
    }
}
