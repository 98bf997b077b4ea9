//! Registration page state.

use arena_domain::AuthCredentials;

use super::{Completion, Navigation, StateStore, SubmitRejection};
use crate::application::scope::RequestScope;
use crate::application::services::AuthService;
use crate::application::ServiceError;

const REGISTRATION_FAILED: &str = "Registration failed.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationPhase {
    #[default]
    Editing,
    Submitting,
    Success,
    Failed,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub email: String,
    pub password: String,
    pub phase: RegistrationPhase,
    pub error: Option<String>,
}

impl std::fmt::Debug for RegistrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationState")
            .field("email", &self.email)
            .field("password", &"***")
            .field("phase", &self.phase)
            .field("error", &self.error)
            .finish()
    }
}

impl RegistrationState {
    /// Take the credentials out of the form; the password field is left empty.
    pub fn begin_submit(&mut self) -> Result<AuthCredentials, SubmitRejection> {
        match self.phase {
            RegistrationPhase::Submitting => return Err(SubmitRejection::InProgress),
            RegistrationPhase::Success => return Err(SubmitRejection::Finished),
            RegistrationPhase::Editing | RegistrationPhase::Failed => {}
        }
        self.phase = RegistrationPhase::Submitting;
        self.error = None;
        Ok(AuthCredentials::new(
            self.email.clone(),
            std::mem::take(&mut self.password),
        ))
    }

    pub fn finish_submit<T>(&mut self, result: Result<T, ServiceError>) -> Option<Navigation> {
        match result {
            Ok(_) => {
                self.phase = RegistrationPhase::Success;
                Some(Navigation::Listing)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration failed");
                self.phase = RegistrationPhase::Failed;
                self.error = Some(REGISTRATION_FAILED.to_string());
                None
            }
        }
    }
}

#[derive(Clone)]
pub struct RegistrationController {
    service: AuthService,
    scope: RequestScope,
}

impl RegistrationController {
    pub fn new(service: AuthService, scope: RequestScope) -> Self {
        Self { service, scope }
    }

    pub async fn submit<S: StateStore<RegistrationState>>(
        &self,
        state: &mut S,
    ) -> Result<(Completion, Option<Navigation>), SubmitRejection> {
        if self.scope.is_cancelled() {
            return Ok((Completion::Discarded, None));
        }
        let credentials = state.update(RegistrationState::begin_submit)?;
        match self.scope.run(self.service.register(credentials)).await {
            Some(result) => Ok((
                Completion::Applied,
                state.update(|s| s.finish_submit(result)),
            )),
            None => Ok((Completion::Discarded, None)),
        }
    }
}
