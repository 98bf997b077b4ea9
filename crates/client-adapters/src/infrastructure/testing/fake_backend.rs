//! In-memory stand-in for the character backend.
//!
//! Implements [`RawApiPort`] over a `Vec<Character>` and records every call,
//! so service and controller tests can assert on exactly what was sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{json, Value};

use arena_client_ports::outbound::{ApiError, AuthContext, MultipartForm, RawApiPort};
use arena_domain::{Character, CharacterId, StatBlock, StatKind, StatValue};

/// One call as the backend saw it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    /// JSON body (register)
    pub body: Option<Value>,
    /// Multipart body (create/edit)
    pub form: Option<MultipartForm>,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct State {
    characters: Vec<Character>,
    next_id: i64,
    requests: Vec<RecordedRequest>,
    failures: VecDeque<ApiError>,
    require_auth: bool,
}

/// Fake backend for tests.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

fn not_found() -> ApiError {
    ApiError::HttpError {
        status: 404,
        message: "Not Found".to_string(),
    }
}

fn bad_request(message: impl Into<String>) -> ApiError {
    ApiError::HttpError {
        status: 400,
        message: message.into(),
    }
}

fn to_json(value: &impl serde::Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::SerializeError(e.to_string()))
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::with_characters(Vec::new())
    }

    pub fn with_characters(characters: Vec<Character>) -> Self {
        let next_id = characters.iter().map(|c| c.id.get()).max().unwrap_or(0) + 1;
        Self {
            state: Arc::new(Mutex::new(State {
                characters,
                next_id,
                ..State::default()
            })),
        }
    }

    /// Reject create requests that carry no bearer token with a 401.
    pub fn requiring_auth(self) -> Self {
        self.lock().require_auth = true;
        self
    }

    /// Fail the next request with `error`; queued failures are used in order.
    pub fn fail_next(&self, error: ApiError) {
        self.lock().failures.push_back(error);
    }

    pub fn characters(&self) -> Vec<Character> {
        self.lock().characters.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the call, then pop a queued failure if there is one.
    fn record(&self, request: RecordedRequest) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.lock();
        state.requests.push(request);
        match state.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

fn parse_id(raw: &str) -> Result<CharacterId, ApiError> {
    raw.parse::<CharacterId>().map_err(|_| not_found())
}

fn stats_from_form(form: &MultipartForm) -> Result<StatBlock, ApiError> {
    StatKind::ALL.iter().try_fold(StatBlock::default(), |block, kind| {
        let raw = form
            .text_value(kind.field_name())
            .ok_or_else(|| bad_request(format!("missing field {}", kind.field_name())))?;
        let value = raw
            .parse::<i64>()
            .map_err(|_| bad_request(format!("{} is not a number", kind.field_name())))
            .and_then(|n| {
                StatValue::new(*kind, n).map_err(|e| bad_request(e.to_string()))
            })?;
        Ok(block.with(*kind, value))
    })
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for FakeBackend {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let state = self.record(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            body: None,
            form: None,
            authorization: None,
        })?;

        match path {
            "/api/get" => to_json(&state.characters),
            _ => Err(not_found()),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let _state = self.record(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            body: Some(body.clone()),
            form: None,
            authorization: None,
        })?;

        match path {
            "/api/register" => {
                let has = |field: &str| body.get(field).and_then(Value::as_str).is_some();
                if has("email") && has("password") {
                    Ok(json!({ "message": "User registered successfully" }))
                } else {
                    Err(bad_request("email and password are required"))
                }
            }
            _ => Err(not_found()),
        }
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
        auth: &AuthContext,
    ) -> Result<Value, ApiError> {
        let mut state = self.record(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            body: None,
            form: Some(form.clone()),
            authorization: auth.authorization_header(),
        })?;

        if path == "/api/create" {
            if state.require_auth && !auth.is_authenticated() {
                return Err(ApiError::HttpError {
                    status: 401,
                    message: "Unauthorized".to_string(),
                });
            }
            let stats = stats_from_form(&form)?;
            let image_path = form
                .file_part("image")
                .map(|_| format!("/uploads/{}-character_image.png", state.next_id));
            let character = Character {
                id: CharacterId::new(state.next_id),
                name: form.text_value("name").unwrap_or_default().to_string(),
                image_path,
                stats,
            };
            state.next_id += 1;
            state.characters.push(character.clone());
            return to_json(&character);
        }

        if let Some(raw_id) = path.strip_prefix("/api/edit/") {
            let id = parse_id(raw_id)?;
            let stats = stats_from_form(&form)?;
            let name = form.text_value("name").unwrap_or_default().to_string();
            let character = state
                .characters
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(not_found)?;
            character.name = name;
            character.stats = stats;
            return Ok(json!({ "message": "Character updated" }));
        }

        Err(not_found())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let mut state = self.record(RecordedRequest {
            method: "DELETE",
            path: path.to_string(),
            body: None,
            form: None,
            authorization: None,
        })?;

        let id = path
            .strip_prefix("/api/")
            .ok_or_else(not_found)
            .and_then(parse_id)?;
        let before = state.characters.len();
        state.characters.retain(|c| c.id != id);
        if state.characters.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thor_form() -> MultipartForm {
        MultipartForm::new()
            .text("name", "Thor")
            .text("strength", "80")
            .text("speed", "60")
            .text("durability", "90")
            .text("power", "95")
            .text("combat", "85")
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let backend = FakeBackend::new();
        let auth = AuthContext::anonymous();

        let first = backend.post_multipart("/api/create", thor_form(), &auth).await.unwrap();
        let second = backend.post_multipart("/api/create", thor_form(), &auth).await.unwrap();

        assert_eq!(first["id"], json!(1));
        assert_eq!(second["id"], json!(2));
        assert_eq!(first["imagePath"], Value::Null);
        assert_eq!(backend.characters().len(), 2);
    }

    #[tokio::test]
    async fn test_create_with_image_sets_path() {
        let backend = FakeBackend::new();
        let form = thor_form().file("image", "character_image.png", "image/png", vec![1]);

        let created = backend
            .post_multipart("/api/create", form, &AuthContext::anonymous())
            .await
            .unwrap();
        assert_eq!(created["imagePath"], json!("/uploads/1-character_image.png"));
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_stat() {
        let backend = FakeBackend::new();
        let form = MultipartForm::new()
            .text("name", "Thor")
            .text("strength", "180")
            .text("speed", "60")
            .text("durability", "90")
            .text("power", "95")
            .text("combat", "85");

        let err = backend
            .post_multipart("/api/create", form, &AuthContext::anonymous())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_queued_failure_is_consumed_once() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::RequestFailed("offline".to_string()));

        assert!(backend.get_json("/api/get").await.is_err());
        assert_eq!(backend.get_json("/api/get").await.unwrap(), json!([]));
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_paths_are_404() {
        let backend = FakeBackend::new();
        assert!(backend.get_json("/api/nope").await.unwrap_err().is_not_found());
        assert!(backend.delete("/api/abc").await.unwrap_err().is_not_found());
        assert!(backend.delete("/api/1").await.unwrap_err().is_not_found());
    }
}
