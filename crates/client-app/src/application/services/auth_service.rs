//! Account registration against the backend.

use serde::Deserialize;
use serde_json::{Map, Value};

use arena_client_ports::outbound::ApiError;
use arena_domain::AuthCredentials;

use super::endpoints;
use crate::application::api::Api;
use crate::application::ServiceError;

/// Whatever the backend answered on a successful registration.
///
/// Only `message` is looked at; everything else is kept untyped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone)]
pub struct AuthService {
    api: Api,
}

impl AuthService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Submit credentials once. No token is stored; logging in is a separate flow.
    pub async fn register(&self, credentials: AuthCredentials) -> Result<AuthResult, ServiceError> {
        let value: Value = self.api.post(endpoints::REGISTER, &credentials).await?;
        let result = match value {
            Value::Null => AuthResult::default(),
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| ApiError::ParseError(e.to_string()))?,
            other => AuthResult {
                message: other.as_str().map(str::to_string),
                extra: Map::new(),
            },
        };
        tracing::info!(email = %credentials.email, "Account registered");
        Ok(result)
    }
}
