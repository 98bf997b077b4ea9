//! Object-safe HTTP port.
//!
//! Everything crosses this boundary as `serde_json::Value` or a
//! [`MultipartForm`], so the composition root can hold an
//! `Arc<dyn RawApiPort>` and the typed wrapper lives in the application layer.

use serde_json::Value;

use super::{ApiError, AuthContext, MultipartForm};

/// Raw access to the backend REST surface.
///
/// Paths are relative (`/api/get`); the adapter owns the base URL.
/// Any non-success status must come back as [`ApiError::HttpError`].
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET and decode a JSON body
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// POST a JSON body; an empty response body decodes as `Value::Null`
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST a multipart form, attaching `Authorization` when `auth` carries a token
    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
        auth: &AuthContext,
    ) -> Result<Value, ApiError>;

    /// DELETE, ignoring any response body
    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
