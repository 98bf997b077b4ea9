//! Typed API wrapper for application services.
//!
//! The composition root stores an object-safe `Arc<dyn RawApiPort>`; `Api`
//! wraps it and adds typed request/response handling via serde_json
//! conversions so services never touch raw `Value`s.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use arena_client_ports::outbound::{ApiError, AuthContext, MultipartForm, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
        auth: &AuthContext,
    ) -> Result<T, ApiError> {
        let value = self.raw.post_multipart(path, form, auth).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// Multipart POST where only the status matters
    pub async fn post_multipart_no_response(
        &self,
        path: &str,
        form: MultipartForm,
        auth: &AuthContext,
    ) -> Result<(), ApiError> {
        self.raw.post_multipart(path, form, auth).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.raw.delete(path).await
    }
}
