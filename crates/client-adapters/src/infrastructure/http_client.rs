//! reqwest-backed implementation of [`RawApiPort`].
//!
//! Single attempt per call and the transport's default timeout. Any status
//! outside 2xx becomes [`ApiError::HttpError`] carrying the response text.

use reqwest::{header, multipart, Client, RequestBuilder, Response};
use serde_json::Value;
use url::Url;

use arena_client_ports::outbound::{ApiError, AuthContext, FormPart, MultipartForm, RawApiPort};

/// HTTP adapter rooted at one base URL
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &Url) -> Self {
        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

async fn send(request: RequestBuilder, method: &str, path: &str) -> Result<Response, ApiError> {
    tracing::debug!(%method, %path, "Sending request");

    let response = request.send().await.map_err(|e| {
        tracing::warn!(%method, %path, error = %e, "Request did not complete");
        ApiError::RequestFailed(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(%method, %path, status = status.as_u16(), "Request rejected");
        return Err(ApiError::HttpError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response)
}

/// Decode a JSON body; an empty body is `Value::Null`.
async fn read_json(response: Response) -> Result<Value, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&bytes).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn to_reqwest_form(form: MultipartForm) -> Result<multipart::Form, ApiError> {
    form.into_parts()
        .into_iter()
        .try_fold(multipart::Form::new(), |acc, part| match part {
            FormPart::Text { name, value } => Ok(acc.text(name, value)),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => {
                let part = multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&mime)
                    .map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
                Ok(acc.part(name, part))
            }
        })
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = send(self.client.get(self.url(path)), "GET", path).await?;
        read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = send(self.client.post(self.url(path)).json(body), "POST", path).await?;
        read_json(response).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
        auth: &AuthContext,
    ) -> Result<Value, ApiError> {
        let mut request = self
            .client
            .post(self.url(path))
            .multipart(to_reqwest_form(form)?);
        if let Some(value) = auth.authorization_header() {
            request = request.header(header::AUTHORIZATION, value);
        }

        let response = send(request, "POST", path).await?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        send(self.client.delete(self.url(path)), "DELETE", path).await?;
        Ok(())
    }
}
