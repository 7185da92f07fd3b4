//! # Transport Seam
//!
//! The network edge of the client, behind a trait so tests can stand in for
//! the far side (see [`crate::client::mock`]).
//!
//! [`ReqwestTransport`] is the deployed implementation. It owns the protocol
//! headers: every request advertises `Accept: application/hal+json`, and a
//! body - when one is attached at all - rides as `application/json`. Response
//! bodies are captured losslessly as JSON or text, depending on what the
//! server's `Content-Type` says, so error bodies survive for the caller to
//! inspect.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::hal::{HttpMethod, HAL_MEDIA_TYPE};

use super::error::ClientError;

/// One request as the client hands it to a transport. The URL is already
/// resolved against the base; the body is present only when the client's
/// attachment policy decided so.
#[derive(Debug, Clone, PartialEq)]
pub struct HalRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

/// A response body, kept in whichever form the server declared.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// `true` for bodies that carry nothing: JSON null or blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            ResponseBody::Json(value) => value.is_null(),
            ResponseBody::Text(text) => text.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HalResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl HalResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes HAL requests. Implementations must not retry or reinterpret
/// responses; the client layer decides what a status means.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HalRequest) -> Result<HalResponse, ClientError>;
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// The deployed transport over a shared [`reqwest::Client`].
///
/// Timeouts and other connection policy are the surrounding application's
/// concern: configure them on the `reqwest::Client` passed to
/// [`ReqwestTransport::with_client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HalRequest) -> Result<HalResponse, ClientError> {
        let mut builder = self
            .http
            .request(request.method.into(), &request.url)
            .header(ACCEPT, HAL_MEDIA_TYPE);
        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| ClientError::Transport(error.to_string()))?;

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("json"));

        let body = if is_json {
            let value = response
                .json()
                .await
                .map_err(|error| ClientError::Transport(error.to_string()))?;
            ResponseBody::Json(value)
        } else {
            let text = response
                .text()
                .await
                .map_err(|error| ClientError::Transport(error.to_string()))?;
            ResponseBody::Text(text)
        };

        Ok(HalResponse { status, body })
    }
}
