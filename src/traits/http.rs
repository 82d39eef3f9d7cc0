//! The HTTP boundary of the dashboard.
//!
//! Both dashboard endpoints are plain GETs, so [`HttpClient`] has a single
//! method. [`crate::adapters::ReqwestHttpClient`] is the real transport and
//! [`crate::adapters::MockHttpClient`] the stub used by tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Request headers by name.
pub type Headers = HashMap<String, String>;

/// Status and raw body of an answered request.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Serialize `value` as the body.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, Bytes::from(value.to_string()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text; invalid UTF-8 becomes U+FFFD.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Why a request produced no response at all.
#[derive(Debug, Clone)]
pub enum HttpError {
    ConnectionFailed(String),
    Timeout(String),
    InvalidUrl(String),
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// GET-only HTTP transport.
///
/// Any status the server sends back is `Ok`; deciding that a 401 or 500 is a
/// failure is up to [`crate::api::DashboardApi`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
