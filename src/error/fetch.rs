//! Failure of a dashboard data request.

use thiserror::Error;

use crate::traits::HttpError;

/// Longest response body excerpt kept in a diagnostic message.
const MAX_BODY_EXCERPT: usize = 200;

/// The single failure kind of a dashboard fetch.
///
/// Network failures, timeouts, non-2xx statuses and malformed bodies are not
/// told apart by callers; `detail` exists for the diagnostic log only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {detail}")]
    RequestFailed { endpoint: String, detail: String },
}

impl FetchError {
    pub fn new(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        FetchError::RequestFailed {
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }

    /// The transport could not complete the request.
    pub fn transport(endpoint: &str, err: &HttpError) -> Self {
        Self::new(endpoint, err.to_string())
    }

    /// The server answered with a non-2xx status.
    pub fn status(endpoint: &str, status: u16, body: &str) -> Self {
        let excerpt: String = body.chars().take(MAX_BODY_EXCERPT).collect();
        Self::new(endpoint, format!("HTTP {}: {}", status, excerpt.trim()))
    }

    /// The body could not be decoded.
    pub fn malformed(endpoint: &str, err: &serde_json::Error) -> Self {
        Self::new(endpoint, format!("malformed body: {}", err))
    }

    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::RequestFailed { endpoint, .. } => endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::status("/university/profile", 404, "  not found \n");
        assert_eq!(
            err.to_string(),
            "request to /university/profile failed: HTTP 404: not found"
        );
        assert_eq!(err.endpoint(), "/university/profile");
    }

    #[test]
    fn test_status_error_truncates_body() {
        let body = "x".repeat(1000);
        let err = FetchError::status("/university/exam/stats", 500, &body);
        assert!(err.to_string().len() < 300);
    }

    #[test]
    fn test_transport_error_message() {
        let err = FetchError::transport(
            "/university/profile",
            &HttpError::ConnectionFailed("refused".to_string()),
        );
        assert!(err.to_string().contains("Connection failed: refused"));
    }

    #[test]
    fn test_malformed_error_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::malformed("/university/exam/stats", &json_err);
        assert!(err.to_string().contains("malformed body"));
    }
}
