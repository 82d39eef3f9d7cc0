//! In-memory [`HttpClient`] for tests.
//!
//! Responses are stubbed per URL, with an optional fallback for everything
//! else. Every call is remembered so tests can count requests and inspect
//! the headers the dashboard sent.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A GET the client received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What a stubbed URL answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The server answered, with any status
    Reply(Response),
    /// The request never got an answer
    Fail(HttpError),
}

impl MockResponse {
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Reply(Response::json_body(200, &value))
    }

    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Reply(Response::new(status, Bytes::from(body.to_string())))
    }
}

#[derive(Debug, Default)]
struct Stubs {
    by_url: HashMap<String, MockResponse>,
    delays: HashMap<String, Duration>,
    fallback: Option<MockResponse>,
    seen: Vec<RecordedRequest>,
}

/// Stubbed HTTP client. Clones share stubs and recorded requests.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response(
///     "http://api.test/university/exam/stats",
///     MockResponse::json(serde_json::json!({"totalExams": 5})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    stubs: Arc<Mutex<Stubs>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.stubs
            .lock()
            .unwrap()
            .by_url
            .insert(url.to_string(), response);
    }

    /// Hold the answer for `url` back by `delay`.
    pub fn set_delay(&self, url: &str, delay: Duration) {
        self.stubs
            .lock()
            .unwrap()
            .delays
            .insert(url.to_string(), delay);
    }

    /// Answer for any URL without its own stub.
    pub fn set_default_response(&self, response: MockResponse) {
        self.stubs.lock().unwrap().fallback = Some(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.stubs.lock().unwrap().seen.clone()
    }

    pub fn request_count(&self) -> usize {
        self.stubs.lock().unwrap().seen.len()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let (stub, delay) = {
            let mut stubs = self.stubs.lock().unwrap();
            stubs.seen.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
            });
            let stub = stubs
                .by_url
                .get(url)
                .or(stubs.fallback.as_ref())
                .cloned();
            (stub, stubs.delays.get(url).copied())
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match stub {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Fail(err)) => Err(err),
            None => Err(HttpError::Other(format!("nothing stubbed for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS_URL: &str = "http://api.test/university/exam/stats";

    #[tokio::test]
    async fn test_stubbed_url_answers_and_is_recorded() {
        let http = MockHttpClient::new();
        http.set_response(STATS_URL, MockResponse::json(serde_json::json!({"totalExams": 5})));

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer tok".to_string());
        let response = http.get(STATS_URL, &headers).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text_lossy(), r#"{"totalExams":5}"#);
        let seen = http.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, STATS_URL);
        assert_eq!(seen[0].headers.get("Authorization"), Some(&"Bearer tok".to_string()));
    }

    #[tokio::test]
    async fn test_stubbed_failure() {
        let http = MockHttpClient::new();
        http.set_response(
            STATS_URL,
            MockResponse::Fail(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = http.get(STATS_URL, &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_unstubbed_url_fails_unless_fallback_set() {
        let http = MockHttpClient::new();
        assert!(matches!(
            http.get(STATS_URL, &Headers::new()).await,
            Err(HttpError::Other(_))
        ));

        http.set_default_response(MockResponse::status(404, "Not Found"));
        let response = http.get(STATS_URL, &Headers::new()).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(http.request_count(), 2);
    }

    #[tokio::test]
    async fn test_exact_stub_beats_fallback() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(500, "boom"));
        http.set_response(STATS_URL, MockResponse::status(200, "ok"));

        let response = http.get(STATS_URL, &Headers::new()).await.unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_delay_holds_answer_back() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(200, ""));
        http.set_delay(STATS_URL, Duration::from_millis(40));

        let started = std::time::Instant::now();
        http.get(STATS_URL, &Headers::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_clones_share_recordings() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(serde_json::json!({})));

        http.clone().get(STATS_URL, &Headers::new()).await.unwrap();
        assert_eq!(http.request_count(), 1);
    }
}
