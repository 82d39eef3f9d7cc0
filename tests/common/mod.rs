//! Common test utilities for integration tests.
//!
//! Fixtures for the two dashboard endpoints, app builders wired to either a
//! wiremock server or the in-memory mocks, and a helper that waits for both
//! dashboard fetches to finish.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use examdesk::adapters::{FileSessionStore, InMemorySession, MockHttpClient, ReqwestHttpClient};
use examdesk::app::App;
use examdesk::config::DashboardConfig;
use examdesk::traits::SessionStore;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-access-token-12345";

/// Profile body from the reference scenario.
pub fn alpha_profile() -> Value {
    json!({"universityName": "Alpha U", "universityEmail": "a@x.edu"})
}

/// Stats body from the reference scenario.
pub fn alpha_stats() -> Value {
    json!({"totalExams": 5, "studentsAssigned": 40, "studentsAttended": 38})
}

/// App talking to `base_url` over real HTTP with the given session.
pub fn http_app(base_url: &str, session: Arc<dyn SessionStore>) -> App {
    let config = DashboardConfig::default().with_api_base_url(base_url);
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(5))
        .expect("client should build");
    App::new(&config, Arc::new(http), session)
}

/// App backed by the in-memory HTTP mock and a logged-in session.
pub fn mock_app(http: &MockHttpClient) -> App {
    App::new(
        &DashboardConfig::default().with_api_base_url("http://api.test"),
        Arc::new(http.clone()),
        Arc::new(InMemorySession::with_token(TEST_TOKEN)),
    )
}

/// File session in a temp dir, already holding [`TEST_TOKEN`].
pub fn logged_in_file_session() -> (tempfile::TempDir, FileSessionStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path().join("session.json"));
    store.save(TEST_TOKEN).expect("save token");
    (dir, store)
}

/// Apply background messages until neither fetch is in flight.
pub async fn settle(app: &mut App) {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            app.drain_messages();
            if !app.dashboard.is_loading() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("dashboard fetches did not finish");
}
