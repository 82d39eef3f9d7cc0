//! Client for the university endpoints of the exam-management API.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::FetchError;
use crate::models::{ExamStats, University};
use crate::traits::{Headers, HttpClient, SessionStore};

/// University profile endpoint.
pub const PROFILE_PATH: &str = "/university/profile";

/// Aggregate exam statistics endpoint.
pub const EXAM_STATS_PATH: &str = "/university/exam/stats";

/// Issues authenticated GET requests against the backend.
///
/// The bearer token is read from the session store on every request, so a
/// token saved or cleared mid-session takes effect immediately.
#[derive(Clone)]
pub struct DashboardApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
    session: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for DashboardApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DashboardApi {
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /university/profile
    pub async fn fetch_profile(&self) -> Result<University, FetchError> {
        self.get_json(PROFILE_PATH).await
    }

    /// GET /university/exam/stats
    pub async fn fetch_exam_stats(&self) -> Result<ExamStats, FetchError> {
        self.get_json(EXAM_STATS_PATH).await
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        match self.session.current_token() {
            Ok(Some(token)) => {
                headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Could not read session token: {}", e),
        }
        headers
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url, &self.headers())
            .await
            .map_err(|e| FetchError::transport(path, &e))?;

        if !response.is_success() {
            return Err(FetchError::status(path, response.status, &response.text_lossy()));
        }

        response.json().map_err(|e| FetchError::malformed(path, &e))
    }
}
