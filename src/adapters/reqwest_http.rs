//! [`HttpClient`] over `reqwest`.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Transport used by the binary. The timeout comes from the config.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    fn classify(err: reqwest::Error) -> HttpError {
        let msg = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(msg)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(msg)
        } else if err.is_builder() {
            HttpError::InvalidUrl(msg)
        } else {
            HttpError::Other(msg)
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |req, (name, value)| req.header(name, value));

        let response = request.send().await.map_err(Self::classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::classify)?;

        Ok(Response::new(status, body))
    }
}
