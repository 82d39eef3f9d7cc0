//! Runtime configuration.
//!
//! Values come from defaults, then environment variables, then command-line
//! flags (see [`crate::cli`]).

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::notifications::DEFAULT_TOAST_TTL;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Directory under the home directory holding session and log files.
const APP_DIR: &str = ".examdesk";
const SESSION_FILE: &str = "session.json";
const LOG_FILE: &str = "examdesk.log";

/// Terminal width below which the navigation panel collapses.
pub const DEFAULT_NARROW_WIDTH: u16 = 100;

/// Configuration for the dashboard client.
///
/// # Example
///
/// ```ignore
/// use examdesk::config::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_api_base_url("https://exams.example.edu/api")
///     .with_debug(true);
/// ```
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// Session file override (defaults to ~/.examdesk/session.json)
    pub session_path: Option<PathBuf>,
    /// Log file override (defaults to ~/.examdesk/examdesk.log)
    pub log_path: Option<PathBuf>,
    /// Enable debug-level logging
    pub debug: bool,
    /// Transport timeout applied by the HTTP client
    pub request_timeout: Duration,
    /// Collapse the navigation panel below this width
    pub narrow_width: u16,
    /// Lifetime of non-loading toasts
    pub toast_ttl: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            session_path: None,
            log_path: None,
            debug: false,
            request_timeout: Duration::from_secs(30),
            narrow_width: DEFAULT_NARROW_WIDTH,
            toast_ttl: DEFAULT_TOAST_TTL,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is stripped.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_narrow_width(mut self, width: u16) -> Self {
        self.narrow_width = width;
        self
    }

    pub fn with_toast_ttl(mut self, ttl: Duration) -> Self {
        self.toast_ttl = ttl;
        self
    }

    /// Build config from `EXAMDESK_API_URL`, `EXAMDESK_SESSION_FILE` and
    /// `EXAMDESK_DEBUG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("EXAMDESK_API_URL") {
            if !url.trim().is_empty() {
                config = config.with_api_base_url(url.trim());
            }
        }
        if let Ok(path) = std::env::var("EXAMDESK_SESSION_FILE") {
            if !path.trim().is_empty() {
                config = config.with_session_path(path.trim());
            }
        }
        if std::env::var("EXAMDESK_DEBUG").is_ok() {
            config = config.with_debug(true);
        }

        config
    }

    /// Check values that cannot be enforced by the type system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidApiUrl {
                url: self.api_base_url.clone(),
            });
        }
        Ok(())
    }

    /// Resolved session file path.
    pub fn session_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.session_path {
            Some(path) => Ok(path.clone()),
            None => app_dir().map(|dir| dir.join(SESSION_FILE)),
        }
    }

    /// Resolved log file path.
    pub fn log_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_path {
            Some(path) => Ok(path.clone()),
            None => app_dir().map(|dir| dir.join(LOG_FILE)),
        }
    }
}

fn app_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}
