//! Session store trait abstraction.
//!
//! The dashboard reads the bearer token through this trait and clears it on
//! logout. It is injected into the app instead of being reached globally.

/// Session store errors.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// Failed to read the session
    LoadFailed(String),
    /// Failed to persist the session
    SaveFailed(String),
    /// Failed to remove the session
    ClearFailed(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::LoadFailed(msg) => write!(f, "Failed to load session: {}", msg),
            SessionError::SaveFailed(msg) => write!(f, "Failed to save session: {}", msg),
            SessionError::ClearFailed(msg) => write!(f, "Failed to clear session: {}", msg),
            SessionError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

/// Storage for the session token.
///
/// Operations are synchronous: logout is an immediate UI action and the
/// backing store is a small local file.
pub trait SessionStore: Send + Sync {
    /// Return the stored token, if any.
    fn current_token(&self) -> Result<Option<String>, SessionError>;

    /// Persist a new token, replacing any previous one.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}
