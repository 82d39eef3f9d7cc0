//! In-memory session store for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{SessionError, SessionStore};

/// [`SessionStore`] holding the token in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    token: Arc<Mutex<Option<String>>>,
    clear_should_fail: Arc<Mutex<bool>>,
    clear_calls: Arc<Mutex<usize>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        *session.token.lock().unwrap() = Some(token.to_string());
        session
    }

    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) -> usize {
        *self.clear_calls.lock().unwrap()
    }
}

impl SessionStore for InMemorySession {
    fn current_token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.clear_calls.lock().unwrap() += 1;
        if *self.clear_should_fail.lock().unwrap() {
            return Err(SessionError::ClearFailed("Mock clear failure".to_string()));
        }
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token_and_clear() {
        let session = InMemorySession::with_token("abc");
        assert_eq!(session.current_token().unwrap(), Some("abc".to_string()));

        session.clear().unwrap();
        assert_eq!(session.token(), None);
        assert_eq!(session.clear_calls(), 1);
    }

    #[test]
    fn test_clear_failure_keeps_token() {
        let session = InMemorySession::with_token("abc");
        session.set_clear_should_fail(true);

        assert!(session.clear().is_err());
        assert_eq!(session.token(), Some("abc".to_string()));
    }
}
