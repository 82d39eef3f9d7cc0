//! File-based session store.
//!
//! The session is a small JSON document, by default at
//! `~/.examdesk/session.json`:
//!
//! ```json
//! { "token": "eyJhbGciOi...", "saved_at": 1760000000 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::{SessionError, SessionStore};

/// Key under which the token is persisted.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Persisted session document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Unix timestamp of the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<i64>,
}

/// [`SessionStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole session document. A missing file is an empty session.
    pub fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let file = File::open(&self.path).map_err(|e| SessionError::LoadFailed(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SessionError::Serialization(e.to_string()))
    }

    fn write(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SessionError::SaveFailed(e.to_string()))?;
            }
        }

        let file =
            File::create(&self.path).map_err(|e| SessionError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| SessionError::SaveFailed(e.to_string()))?;

        restrict_permissions(&self.path);
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        tracing::warn!("Could not restrict session file permissions: {}", e);
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}

impl SessionStore for FileSessionStore {
    fn current_token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.token.filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let session = Session {
            token: Some(token.to_string()),
            saved_at: Some(chrono::Utc::now().timestamp()),
        };
        self.write(&session)
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::ClearFailed(e.to_string())),
        }
    }
}
