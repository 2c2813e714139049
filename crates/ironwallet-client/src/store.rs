//! Credential storage backends
//!
//! A [`CredentialStore`] persists the session pair (bearer credential and
//! profile snapshot) so it survives restarts. Two backends are provided:
//!
//! - [`MemoryCredentialStore`] for tests and ephemeral sessions
//! - [`FileCredentialStore`] for the shell, persisting the two keys `token`
//!   and `user` in a single JSON document
//!
//! Backends only move bytes; lifecycle and locking live in
//! [`SessionContext`](crate::SessionContext).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ironwallet_types::{ProfileSummary, Session};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Storage error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("credential file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credential file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode credentials: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Trait for credential storage backends.
///
/// `save` replaces both halves of the pair; `clear` removes both and succeeds
/// when nothing is stored.
pub trait CredentialStore: Send + Sync {
    /// Read the stored session, `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<Session>, StoreError>;

    /// Persist a session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove the stored session.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory credential store.
///
/// Does NOT persist across restarts.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    session: Mutex<Option<Session>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a session
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.session.lock().clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.session.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.session.lock().take();
        Ok(())
    }
}

/// On-disk layout: the same two keys a browser client keeps in local storage.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
    user: Option<ProfileSummary>,
}

/// File-based credential store.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// reader never observes a token without its profile. On Unix the file is
/// created with mode `0600`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Default location: `<config dir>/ironwallet/session.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ironwallet")
            .join("session.json")
    }

    /// Create a store backed by the given file. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_atomically(&self, contents: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&tmp_path).map_err(|e| self.io_error(e))?;
        file.write_all(contents).map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredSession =
            serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        // A half-written pair is treated as no session at all.
        match (stored.token, stored.user) {
            (Some(token), Some(user)) if !token.is_empty() => Ok(Some(Session::new(token, user))),
            _ => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let stored = StoredSession {
            token: Some(session.token.clone()),
            user: Some(session.user.clone()),
        };
        let contents = serde_json::to_vec_pretty(&stored)?;
        self.write_atomically(&contents)
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
