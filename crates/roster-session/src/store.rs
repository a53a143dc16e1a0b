//! Client-local token storage.
//!
//! The admin token has to survive between runs of the CLI, the same way a
//! browser keeps it in local storage. [`FileTokenStore`] keeps it in a small
//! JSON file; [`MemoryTokenStore`] keeps it in memory for tests and
//! one-shot embedding.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use roster_protocol::{Codec, JsonCodec};
use serde::{Deserialize, Serialize};

use crate::{AccessToken, SessionError};

/// The key the token is stored under.
pub const STORAGE_KEY: &str = "admin_token";

/// Somewhere to keep the admin token between runs.
///
/// Access is synchronous: the store is tiny and only touched on login,
/// logout, and start-up.
pub trait TokenStore: Send + Sync + 'static {
    /// Returns the stored token, or `None` if there isn't one.
    fn load(&self) -> Result<Option<AccessToken>, SessionError>;

    /// Replaces the stored token.
    fn save(&self, token: &AccessToken) -> Result<(), SessionError>;

    /// Removes the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

// ---------------------------------------------------------------------------
// MemoryTokenStore
// ---------------------------------------------------------------------------

/// An in-memory [`TokenStore`].
///
/// Clones share the same slot, so a test can keep one handle and give the
/// other to a `SessionManager`.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<AccessToken>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a token.
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token))),
        }
    }

    /// Returns a copy of the stored token.
    pub fn current(&self) -> Option<AccessToken> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<AccessToken>> {
        // A poisoned slot still holds a valid Option.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<AccessToken>, SessionError> {
        Ok(self.current())
    }

    fn save(&self, token: &AccessToken) -> Result<(), SessionError> {
        *self.lock() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.lock() = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileTokenStore
// ---------------------------------------------------------------------------

/// On-disk shape of the token file: `{"admin_token": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default)]
    admin_token: Option<String>,
}

/// A [`TokenStore`] backed by a JSON file.
///
/// A missing or undecodable file means "no token". Clearing deletes the
/// file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store for the given file. Nothing is touched on disk
    /// until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Storage {
            path: self.path.clone(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<AccessToken>, SessionError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.storage_error(e)),
        };

        // An undecodable file holds no usable token. The next save
        // overwrites it.
        let stored: StoredSession = match JsonCodec.decode(&bytes) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring corrupt token file"
                );
                return Ok(None);
            }
        };
        Ok(stored
            .admin_token
            .filter(|token| !token.is_empty())
            .map(AccessToken::new))
    }

    fn save(&self, token: &AccessToken) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
            }
        }

        let stored = StoredSession {
            admin_token: Some(token.as_str().to_string()),
        };
        let bytes = JsonCodec.encode(&stored)?;
        fs::write(&self.path, bytes).map_err(|e| self.storage_error(e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|e| self.storage_error(e))?;
        }

        tracing::debug!(path = %self.path.display(), "token saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "token removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> AccessToken {
        AccessToken::new(s)
    }

    // =====================================================================
    // MemoryTokenStore
    // =====================================================================

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_then_load_returns_token() {
        let store = MemoryTokenStore::new();
        store.save(&token("abc")).unwrap();
        assert_eq!(store.load().unwrap(), Some(token("abc")));
    }

    #[test]
    fn test_memory_store_clones_share_the_slot() {
        let store = MemoryTokenStore::new();
        let observer = store.clone();

        store.save(&token("abc")).unwrap();
        assert_eq!(observer.current(), Some(token("abc")));

        store.clear().unwrap();
        assert!(observer.current().is_none());
    }

    // =====================================================================
    // FileTokenStore
    // =====================================================================

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_save_creates_parent_dirs_and_writes_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let store = FileTokenStore::new(&path);

        store.save(&token("tok-1")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(
            raw.contains(STORAGE_KEY),
            "file should use the storage key: {raw}"
        );
        assert_eq!(store.load().unwrap(), Some(token("tok-1")));
    }

    #[test]
    fn test_file_store_clear_removes_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileTokenStore::new(&path);
        store.save(&token("tok-1")).unwrap();

        store.clear().unwrap();
        assert!(!path.exists());

        // Clearing again is fine.
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_empty_token_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"admin_token":""}"#).unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_garbage_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.load().unwrap().is_none());

        // The bad file can still be cleared.
        store.clear().unwrap();
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        FileTokenStore::new(&path).save(&token("tok")).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
