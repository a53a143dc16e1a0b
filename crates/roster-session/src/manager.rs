//! The session manager: owns the admin token and its storage.
//!
//! The lifecycle has exactly two states:
//!
//! ```text
//!   LoggedOut ──(login ok)──→ LoggedIn
//!       ↑                        │
//!       └────────(logout)────────┘
//! ```
//!
//! A failed login never leaves `LoggedOut`. A failed request made WITH the
//! token never leaves `LoggedIn`; only `logout` does.

use std::fmt;

use roster_protocol::Credentials;

use crate::{AccessToken, Authenticator, SessionError, TokenStore};

/// Whether the admin console is unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "logged out"),
            Self::LoggedIn => write!(f, "logged in"),
        }
    }
}

/// Tracks the admin session and keeps the token store in sync.
pub struct SessionManager<S: TokenStore> {
    store: S,
    /// In-memory copy of the stored token. `Some` means logged in.
    token: Option<AccessToken>,
}

impl<S: TokenStore> SessionManager<S> {
    /// Creates a manager, restoring any token the store already holds.
    ///
    /// # Errors
    /// Propagates storage errors (the token file can't be read).
    pub fn new(store: S) -> Result<Self, SessionError> {
        let token = store.load()?;
        if token.is_some() {
            tracing::info!("restored admin session from storage");
        }
        Ok(Self { store, token })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.token.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    /// Shorthand for `state() == LoggedIn`.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// The current token, if logged in.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// The current token, or [`SessionError::NotLoggedIn`].
    pub fn require_token(&self) -> Result<&AccessToken, SessionError> {
        self.token.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Logs in with the given credentials.
    ///
    /// On success the token is persisted and the session becomes
    /// `LoggedIn`. On ANY authentication failure the caller gets the
    /// generic [`SessionError::InvalidCredentials`]; the real reason is
    /// only logged.
    ///
    /// # Errors
    /// - [`SessionError::InvalidCredentials`]: rejected or unreachable
    /// - [`SessionError::Storage`]: accepted, but the token couldn't be saved
    pub async fn login<A: Authenticator>(
        &mut self,
        auth: &A,
        credentials: &Credentials,
    ) -> Result<&AccessToken, SessionError> {
        let token = match auth.authenticate(credentials).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(
                    email = %credentials.email,
                    error = %e,
                    "login rejected"
                );
                return Err(SessionError::InvalidCredentials);
            }
        };

        self.store.save(&token)?;
        tracing::info!(email = %credentials.email, "admin logged in");
        let token: &AccessToken = self.token.insert(token);
        Ok(token)
    }

    /// Logs out: clears the store, then forgets the token.
    ///
    /// If the store can't be cleared the session stays `LoggedIn`, so
    /// memory and storage never disagree. Logging out while logged out is
    /// a no-op (the store is still cleared, in case something else wrote
    /// to it).
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        let was_logged_in = self.token.take().is_some();
        if was_logged_in {
            tracing::info!("admin logged out");
        }
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionManager`.
    //!
    //! Naming convention: `test_{function}_{scenario}_{expected}`.

    use super::*;
    use crate::MemoryTokenStore;

    // -- Helpers ----------------------------------------------------------

    /// Accepts exactly one email/password pair.
    struct FixedAuth;

    impl Authenticator for FixedAuth {
        async fn authenticate(
            &self,
            credentials: &Credentials,
        ) -> Result<AccessToken, SessionError> {
            if credentials.email == "admin@example.com"
                && credentials.password == "correct"
            {
                Ok(AccessToken::new("token-1"))
            } else {
                Err(SessionError::AuthFailed(
                    "401 Credenciais inválidas".into(),
                ))
            }
        }
    }

    /// Saves fine but can never be cleared.
    #[derive(Clone, Default)]
    struct StuckStore {
        inner: MemoryTokenStore,
    }

    impl TokenStore for StuckStore {
        fn load(&self) -> Result<Option<AccessToken>, SessionError> {
            self.inner.load()
        }

        fn save(&self, token: &AccessToken) -> Result<(), SessionError> {
            self.inner.save(token)
        }

        fn clear(&self) -> Result<(), SessionError> {
            Err(SessionError::Storage {
                path: "stuck.json".into(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                ),
            })
        }
    }

    fn good() -> Credentials {
        Credentials::new("admin@example.com", "correct")
    }

    fn bad() -> Credentials {
        Credentials::new("admin@example.com", "wrong")
    }

    // =====================================================================
    // new()
    // =====================================================================

    #[test]
    fn test_new_empty_store_starts_logged_out() {
        let mgr = SessionManager::new(MemoryTokenStore::new()).unwrap();
        assert_eq!(mgr.state(), SessionState::LoggedOut);
        assert!(mgr.token().is_none());
    }

    #[test]
    fn test_new_with_stored_token_starts_logged_in() {
        // Presence of a token is all it takes; there's no expiry check.
        let store = MemoryTokenStore::with_token(AccessToken::new("old"));
        let mgr = SessionManager::new(store).unwrap();

        assert_eq!(mgr.state(), SessionState::LoggedIn);
        assert_eq!(mgr.token().map(AccessToken::as_str), Some("old"));
    }

    // =====================================================================
    // login()
    // =====================================================================

    #[tokio::test]
    async fn test_login_valid_credentials_stores_token() {
        let store = MemoryTokenStore::new();
        let mut mgr = SessionManager::new(store.clone()).unwrap();

        let token = mgr.login(&FixedAuth, &good()).await.unwrap();
        assert_eq!(token.as_str(), "token-1");

        assert!(mgr.is_logged_in());
        assert_eq!(store.current(), Some(AccessToken::new("token-1")));
    }

    #[tokio::test]
    async fn test_login_invalid_credentials_returns_generic_error() {
        let store = MemoryTokenStore::new();
        let mut mgr = SessionManager::new(store.clone()).unwrap();

        let result = mgr.login(&FixedAuth, &bad()).await;

        assert!(matches!(result, Err(SessionError::InvalidCredentials)));
        assert_eq!(mgr.state(), SessionState::LoggedOut);
        assert!(store.current().is_none(), "nothing should be persisted");
    }

    #[tokio::test]
    async fn test_login_failure_keeps_previous_session() {
        // A failed re-login doesn't throw away a token we already had.
        let store = MemoryTokenStore::with_token(AccessToken::new("old"));
        let mut mgr = SessionManager::new(store).unwrap();

        let _ = mgr.login(&FixedAuth, &bad()).await;

        assert_eq!(mgr.token().map(AccessToken::as_str), Some("old"));
    }

    // =====================================================================
    // logout() / require_token()
    // =====================================================================

    #[tokio::test]
    async fn test_logout_clears_memory_and_store() {
        let store = MemoryTokenStore::new();
        let mut mgr = SessionManager::new(store.clone()).unwrap();
        mgr.login(&FixedAuth, &good()).await.unwrap();

        mgr.logout().unwrap();

        assert_eq!(mgr.state(), SessionState::LoggedOut);
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_logout_store_failure_stays_logged_in() {
        let store = StuckStore::default();
        let mut mgr = SessionManager::new(store.clone()).unwrap();
        mgr.login(&FixedAuth, &good()).await.unwrap();

        let result = mgr.logout();

        assert!(matches!(result, Err(SessionError::Storage { .. })));
        assert_eq!(mgr.state(), SessionState::LoggedIn);
        assert_eq!(store.inner.current(), Some(AccessToken::new("token-1")));
    }

    #[test]
    fn test_logout_when_logged_out_is_noop() {
        let mut mgr = SessionManager::new(MemoryTokenStore::new()).unwrap();
        mgr.logout().expect("logout should never fail on an empty store");
        assert_eq!(mgr.state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_require_token_logged_out_returns_not_logged_in() {
        let mgr = SessionManager::new(MemoryTokenStore::new()).unwrap();
        assert!(matches!(mgr.require_token(), Err(SessionError::NotLoggedIn)));
    }

    #[test]
    fn test_session_state_display() {
        assert_eq!(SessionState::LoggedIn.to_string(), "logged in");
        assert_eq!(SessionState::LoggedOut.to_string(), "logged out");
    }
}
