//! Error types for the session layer.

use std::path::PathBuf;

use roster_protocol::ProtocolError;

/// Errors that can occur during session management.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The [`Authenticator`](crate::Authenticator) rejected the login.
    /// Carries the low-level reason for logs; never shown to the user.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// What the user sees after any failed login, whatever the cause.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An operation needs a bearer token but nobody is logged in.
    #[error("not logged in")]
    NotLoggedIn,

    /// Reading or writing the token file failed.
    #[error("token storage failed at {path}: {source}", path = .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token couldn't be encoded for storage.
    #[error("token encoding failed: {0}")]
    Corrupt(#[from] ProtocolError),
}
