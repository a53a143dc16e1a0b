//! Authentication hook for obtaining an admin token.
//!
//! The session layer doesn't know how to talk to the backend. It defines
//! the [`Authenticator`] trait, a single async method that turns
//! credentials into a bearer token, and the API client implements it.
//! Tests plug in a fake authenticator instead.

use std::fmt;

use roster_protocol::Credentials;

use crate::SessionError;

/// An opaque bearer token issued by the backend.
///
/// The token is never printed by `Debug`, so it can't leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization: Bearer` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Exchanges admin credentials for a bearer token.
///
/// # Example
///
/// ```rust
/// use roster_protocol::Credentials;
/// use roster_session::{AccessToken, Authenticator, SessionError};
///
/// /// Accepts a single hard-coded account. Only for tests!
/// struct FixedAuthenticator;
///
/// impl Authenticator for FixedAuthenticator {
///     async fn authenticate(
///         &self,
///         credentials: &Credentials,
///     ) -> Result<AccessToken, SessionError> {
///         if credentials.email == "admin@example.com"
///             && credentials.password == "pw"
///         {
///             Ok(AccessToken::new("token-1"))
///         } else {
///             Err(SessionError::AuthFailed("unknown account".into()))
///         }
///     }
/// }
/// ```
pub trait Authenticator {
    /// Validates the credentials and returns a fresh token.
    ///
    /// # Returns
    /// - `Ok(AccessToken)`: login accepted
    /// - `Err(SessionError::AuthFailed)`: rejected, or the backend was
    ///   unreachable
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, SessionError>;
}
