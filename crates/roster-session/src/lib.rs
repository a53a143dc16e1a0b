//! Admin session management for the roster client.
//!
//! This crate handles the lifecycle of an admin login:
//!
//! 1. **Authentication**: exchanging email/password for a bearer token
//!    ([`Authenticator`] trait)
//! 2. **Persistence**: keeping that token in client-local storage
//!    ([`TokenStore`] trait, [`FileTokenStore`], [`MemoryTokenStore`])
//! 3. **Session tracking**: knowing whether we're logged in
//!    ([`SessionManager`], [`SessionState`])
//!
//! There is no expiry check: holding a token means "logged in" until the
//! admin logs out.
//!
//! # How it fits in the stack
//!
//! ```text
//! Console (above)  ← asks for the bearer token before every mutation
//!     ↕
//! Session Layer (this crate)  ← owns the token and its storage
//!     ↕
//! Protocol Layer (below)  ← provides Credentials and the JSON codec
//! ```

#![allow(async_fn_in_trait)]

mod auth;
mod error;
mod manager;
mod store;

pub use auth::{AccessToken, Authenticator};
pub use error::SessionError;
pub use manager::{SessionManager, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, STORAGE_KEY, TokenStore};
