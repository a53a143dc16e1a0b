//! Wire protocol for the roster backend.
//!
//! This crate defines the "language" that the client and the backend speak:
//!
//! - **Types** ([`Player`], [`Role`], [`Settings`], [`Status`], ids):
//!   the records the backend stores and returns.
//! - **Forms** ([`PlayerForm`], [`RoleForm`], [`SettingsUpdate`],
//!   [`Credentials`]): the payloads the client sends.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how those values are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bytes) and the client
//! (typed calls). It doesn't know about URLs or sessions; it only knows
//! how to serialize and deserialize the records.
//!
//! ```text
//! Transport (bytes) → Protocol (Player, Role, ...) → Client (CRUD calls)
//! ```

mod codec;
mod error;
mod forms;
mod models;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use forms::{
    Credentials, DEFAULT_ROLE_COLOR, ErrorBody, LoginResponse, MessageBody,
    PlayerForm, RoleForm, SettingsUpdate,
};
pub use models::{Player, Role, SETTINGS_ID, Settings};
pub use types::{PlayerId, RoleId, Status};
