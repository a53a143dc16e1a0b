//! Identity types and the membership status.
//!
//! The backend hands out opaque string ids (UUIDs in practice). We never
//! parse them; we only compare them and put them back into URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player, assigned by the backend.
///
/// Newtype wrapper so a `RoleId` can't be passed where a `PlayerId` is
/// expected. `#[serde(transparent)]` keeps the JSON a plain string.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A unique identifier for a role, assigned by the backend.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl RoleId {
    /// Returns `true` for the empty id a fresh player form starts with.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// A player's membership state.
///
/// The wire values are the Portuguese words the backend stores:
/// `"ativo"`, `"pendente"`, `"inativo"`. Anything else fails to decode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Active member.
    Ativo,
    /// Waiting for approval. New players start here.
    #[default]
    Pendente,
    /// No longer active.
    Inativo,
}

impl Status {
    /// Every status, in display priority order.
    pub const ALL: [Status; 3] =
        [Status::Ativo, Status::Pendente, Status::Inativo];

    /// Sort key for the roster: active first, inactive last.
    pub fn priority(self) -> u8 {
        match self {
            Self::Ativo => 1,
            Self::Pendente => 2,
            Self::Inativo => 3,
        }
    }

    /// The value used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ativo => "ativo",
            Self::Pendente => "pendente",
            Self::Inativo => "inativo",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProtocolError::UnknownStatus(s.to_string()))
    }
}

// =========================================================================
// Tests
// =========================================================================
