//! Payloads the client sends, and the small envelopes the backend answers
//! with outside of the main records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Player, Role, RoleId, Status};

/// Color a brand-new role form starts with.
pub const DEFAULT_ROLE_COLOR: &str = "#8B5CF6";

// ---------------------------------------------------------------------------
// Player form
// ---------------------------------------------------------------------------

/// Body of `POST /players` and `PUT /players/{id}`.
///
/// The default is the blank "new player" form: no username, no role,
/// status `pendente`, empty description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerForm {
    pub minecraft_username: String,
    pub role_id: RoleId,
    pub status: Status,
    #[serde(default)]
    pub description: String,
}

/// Pre-fills the edit form from an existing player.
impl From<&Player> for PlayerForm {
    fn from(player: &Player) -> Self {
        Self {
            minecraft_username: player.minecraft_username.clone(),
            role_id: player.role_id.clone(),
            status: player.status,
            description: player.description.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Role form
// ---------------------------------------------------------------------------

/// Body of `POST /roles` and `PUT /roles/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleForm {
    pub name: String,
    pub color: String,
    pub order: i64,
}

impl RoleForm {
    /// The blank "new role" form, placed after the `existing` roles.
    pub fn next_after(existing: usize) -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_ROLE_COLOR.to_string(),
            order: existing as i64 + 1,
        }
    }
}

/// Pre-fills the edit form from an existing role.
impl From<&Role> for RoleForm {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            color: role.color.clone(),
            order: role.order,
        }
    }
}

// ---------------------------------------------------------------------------
// Settings, auth, and small envelopes
// ---------------------------------------------------------------------------

/// Body of `PUT /settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub contact_link: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful answer to `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Error body the backend sends with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Acknowledgement returned by the delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
