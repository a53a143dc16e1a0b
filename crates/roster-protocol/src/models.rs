//! Records returned by the backend.

use serde::{Deserialize, Serialize};

use crate::{PlayerId, RoleId, Status};

/// The fixed id of the settings singleton.
pub const SETTINGS_ID: &str = "settings";

/// A roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Minecraft account name; also the key for the avatar service.
    pub minecraft_username: String,
    /// The role this player belongs to. May dangle after a role is deleted.
    pub role_id: RoleId,
    pub status: Status,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 timestamp assigned by the backend.
    #[serde(default)]
    pub created_at: String,
}

/// A named rank with a display color and sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    /// Hex color such as `#9333EA`. Not validated.
    pub color: String,
    /// Display order; lower comes first. Not unique.
    pub order: i64,
    #[serde(default)]
    pub created_at: String,
}

/// Site-wide singleton configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_settings_id")]
    pub id: String,
    /// Where the public "contact us" button points. Empty hides the button.
    #[serde(default)]
    pub contact_link: String,
}

fn default_settings_id() -> String {
    SETTINGS_ID.to_string()
}

impl Settings {
    /// Returns the contact link as stored, or `None` when it is empty.
    pub fn contact(&self) -> Option<&str> {
        (!self.contact_link.is_empty()).then_some(self.contact_link.as_str())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: default_settings_id(),
            contact_link: String::new(),
        }
    }
}
