//! The admin listing: every player, with the role resolved by id.
//!
//! Unlike the public roster nothing is hidden here. A player whose role was
//! deleted still shows up, labelled [`MISSING_ROLE_LABEL`].

use roster_protocol::{Player, Role, RoleId};

use crate::{Avatar, LISTING_AVATAR_SIZE, status_color, status_label};

/// Shown in place of a role name when the player's role doesn't exist.
pub const MISSING_ROLE_LABEL: &str = "N/A";

/// One line of the admin listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub player: Player,
    /// The role name, or [`MISSING_ROLE_LABEL`].
    pub role_name: String,
    /// The role's color; `None` when the role is missing.
    pub role_color: Option<String>,
    pub avatar: Avatar,
}

impl PlayerRow {
    pub fn status_label(&self) -> &'static str {
        status_label(self.player.status)
    }

    pub fn status_color(&self) -> &'static str {
        status_color(self.player.status)
    }
}

/// The name to show for `role_id`, or [`MISSING_ROLE_LABEL`].
pub fn role_label<'a>(roles: &'a [Role], role_id: &RoleId) -> &'a str {
    roles
        .iter()
        .find(|role| &role.id == role_id)
        .map_or(MISSING_ROLE_LABEL, |role| role.name.as_str())
}

/// Builds the admin listing, keeping the backend's player order.
pub fn player_rows(players: &[Player], roles: &[Role]) -> Vec<PlayerRow> {
    players
        .iter()
        .map(|player| {
            let role = roles.iter().find(|role| role.id == player.role_id);
            PlayerRow {
                player: player.clone(),
                role_name: role.map_or_else(
                    || MISSING_ROLE_LABEL.to_string(),
                    |r| r.name.clone(),
                ),
                role_color: role.map(|r| r.color.clone()),
                avatar: Avatar::new(
                    player.minecraft_username.clone(),
                    LISTING_AVATAR_SIZE,
                ),
            }
        })
        .collect()
}
