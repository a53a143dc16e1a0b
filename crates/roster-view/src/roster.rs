//! Grouping players by role for the public roster.
//!
//! The rules:
//!
//! 1. Roles are shown in ascending `order` (ties keep the backend's order).
//! 2. A role with no players is not shown at all.
//! 3. Inside a role, players are sorted `ativo` → `pendente` → `inativo`;
//!    players with the same status keep the backend's order.
//! 4. A player whose role doesn't exist (e.g. the role was deleted) is in
//!    no group.

use std::fmt::Display;

use roster_protocol::{Player, Role, RoleId, Status};

use crate::{Avatar, ROSTER_AVATAR_SIZE, Snapshot, status_color, status_label};

// ---------------------------------------------------------------------------
// PlayerCard
// ---------------------------------------------------------------------------

/// One player as shown on the public roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    player: Player,
    avatar: Avatar,
    /// The image actually shown. Starts as the player's own head and may be
    /// swapped for the fallback once loading is attempted.
    avatar_src: String,
}

impl PlayerCard {
    pub fn new(player: Player) -> Self {
        let avatar =
            Avatar::new(player.minecraft_username.clone(), ROSTER_AVATAR_SIZE);
        let avatar_src = avatar.url();
        Self {
            player,
            avatar,
            avatar_src,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    /// The image URL to display.
    pub fn avatar_src(&self) -> &str {
        &self.avatar_src
    }

    pub fn status(&self) -> Status {
        self.player.status
    }

    pub fn status_label(&self) -> &'static str {
        status_label(self.player.status)
    }

    pub fn status_color(&self) -> &'static str {
        status_color(self.player.status)
    }

    /// Records how loading the avatar went; a failure switches to the
    /// default head.
    pub fn set_avatar_outcome<E: Display>(&mut self, outcome: Result<(), E>) {
        self.avatar_src = self.avatar.resolve(outcome);
    }
}

// ---------------------------------------------------------------------------
// RosterGroup / Roster
// ---------------------------------------------------------------------------

/// A role and its (non-empty, status-sorted) members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterGroup {
    role: Role,
    cards: Vec<PlayerCard>,
}

impl RosterGroup {
    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn cards(&self) -> &[PlayerCard] {
        &self.cards
    }

    /// Usernames in display order. Handy for assertions and logs.
    pub fn usernames(&self) -> Vec<&str> {
        self.cards
            .iter()
            .map(|card| card.player.minecraft_username.as_str())
            .collect()
    }
}

/// The public roster: players grouped by role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    groups: Vec<RosterGroup>,
}

impl Roster {
    /// Groups `players` under `roles` following the rules in the module docs.
    pub fn build(players: &[Player], roles: &[Role]) -> Self {
        let mut ordered: Vec<&Role> = roles.iter().collect();
        // `sort_by_key` is stable, so equal orders keep the backend's order.
        ordered.sort_by_key(|role| role.order);

        let groups: Vec<RosterGroup> = ordered
            .into_iter()
            .filter_map(|role| {
                let mut members: Vec<&Player> = players
                    .iter()
                    .filter(|player| player.role_id == role.id)
                    .collect();
                if members.is_empty() {
                    return None;
                }
                members.sort_by_key(|player| player.status.priority());

                Some(RosterGroup {
                    role: role.clone(),
                    cards: members
                        .into_iter()
                        .cloned()
                        .map(PlayerCard::new)
                        .collect(),
                })
            })
            .collect();

        tracing::debug!(
            roles = roles.len(),
            players = players.len(),
            groups = groups.len(),
            "roster built"
        );
        Self { groups }
    }

    /// Same as [`build`](Self::build), from a fetched snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::build(&snapshot.players, &snapshot.roles)
    }

    pub fn groups(&self) -> &[RosterGroup] {
        &self.groups
    }

    /// The group for a role, if that role has any players.
    pub fn group(&self, role_id: &RoleId) -> Option<&RosterGroup> {
        self.groups.iter().find(|group| &group.role.id == role_id)
    }

    /// Returns `true` when no role has players.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of players shown across all groups.
    pub fn player_count(&self) -> usize {
        self.groups.iter().map(|group| group.cards.len()).sum()
    }

    /// Every card, for updating avatar outcomes.
    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut PlayerCard> {
        self.groups.iter_mut().flat_map(|group| group.cards.iter_mut())
    }
}

// =========================================================================
// Tests
// =========================================================================
