//! Plain-text rendering for terminals.
//!
//! Colors are printed as their hex values next to the label; the terminal
//! front end doesn't try to paint them.

use std::fmt::Write;

use roster_protocol::Role;

use crate::{PlayerRow, Roster};

/// Renders the public roster, with the contact call-to-action when a
/// contact link is set.
///
/// ```
/// use roster_view::{Roster, render_roster};
///
/// let text = render_roster(&Roster::default(), None);
/// assert!(text.contains("No players yet."));
/// assert!(!text.contains("Contact"));
/// ```
pub fn render_roster(roster: &Roster, contact: Option<&str>) -> String {
    let mut out = String::new();

    // `write!` into a String never fails.
    let _ = writeln!(out, "Our Team");
    let _ = writeln!(out, "========");

    if roster.is_empty() {
        let _ = writeln!(out, "\nNo players yet.");
    }

    for group in roster.groups() {
        let role = group.role();
        let _ = writeln!(out, "\n{} ({})", role.name, role.color);
        for card in group.cards() {
            let player = card.player();
            let _ = writeln!(
                out,
                "  - {} [{} {}]",
                player.minecraft_username,
                card.status_label(),
                card.status_color()
            );
            if !player.description.is_empty() {
                let _ = writeln!(out, "      {}", player.description);
            }
            let _ = writeln!(out, "      avatar: {}", card.avatar_src());
        }
    }

    if let Some(link) = contact {
        let _ = writeln!(out, "\nContact us: {link}");
    }
    out
}

/// Renders the admin player listing: a summary line per player, then its
/// description (when set) and avatar URL.
pub fn render_player_rows(rows: &[PlayerRow]) -> String {
    if rows.is_empty() {
        return "No players.\n".to_string();
    }

    let mut out = String::new();
    for row in rows {
        let color = row.role_color.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{}  {}  role: {} ({})  status: {}",
            row.player.id,
            row.player.minecraft_username,
            row.role_name,
            color,
            row.status_label()
        );
        if !row.player.description.is_empty() {
            let _ = writeln!(out, "    {}", row.player.description);
        }
        let _ = writeln!(out, "    avatar: {}", row.avatar.url());
    }
    out
}

/// Renders the admin role listing, in the order given.
pub fn render_roles(roles: &[Role]) -> String {
    if roles.is_empty() {
        return "No roles.\n".to_string();
    }

    let mut out = String::new();
    for role in roles {
        let _ = writeln!(
            out,
            "{}  {}  color: {}  order: {}",
            role.id, role.name, role.color, role.order
        );
    }
    out
}
