//! Presentation logic for the roster.
//!
//! Everything here is pure: it takes the records fetched from the backend
//! and decides what the surfaces show. No I/O, no async.
//!
//! # Key types
//!
//! - [`Roster`]: players grouped by role, sorted by status
//! - [`PlayerCard`]: one player as shown on the public page
//! - [`Avatar`]: avatar URLs with the default-image fallback
//! - [`PlayerRow`]: one player as shown in the admin listing
//! - [`ViewState`]: the `Loading → Loaded` state machine
//! - [`Snapshot`]: the three collections fetched together

mod avatar;
mod directory;
mod render;
mod roster;
mod state;
mod status;

pub use avatar::{
    AVATAR_SERVICE, Avatar, FALLBACK_USERNAME, LISTING_AVATAR_SIZE,
    ROSTER_AVATAR_SIZE,
};
pub use directory::{MISSING_ROLE_LABEL, PlayerRow, player_rows, role_label};
pub use render::{render_player_rows, render_roles, render_roster};
pub use roster::{PlayerCard, Roster, RosterGroup};
pub use state::{Snapshot, ViewState};
pub use status::{status_color, status_label};
