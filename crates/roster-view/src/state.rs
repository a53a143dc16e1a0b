//! The data a surface shows, and the state machine around it.

use roster_protocol::{Player, Role, Settings};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The three collections, fetched together.
///
/// Both surfaces always refresh all three at once; there are no partial
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub roles: Vec<Role>,
    pub settings: Settings,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// The lifecycle state of a surface.
///
/// ```text
/// Loading ──(first successful fetch)──→ Loaded(data)
///                                          │
///                                    (later fetch)
///                                          ↓
///                                   Loaded(new data)
/// ```
///
/// There is no error or retry state: a failed fetch leaves the view where
/// it was (still `Loading`, or `Loaded` with stale data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
}

impl<T> ViewState<T> {
    /// Returns `true` once data has arrived.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The loaded data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Loaded(data) => Some(data),
        }
    }

    /// Replaces whatever was shown with fresh data.
    pub fn load(&mut self, data: T) {
        *self = Self::Loaded(data);
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> std::fmt::Display for ViewState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Loaded(_) => write!(f, "Loaded"),
        }
    }
}
