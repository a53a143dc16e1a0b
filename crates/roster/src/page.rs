//! The public roster page.

use futures_util::future::join_all;
use roster_protocol::{Codec, JsonCodec, Settings};
use roster_transport::Transport;
use roster_view::{Roster, ViewState, render_roster};

use crate::{ApiClient, RosterError};

/// What the page shows once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterData {
    pub roster: Roster,
    pub settings: Settings,
}

/// State and actions of the public surface.
///
/// Starts in `Loading`; the first successful [`load`](Self::load) moves it
/// to `Loaded`. A failed load keeps whatever was there.
pub struct RosterPage<T: Transport, C: Codec = JsonCodec> {
    client: ApiClient<T, C>,
    state: ViewState<RosterData>,
}

impl<T: Transport, C: Codec> RosterPage<T, C> {
    pub fn new(client: ApiClient<T, C>) -> Self {
        Self {
            client,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<RosterData> {
        &self.state
    }

    pub fn roster(&self) -> Option<&Roster> {
        self.state.data().map(|data| &data.roster)
    }

    /// The contact link, when one is loaded and non-empty.
    pub fn contact(&self) -> Option<&str> {
        self.state.data().and_then(|data| data.settings.contact())
    }

    /// Fetches everything (unauthenticated) and rebuilds the roster.
    pub async fn load(&mut self) -> Result<(), RosterError> {
        match self.client.fetch_all().await {
            Ok(snapshot) => {
                let roster = Roster::from_snapshot(&snapshot);
                self.state.load(RosterData {
                    roster,
                    settings: snapshot.settings,
                });
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    state = %self.state,
                    "failed to load roster"
                );
                Err(e)
            }
        }
    }

    /// Tries every avatar at once and swaps unreachable ones for the
    /// default head. Never fails; does nothing before the first load.
    pub async fn check_avatars(&mut self) {
        let ViewState::Loaded(data) = &mut self.state else {
            return;
        };

        let urls: Vec<String> = data
            .roster
            .groups()
            .iter()
            .flat_map(|group| group.cards())
            .map(|card| card.avatar().url())
            .collect();
        let transport = self.client.transport();
        let probes = urls.iter().map(|url| transport.probe(url));
        let outcomes = join_all(probes).await;

        let mut fallbacks = 0usize;
        for (card, outcome) in data.roster.cards_mut().zip(outcomes) {
            if outcome.is_err() {
                fallbacks += 1;
            }
            card.set_avatar_outcome(outcome);
        }
        tracing::debug!(checked = urls.len(), fallbacks, "avatars checked");
    }

    /// The page as plain text.
    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => "Loading...\n".to_string(),
            ViewState::Loaded(data) => {
                render_roster(&data.roster, data.settings.contact())
            }
        }
    }
}
