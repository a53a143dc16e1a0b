//! The admin console: login, CRUD for players and roles, and the settings
//! editor.
//!
//! Every action follows the same pattern:
//!
//! 1. call the backend (with the bearer token for mutations)
//! 2. push a [`Notice`] saying how it went
//! 3. after a successful mutation, re-fetch players, roles and settings
//!
//! Errors are still returned so callers (the CLI) can pick an exit code,
//! but they never change the login state. Only [`logout`](AdminConsole::logout)
//! does that.

use roster_protocol::{
    Codec, Credentials, JsonCodec, Player, PlayerForm, PlayerId, Role,
    RoleForm, RoleId, Settings, SettingsUpdate,
};
use roster_session::{
    AccessToken, SessionError, SessionManager, SessionState, TokenStore,
};
use roster_transport::Transport;
use roster_view::{PlayerRow, Snapshot, player_rows};

use crate::{ApiClient, Confirm, Notice, RosterError};

const DELETE_PLAYER_PROMPT: &str =
    "Are you sure you want to delete this player?";
const DELETE_ROLE_PROMPT: &str = "Are you sure you want to delete this role?";

/// State and actions of the admin surface.
pub struct AdminConsole<T: Transport, S: TokenStore, C: Codec = JsonCodec> {
    client: ApiClient<T, C>,
    session: SessionManager<S>,
    data: Snapshot,
    notices: Vec<Notice>,
}

impl<T: Transport, S: TokenStore, C: Codec> AdminConsole<T, S, C> {
    /// Creates a console. If the session was restored logged in, call
    /// [`refresh`](Self::refresh) to load the data.
    pub fn new(client: ApiClient<T, C>, session: SessionManager<S>) -> Self {
        Self {
            client,
            session,
            data: Snapshot::default(),
            notices: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    /// The data from the last successful fetch.
    pub fn snapshot(&self) -> &Snapshot {
        &self.data
    }

    pub fn players(&self) -> &[Player] {
        &self.data.players
    }

    pub fn roles(&self) -> &[Role] {
        &self.data.roles
    }

    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    /// The player listing, with role names resolved (or `N/A`).
    pub fn player_rows(&self) -> Vec<PlayerRow> {
        player_rows(&self.data.players, &self.data.roles)
    }

    /// Hands over the notices produced so far.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Logs in and loads the data.
    ///
    /// Whatever goes wrong with the backend, the user sees
    /// "Invalid credentials" and the console stays logged out.
    pub async fn login(
        &mut self,
        credentials: &Credentials,
    ) -> Result<(), RosterError> {
        match self.session.login(&self.client, credentials).await {
            Ok(_) => {
                self.notices.push(Notice::success("Logged in"));
            }
            Err(SessionError::InvalidCredentials) => {
                self.notices.push(Notice::error("Invalid credentials"));
                return Err(SessionError::InvalidCredentials.into());
            }
            Err(e) => {
                tracing::error!(error = %e, "could not store admin session");
                self.notices.push(Notice::error("Failed to save session"));
                return Err(e.into());
            }
        }

        // A failed fetch is logged inside and doesn't undo the login.
        let _ = self.refresh().await;
        Ok(())
    }

    /// Logs out and forgets the loaded data.
    pub fn logout(&mut self) -> Result<(), RosterError> {
        if let Err(e) = self.session.logout() {
            tracing::error!(error = %e, "could not clear admin session");
            self.notices.push(Notice::error("Failed to log out"));
            return Err(e.into());
        }
        self.data = Snapshot::default();
        self.notices.push(Notice::info("Logged out"));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Data
    // -----------------------------------------------------------------------

    /// Re-fetches players, roles, and settings.
    ///
    /// On failure the error is logged (no notice) and the previous data is
    /// kept.
    pub async fn refresh(&mut self) -> Result<(), RosterError> {
        match self.client.fetch_all().await {
            Ok(snapshot) => {
                self.data = snapshot;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load roster data");
                Err(e)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Forms
    // -----------------------------------------------------------------------

    /// The blank form for a new player.
    pub fn new_player_form(&self) -> PlayerForm {
        PlayerForm::default()
    }

    /// A form pre-filled from a loaded player.
    pub fn edit_player_form(
        &self,
        id: &PlayerId,
    ) -> Result<PlayerForm, RosterError> {
        self.data
            .players
            .iter()
            .find(|player| &player.id == id)
            .map(PlayerForm::from)
            .ok_or_else(|| RosterError::NotFound {
                kind: "player",
                id: id.to_string(),
            })
    }

    /// The blank form for a new role, ordered after the loaded roles.
    pub fn new_role_form(&self) -> RoleForm {
        RoleForm::next_after(self.data.roles.len())
    }

    /// A form pre-filled from a loaded role.
    pub fn edit_role_form(&self, id: &RoleId) -> Result<RoleForm, RosterError> {
        self.data
            .roles
            .iter()
            .find(|role| &role.id == id)
            .map(RoleForm::from)
            .ok_or_else(|| RosterError::NotFound {
                kind: "role",
                id: id.to_string(),
            })
    }

    // -----------------------------------------------------------------------
    // Players
    // -----------------------------------------------------------------------

    pub async fn create_player(
        &mut self,
        form: &PlayerForm,
    ) -> Result<Player, RosterError> {
        let outcome = match self.token() {
            Ok(token) => self.client.create_player(token, form).await,
            Err(e) => Err(e),
        };
        self.finish(outcome, "Player created", "Failed to create player")
            .await
    }

    pub async fn update_player(
        &mut self,
        id: &PlayerId,
        form: &PlayerForm,
    ) -> Result<Player, RosterError> {
        let outcome = match self.token() {
            Ok(token) => self.client.update_player(token, id, form).await,
            Err(e) => Err(e),
        };
        self.finish(outcome, "Player updated", "Failed to update player")
            .await
    }

    /// Deletes a player after `confirm` agrees.
    ///
    /// Returns `Ok(false)` without calling the backend when the user
    /// declines.
    pub async fn delete_player(
        &mut self,
        id: &PlayerId,
        confirm: &mut impl Confirm,
    ) -> Result<bool, RosterError> {
        if !confirm.confirm(DELETE_PLAYER_PROMPT) {
            tracing::debug!(player_id = %id, "player deletion declined");
            return Ok(false);
        }
        let outcome = match self.token() {
            Ok(token) => self.client.delete_player(token, id).await,
            Err(e) => Err(e),
        };
        self.finish(outcome, "Player deleted", "Failed to delete player")
            .await
            .map(|_| true)
    }

    // -----------------------------------------------------------------------
    // Roles
    // -----------------------------------------------------------------------

    pub async fn create_role(
        &mut self,
        form: &RoleForm,
    ) -> Result<Role, RosterError> {
        let outcome = match self.token() {
            Ok(token) => self.client.create_role(token, form).await,
            Err(e) => Err(e),
        };
        self.finish(outcome, "Role created", "Failed to create role")
            .await
    }

    pub async fn update_role(
        &mut self,
        id: &RoleId,
        form: &RoleForm,
    ) -> Result<Role, RosterError> {
        let outcome = match self.token() {
            Ok(token) => self.client.update_role(token, id, form).await,
            Err(e) => Err(e),
        };
        self.finish(outcome, "Role updated", "Failed to update role")
            .await
    }

    /// Deletes a role after `confirm` agrees. Its players are left
    /// pointing at the missing role.
    pub async fn delete_role(
        &mut self,
        id: &RoleId,
        confirm: &mut impl Confirm,
    ) -> Result<bool, RosterError> {
        if !confirm.confirm(DELETE_ROLE_PROMPT) {
            tracing::debug!(role_id = %id, "role deletion declined");
            return Ok(false);
        }
        let outcome = match self.token() {
            Ok(token) => self.client.delete_role(token, id).await,
            Err(e) => Err(e),
        };
        self.finish(outcome, "Role deleted", "Failed to delete role")
            .await
            .map(|_| true)
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Saves the contact link. No URL validation; an empty link hides the
    /// public contact button.
    ///
    /// The local settings are replaced by the backend's answer rather than
    /// re-fetched.
    pub async fn update_settings(
        &mut self,
        contact_link: &str,
    ) -> Result<Settings, RosterError> {
        let update = SettingsUpdate {
            contact_link: contact_link.to_string(),
        };
        let outcome = match self.token() {
            Ok(token) => self.client.update_settings(token, &update).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(settings) => {
                self.data.settings = settings.clone();
                self.notices.push(Notice::success("Settings updated"));
                Ok(settings)
            }
            Err(e) => {
                tracing::warn!(error = %e, "settings update failed");
                self.notices.push(Notice::error("Failed to update settings"));
                Err(e)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn token(&self) -> Result<&AccessToken, RosterError> {
        Ok(self.session.require_token()?)
    }

    /// Turns a mutation's outcome into a notice, and re-fetches on success.
    async fn finish<R>(
        &mut self,
        outcome: Result<R, RosterError>,
        success: &str,
        failure: &str,
    ) -> Result<R, RosterError> {
        match outcome {
            Ok(value) => {
                self.notices.push(Notice::success(success));
                let _ = self.refresh().await;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, "{failure}");
                self.notices.push(Notice::error(failure));
                Err(e)
            }
        }
    }
}
