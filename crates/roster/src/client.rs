//! Typed client for the backend's HTTP API.
//!
//! [`ApiClient`] turns each endpoint into one async method. It builds a
//! [`Request`], hands it to the [`Transport`], and decodes the answer with
//! the [`Codec`]. Non-2xx answers become [`RosterError::Api`] carrying the
//! backend's `detail` message.
//!
//! Reads are unauthenticated. Every mutation takes the admin
//! [`AccessToken`] and sends it as `Authorization: Bearer <token>`.

use roster_protocol::{
    Codec, Credentials, ErrorBody, JsonCodec, LoginResponse, MessageBody,
    Player, PlayerForm, PlayerId, Role, RoleForm, RoleId, Settings,
    SettingsUpdate,
};
use roster_session::{AccessToken, Authenticator, SessionError};
use roster_transport::{Method, Request, Transport};
use roster_view::Snapshot;
use serde::{Serialize, de::DeserializeOwned};

use crate::RosterError;

/// Async client for the roster backend.
pub struct ApiClient<T: Transport, C: Codec = JsonCodec> {
    transport: T,
    codec: C,
}

impl<T: Transport> ApiClient<T, JsonCodec> {
    /// Creates a client speaking JSON over `transport`.
    pub fn new(transport: T) -> Self {
        Self::with_codec(transport, JsonCodec)
    }
}

impl<T: Transport, C: Codec> ApiClient<T, C> {
    /// Creates a client with a custom codec.
    pub fn with_codec(transport: T, codec: C) -> Self {
        Self { transport, codec }
    }

    /// The underlying transport (also used for avatar probes).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    /// `POST /auth/login`.
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<LoginResponse, RosterError> {
        let request = Request::new(Method::Post, "/auth/login");
        self.call(self.with_json(request, credentials)?).await
    }

    // -----------------------------------------------------------------------
    // Players
    // -----------------------------------------------------------------------

    /// `GET /players`.
    pub async fn list_players(&self) -> Result<Vec<Player>, RosterError> {
        self.call(Request::new(Method::Get, "/players")).await
    }

    /// `POST /players`.
    pub async fn create_player(
        &self,
        token: &AccessToken,
        form: &PlayerForm,
    ) -> Result<Player, RosterError> {
        let request = Request::new(Method::Post, "/players")
            .with_bearer(token.as_str());
        self.call(self.with_json(request, form)?).await
    }

    /// `PUT /players/{id}`.
    pub async fn update_player(
        &self,
        token: &AccessToken,
        id: &PlayerId,
        form: &PlayerForm,
    ) -> Result<Player, RosterError> {
        let request = Request::new(Method::Put, player_path(id))
            .with_bearer(token.as_str());
        self.call(self.with_json(request, form)?).await
    }

    /// `DELETE /players/{id}`.
    pub async fn delete_player(
        &self,
        token: &AccessToken,
        id: &PlayerId,
    ) -> Result<MessageBody, RosterError> {
        let request = Request::new(Method::Delete, player_path(id))
            .with_bearer(token.as_str());
        self.call(request).await
    }

    // -----------------------------------------------------------------------
    // Roles
    // -----------------------------------------------------------------------

    /// `GET /roles`.
    pub async fn list_roles(&self) -> Result<Vec<Role>, RosterError> {
        self.call(Request::new(Method::Get, "/roles")).await
    }

    /// `POST /roles`.
    pub async fn create_role(
        &self,
        token: &AccessToken,
        form: &RoleForm,
    ) -> Result<Role, RosterError> {
        let request = Request::new(Method::Post, "/roles")
            .with_bearer(token.as_str());
        self.call(self.with_json(request, form)?).await
    }

    /// `PUT /roles/{id}`.
    pub async fn update_role(
        &self,
        token: &AccessToken,
        id: &RoleId,
        form: &RoleForm,
    ) -> Result<Role, RosterError> {
        let request = Request::new(Method::Put, role_path(id))
            .with_bearer(token.as_str());
        self.call(self.with_json(request, form)?).await
    }

    /// `DELETE /roles/{id}`. Players keep pointing at the deleted role.
    pub async fn delete_role(
        &self,
        token: &AccessToken,
        id: &RoleId,
    ) -> Result<MessageBody, RosterError> {
        let request = Request::new(Method::Delete, role_path(id))
            .with_bearer(token.as_str());
        self.call(request).await
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// `GET /settings`.
    pub async fn get_settings(&self) -> Result<Settings, RosterError> {
        self.call(Request::new(Method::Get, "/settings")).await
    }

    /// `PUT /settings`.
    pub async fn update_settings(
        &self,
        token: &AccessToken,
        update: &SettingsUpdate,
    ) -> Result<Settings, RosterError> {
        let request = Request::new(Method::Put, "/settings")
            .with_bearer(token.as_str());
        self.call(self.with_json(request, update)?).await
    }

    // -----------------------------------------------------------------------
    // Bulk fetch
    // -----------------------------------------------------------------------

    /// Fetches players, roles, and settings concurrently.
    ///
    /// All three must succeed; the first failure is returned and the
    /// other results are dropped.
    pub async fn fetch_all(&self) -> Result<Snapshot, RosterError> {
        let (players, roles, settings) = tokio::try_join!(
            self.list_players(),
            self.list_roles(),
            self.get_settings()
        )?;

        tracing::debug!(
            players = players.len(),
            roles = roles.len(),
            "fetched roster data"
        );
        Ok(Snapshot {
            players,
            roles,
            settings,
        })
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    fn with_json<B: Serialize>(
        &self,
        request: Request,
        body: &B,
    ) -> Result<Request, RosterError> {
        Ok(request.with_body(self.codec.encode(body)?))
    }

    /// Sends a request and decodes a 2xx body as `R`.
    async fn call<R: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<R, RosterError> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let detail = match self.codec.decode::<ErrorBody>(&response.body) {
                Ok(body) => body.detail,
                Err(_) => String::from_utf8_lossy(&response.body).into_owned(),
            };
            tracing::debug!(
                %method,
                %path,
                status = response.status,
                %detail,
                "backend rejected request"
            );
            return Err(RosterError::Api {
                status: response.status,
                detail,
            });
        }

        Ok(self.codec.decode(&response.body)?)
    }
}

/// The client doubles as the session layer's authenticator: a login is
/// just `POST /auth/login`.
impl<T: Transport, C: Codec> Authenticator for ApiClient<T, C> {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, SessionError> {
        match self.login(credentials).await {
            Ok(response) => Ok(AccessToken::new(response.access_token)),
            Err(e) => Err(SessionError::AuthFailed(e.to_string())),
        }
    }
}

fn player_path(id: &PlayerId) -> String {
    format!("/players/{}", urlencoding::encode(&id.0))
}

fn role_path(id: &RoleId) -> String {
    format!("/roles/{}", urlencoding::encode(&id.0))
}
