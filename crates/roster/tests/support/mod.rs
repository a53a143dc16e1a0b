//! An in-memory stand-in for the roster backend.
//!
//! Implements [`Transport`] by routing requests to a small in-memory store
//! that answers the way the real backend does: JSON bodies, `{"detail"}`
//! errors, bearer tokens on mutations, no cascade when a role is deleted.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use roster::prelude::*;
use roster_protocol::{MessageBody, SettingsUpdate};
use serde::Serialize;

pub const ADMIN_EMAIL: &str = "admin@heasymc.com";
pub const ADMIN_PASSWORD: &str = "correct-horse";

#[derive(Default)]
struct State {
    players: Vec<Player>,
    roles: Vec<Role>,
    settings: Settings,
    next_id: u64,
    tokens: Vec<String>,
    /// Usernames whose avatar fails to load.
    broken_avatars: Vec<String>,
    /// When set, `GET /roles` answers 500.
    roles_down: bool,
    /// When set, every request fails at the transport level.
    offline: bool,
    log: Vec<String>,
}

/// Clones share the same store, so a test can keep a handle for
/// assertions while the client owns another.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    // -- Seeding ----------------------------------------------------------

    pub fn add_role(&self, name: &str, color: &str, order: i64) -> RoleId {
        let mut state = self.lock();
        let id = RoleId(state.issue_id("role"));
        state.roles.push(Role {
            id: id.clone(),
            name: name.into(),
            color: color.into(),
            order,
            created_at: "2025-01-01T00:00:00+00:00".into(),
        });
        id
    }

    pub fn add_player(
        &self,
        username: &str,
        role_id: &RoleId,
        status: Status,
    ) -> PlayerId {
        let mut state = self.lock();
        let id = PlayerId(state.issue_id("player"));
        state.players.push(Player {
            id: id.clone(),
            minecraft_username: username.into(),
            role_id: role_id.clone(),
            status,
            description: String::new(),
            created_at: "2025-01-01T00:00:00+00:00".into(),
        });
        id
    }

    pub fn set_contact_link(&self, link: &str) {
        self.lock().settings.contact_link = link.into();
    }

    pub fn break_avatar(&self, username: &str) {
        self.lock().broken_avatars.push(username.into());
    }

    pub fn set_roles_down(&self, down: bool) {
        self.lock().roles_down = down;
    }

    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Forgets every issued token, as if the backend restarted with a new
    /// signing key.
    pub fn revoke_tokens(&self) {
        self.lock().tokens.clear();
    }

    // -- Inspection -------------------------------------------------------

    pub fn players(&self) -> Vec<Player> {
        self.lock().players.clone()
    }

    pub fn roles(&self) -> Vec<Role> {
        self.lock().roles.clone()
    }

    /// Every request seen so far, as `"METHOD /path"`.
    pub fn requests(&self) -> Vec<String> {
        self.lock().log.clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.lock()
            .log
            .iter()
            .filter(|line| !line.starts_with("GET "))
            .count()
    }
}

impl State {
    fn issue_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn authorized(&self, request: &Request) -> bool {
        request
            .bearer
            .as_ref()
            .is_some_and(|token| self.tokens.contains(token))
    }

    fn route(&mut self, request: &Request) -> Response {
        let path = request.path.trim_start_matches('/').to_string();
        let segments: Vec<&str> = path.split('/').collect();

        let needs_auth = request.method != Method::Get
            && segments != ["auth", "login"];
        if needs_auth && !self.authorized(request) {
            return detail(401, "Invalid authentication credentials");
        }

        match (request.method, segments.as_slice()) {
            (Method::Post, ["auth", "login"]) => {
                let Some(credentials) = parse::<Credentials>(request) else {
                    return detail(422, "invalid body");
                };
                if credentials.email != ADMIN_EMAIL
                    || credentials.password != ADMIN_PASSWORD
                {
                    return detail(401, "Invalid credentials");
                }
                let token = format!("token-{}", self.tokens.len() + 1);
                self.tokens.push(token.clone());
                json(
                    200,
                    &serde_json::json!({
                        "access_token": token,
                        "token_type": "bearer",
                    }),
                )
            }

            // -- players --
            (Method::Get, ["players"]) => json(200, &self.players),
            (Method::Post, ["players"]) => {
                let Some(form) = parse::<PlayerForm>(request) else {
                    return detail(422, "invalid body");
                };
                let player = Player {
                    id: PlayerId(self.issue_id("player")),
                    minecraft_username: form.minecraft_username,
                    role_id: form.role_id,
                    status: form.status,
                    description: form.description,
                    created_at: "2025-06-01T12:00:00+00:00".into(),
                };
                self.players.push(player.clone());
                json(200, &player)
            }
            (Method::Put, ["players", id]) => {
                let Some(form) = parse::<PlayerForm>(request) else {
                    return detail(422, "invalid body");
                };
                match self.players.iter_mut().find(|p| p.id.0 == *id) {
                    Some(player) => {
                        player.minecraft_username = form.minecraft_username;
                        player.role_id = form.role_id;
                        player.status = form.status;
                        player.description = form.description;
                        json(200, &*player)
                    }
                    None => detail(404, "Player not found"),
                }
            }
            (Method::Delete, ["players", id]) => {
                let before = self.players.len();
                self.players.retain(|p| p.id.0 != *id);
                if self.players.len() == before {
                    detail(404, "Player not found")
                } else {
                    json(200, &MessageBody { message: "Player deleted".into() })
                }
            }

            // -- roles --
            (Method::Get, ["roles"]) if self.roles_down => {
                detail(500, "database unavailable")
            }
            (Method::Get, ["roles"]) => {
                let mut roles = self.roles.clone();
                roles.sort_by_key(|role| role.order);
                json(200, &roles)
            }
            (Method::Post, ["roles"]) => {
                let Some(form) = parse::<RoleForm>(request) else {
                    return detail(422, "invalid body");
                };
                let role = Role {
                    id: RoleId(self.issue_id("role")),
                    name: form.name,
                    color: form.color,
                    order: form.order,
                    created_at: "2025-06-01T12:00:00+00:00".into(),
                };
                self.roles.push(role.clone());
                json(200, &role)
            }
            (Method::Put, ["roles", id]) => {
                let Some(form) = parse::<RoleForm>(request) else {
                    return detail(422, "invalid body");
                };
                match self.roles.iter_mut().find(|r| r.id.0 == *id) {
                    Some(role) => {
                        role.name = form.name;
                        role.color = form.color;
                        role.order = form.order;
                        json(200, &*role)
                    }
                    None => detail(404, "Role not found"),
                }
            }
            (Method::Delete, ["roles", id]) => {
                let before = self.roles.len();
                self.roles.retain(|r| r.id.0 != *id);
                if self.roles.len() == before {
                    detail(404, "Role not found")
                } else {
                    json(200, &MessageBody { message: "Role deleted".into() })
                }
            }

            // -- settings --
            (Method::Get, ["settings"]) => json(200, &self.settings),
            (Method::Put, ["settings"]) => {
                let Some(update) = parse::<SettingsUpdate>(request) else {
                    return detail(422, "invalid body");
                };
                self.settings.contact_link = update.contact_link;
                json(200, &self.settings)
            }

            _ => detail(404, "Not Found"),
        }
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let mut state = self.lock();
        state.log.push(format!("{} {}", request.method, request.path));
        if state.offline {
            return Err(TransportError::ConnectionClosed(
                "backend offline".into(),
            ));
        }
        Ok(state.route(&request))
    }

    async fn probe(&self, url: &str) -> Result<(), TransportError> {
        let state = self.lock();
        let broken = state
            .broken_avatars
            .iter()
            .any(|name| url.contains(&format!("/{name}/")));
        if broken {
            Err(TransportError::Unavailable {
                url: url.to_string(),
                status: 404,
            })
        } else {
            Ok(())
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(request: &Request) -> Option<T> {
    serde_json::from_slice(request.body.as_deref()?).ok()
}

fn json<T: Serialize + ?Sized>(status: u16, value: &T) -> Response {
    Response::new(status, serde_json::to_vec(value).unwrap())
}

fn detail(status: u16, message: &str) -> Response {
    json(status, &serde_json::json!({ "detail": message }))
}

// -- Client helpers -------------------------------------------------------

pub fn client(backend: &FakeBackend) -> ApiClient<FakeBackend> {
    ApiClient::new(backend.clone())
}

pub fn admin_credentials() -> Credentials {
    Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD)
}

/// A console over `backend`, logged out, with an in-memory token store.
pub fn console(
    backend: &FakeBackend,
) -> AdminConsole<FakeBackend, MemoryTokenStore> {
    let session = SessionManager::new(MemoryTokenStore::new()).unwrap();
    AdminConsole::new(client(backend), session)
}

/// A console over `backend`, already logged in.
pub async fn logged_in_console(
    backend: &FakeBackend,
) -> AdminConsole<FakeBackend, MemoryTokenStore> {
    let mut console = console(backend);
    console.login(&admin_credentials()).await.unwrap();
    console.take_notices();
    console
}
