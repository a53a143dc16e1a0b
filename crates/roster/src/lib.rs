//! # Roster
//!
//! Public roster and admin console client for a community game-server
//! website.
//!
//! The backend stores **players**, **roles** and a single **settings**
//! record. This crate talks to it over HTTP and provides the two surfaces
//! that sit on top:
//!
//! - [`RosterPage`]: the public page, players grouped by role and sorted
//!   by status, with avatars and a contact link
//! - [`AdminConsole`]: login, CRUD for players and roles, and the
//!   contact-link editor
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster::prelude::*;
//!
//! # async fn run() -> Result<(), RosterError> {
//! let config = ClientConfig::from_env();
//! let transport = HttpTransport::new(&config.api_root())?;
//!
//! let mut page = RosterPage::new(ApiClient::new(transport));
//! page.load().await?;
//! print!("{}", page.render());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod confirm;
mod console;
mod error;
mod notice;
mod page;

pub use client::ApiClient;
pub use config::{
    API_PATH, BACKEND_URL_ENV, ClientConfig, DEFAULT_BACKEND_URL,
    TOKEN_FILE_ENV,
};
pub use confirm::{AssumeYes, Confirm, Prompt};
pub use console::AdminConsole;
pub use error::RosterError;
pub use notice::{Notice, NoticeLevel};
pub use page::{RosterData, RosterPage};

/// Everything needed to drive both surfaces.
pub mod prelude {
    pub use crate::{
        AdminConsole, ApiClient, AssumeYes, ClientConfig, Confirm, Notice,
        NoticeLevel, Prompt, RosterData, RosterError, RosterPage,
    };
    pub use roster_protocol::{
        Credentials, JsonCodec, Player, PlayerForm, PlayerId, Role, RoleForm,
        RoleId, Settings, Status,
    };
    pub use roster_session::{
        AccessToken, FileTokenStore, MemoryTokenStore, SessionError,
        SessionManager, SessionState, TokenStore,
    };
    pub use roster_transport::{
        HttpTransport, Method, Request, Response, Transport, TransportError,
    };
    pub use roster_view::{PlayerRow, Roster, Snapshot, ViewState};
}
