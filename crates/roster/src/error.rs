//! Unified error type for the roster client.

use roster_protocol::ProtocolError;
use roster_session::SessionError;
use roster_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `roster` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Couldn't reach the backend at all.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A body couldn't be encoded, or the backend's answer couldn't be
    /// decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Login, logout, or token storage went wrong.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The backend answered with a non-2xx status.
    ///
    /// `detail` is the `{"detail": ...}` message when the body has one,
    /// otherwise the raw body.
    #[error("backend answered {status}: {detail}")]
    Api { status: u16, detail: String },

    /// An id that isn't in the locally loaded data.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Reading input from the terminal failed.
    #[error("terminal input failed: {0}")]
    Io(#[from] std::io::Error),
}
