//! Transport abstraction layer for the roster client.
//!
//! Provides the [`Transport`] trait that abstracts over how a request
//! reaches the backend. The client above this layer only builds
//! [`Request`]s and reads [`Response`]s; it never touches sockets or
//! HTTP libraries directly.
//!
//! # Feature Flags
//!
//! - `http` (default): HTTP transport via `reqwest`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "http")]
mod http;

pub use error::TransportError;
#[cfg(feature = "http")]
pub use http::HttpTransport;

use std::fmt;

/// The HTTP verbs the backend contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single request to the backend.
///
/// `path` is relative to the API root (for example `/players/42`); the
/// transport decides how to turn it into a full URL.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP verb.
    pub method: Method,
    /// Path below the API root, always starting with `/`.
    pub path: String,
    /// Bearer token sent in the `Authorization` header, if any.
    pub bearer: Option<String>,
    /// Encoded JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a request without credentials or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    /// Attaches a bearer token.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    /// Attaches an already-encoded body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

// Hand-written so the bearer token never ends up in logs.
impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("authenticated", &self.bearer.is_some())
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// The backend's answer: a status code and the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body (usually JSON).
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries requests to the backend and brings responses back.
///
/// A non-2xx status is NOT a transport error: the transport delivered the
/// request and got an answer. Only failures to talk to the backend at all
/// (connection refused, broken body) are reported as [`TransportError`].
pub trait Transport: Send + Sync + 'static {
    /// Sends a request and waits for the complete response.
    async fn send(&self, request: Request) -> Result<Response, TransportError>;

    /// Checks that an absolute URL (outside the API root) can be loaded.
    ///
    /// Used for third-party resources such as avatar images.
    async fn probe(&self, url: &str) -> Result<(), TransportError>;
}
