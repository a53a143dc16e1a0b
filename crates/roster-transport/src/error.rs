/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The configured backend URL could not be parsed.
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),

    /// Sending the request failed (connection refused, DNS, TLS...).
    #[cfg(feature = "http")]
    #[error("request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The response body could not be read.
    #[cfg(feature = "http")]
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] reqwest::Error),

    /// A probed resource answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Unavailable { url: String, status: u16 },

    /// The peer went away before answering.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),
}
