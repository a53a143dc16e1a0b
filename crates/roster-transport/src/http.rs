//! HTTP transport implementation using `reqwest`.

use crate::{Method, Request, Response, Transport, TransportError};

/// An HTTP-based [`Transport`] rooted at the backend's API prefix.
///
/// `base_url` is the API root (for example `http://localhost:8000/api`);
/// every [`Request::path`] is appended to it verbatim.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the given API root.
    ///
    /// A trailing `/` is stripped so paths can always start with one.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base_url = base_url.trim_end_matches('/');
        reqwest::Url::parse(base_url).map_err(|e| {
            TransportError::InvalidUrl(format!("{base_url}: {e}"))
        })?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(TransportError::RequestFailed)?;

        tracing::debug!(base_url, "HTTP transport ready");
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Returns the API root this transport talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let url = self.url_for(&request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(TransportError::RequestFailed)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(TransportError::ReceiveFailed)?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            "request completed"
        );

        Ok(Response::new(status, body.to_vec()))
    }

    async fn probe(&self, url: &str) -> Result<(), TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::RequestFailed)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Unavailable {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let transport =
            HttpTransport::new("http://localhost:8000/api/").unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000/api");
        assert_eq!(
            transport.url_for("/players"),
            "http://localhost:8000/api/players"
        );
    }

    #[test]
    fn test_new_rejects_garbage_url() {
        let result = HttpTransport::new("not a url");
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }
}
