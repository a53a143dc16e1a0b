//! Client configuration: where the backend lives and where the admin
//! token is kept.

use std::path::PathBuf;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "ROSTER_BACKEND_URL";

/// Environment variable overriding the token file path.
pub const TOKEN_FILE_ENV: &str = "ROSTER_TOKEN_FILE";

/// Backend used when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Every endpoint lives under this path on the backend.
pub const API_PATH: &str = "/api";

/// Configuration for the roster client.
///
/// Start from `ClientConfig::default()` or [`from_env`](Self::from_env),
/// then override the fields you care about (the CLI does this with its
/// `--backend-url` and `--token-file` flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api` suffix.
    ///
    /// Default: `http://localhost:8000`.
    pub backend_url: String,

    /// File holding the admin token between runs.
    ///
    /// Default: `<home>/.roster/session.json`.
    pub token_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            token_file: default_token_file(),
        }
    }
}

impl ClientConfig {
    /// Reads `ROSTER_BACKEND_URL` and `ROSTER_TOKEN_FILE` from the process
    /// environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), with a custom lookup. Blank
    /// values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };

        let mut config = Self::default();
        if let Some(url) = read(BACKEND_URL_ENV) {
            config.backend_url = url;
        }
        if let Some(path) = read(TOKEN_FILE_ENV) {
            config.token_file = PathBuf::from(path);
        }
        config
    }

    /// The URL every API path is relative to: `{backend_url}/api`.
    pub fn api_root(&self) -> String {
        format!("{}{API_PATH}", self.backend_url.trim_end_matches('/'))
    }
}

/// `<home>/.roster/session.json`, or `.roster/session.json` in the current
/// directory when there is no home directory.
fn default_token_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roster")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.api_root(), "http://localhost:8000/api");
        assert!(config.token_file.ends_with(".roster/session.json"));
    }

    #[test]
    fn test_from_lookup_reads_both_variables() {
        let config = ClientConfig::from_lookup(|key| match key {
            BACKEND_URL_ENV => Some("https://mc.example.com".into()),
            TOKEN_FILE_ENV => Some("/tmp/roster-token.json".into()),
            _ => None,
        });

        assert_eq!(config.backend_url, "https://mc.example.com");
        assert_eq!(config.token_file, PathBuf::from("/tmp/roster-token.json"));
    }

    #[test]
    fn test_from_lookup_blank_values_use_defaults() {
        let config = ClientConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_api_root_trims_trailing_slash() {
        let config = ClientConfig {
            backend_url: "https://mc.example.com/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.api_root(), "https://mc.example.com/api");
    }
}
