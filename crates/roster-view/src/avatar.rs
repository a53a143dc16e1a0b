//! Player avatars from the third-party head-render service.

use std::fmt::Display;

/// Base URL of the avatar service, keyed by Minecraft username.
pub const AVATAR_SERVICE: &str = "https://mc-heads.net/avatar";

/// Username whose head is shown when a player's avatar can't be loaded.
pub const FALLBACK_USERNAME: &str = "Steve";

/// Avatar size on the public roster, in pixels.
pub const ROSTER_AVATAR_SIZE: u32 = 100;

/// Avatar size in the admin listing, in pixels.
pub const LISTING_AVATAR_SIZE: u32 = 80;

/// A player's avatar at a given size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    username: String,
    size: u32,
}

impl Avatar {
    pub fn new(username: impl Into<String>, size: u32) -> Self {
        Self {
            username: username.into(),
            size,
        }
    }

    /// Where the player's own head lives.
    pub fn url(&self) -> String {
        format!(
            "{AVATAR_SERVICE}/{}/{}",
            urlencoding::encode(&self.username),
            self.size
        )
    }

    /// The default head, same size.
    pub fn fallback_url(&self) -> String {
        format!("{AVATAR_SERVICE}/{FALLBACK_USERNAME}/{}", self.size)
    }

    /// Picks the image to show given the outcome of loading [`url`](Self::url).
    ///
    /// A failed load is never an error for the page, it just swaps in the
    /// default head.
    pub fn resolve<E: Display>(&self, outcome: Result<(), E>) -> String {
        match outcome {
            Ok(()) => self.url(),
            Err(e) => {
                tracing::debug!(
                    username = %self.username,
                    error = %e,
                    "avatar failed to load, using fallback"
                );
                self.fallback_url()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_keyed_by_username_and_size() {
        let avatar = Avatar::new("Notch", ROSTER_AVATAR_SIZE);
        assert_eq!(avatar.url(), "https://mc-heads.net/avatar/Notch/100");
    }

    #[test]
    fn test_fallback_url_uses_default_head_at_same_size() {
        let avatar = Avatar::new("Notch", LISTING_AVATAR_SIZE);
        assert_eq!(
            avatar.fallback_url(),
            "https://mc-heads.net/avatar/Steve/80"
        );
    }

    #[test]
    fn test_url_escapes_unsafe_usernames() {
        let avatar = Avatar::new("a b/c", 100);
        assert_eq!(avatar.url(), "https://mc-heads.net/avatar/a%20b%2Fc/100");
    }

    #[test]
    fn test_resolve_ok_keeps_player_head() {
        let avatar = Avatar::new("Alex", 100);
        assert_eq!(avatar.resolve::<&str>(Ok(())), avatar.url());
    }

    #[test]
    fn test_resolve_error_falls_back() {
        let avatar = Avatar::new("Alex", 100);
        assert_eq!(avatar.resolve(Err("404")), avatar.fallback_url());
    }
}
