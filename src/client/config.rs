//! Connection settings shared by every call of one client.

use std::time::Duration;

/// Production endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://platform.emaillistchecker.io/api/v1";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Value sent as `User-Agent` on every request.
pub const USER_AGENT: &str = concat!("EmailListChecker-Rust/", env!("CARGO_PKG_VERSION"));

/// Immutable connection configuration.
///
/// Built once by [`EmailListCheckerBuilder`](crate::EmailListCheckerBuilder);
/// the base URL never ends with a slash.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Strip trailing slashes so joined paths never contain `//`.
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
