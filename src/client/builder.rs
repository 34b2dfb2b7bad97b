use crate::client::config::{normalize_base_url, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::client::core::EmailListChecker;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use keyring::Entry;
use std::env;
use std::time::Duration;

pub const ENV_API_KEY: &str = "EMAILLISTCHECKER_API_KEY";
pub const ENV_BASE_URL: &str = "EMAILLISTCHECKER_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "EMAILLISTCHECKER_TIMEOUT_MS";

const KEYRING_SERVICE: &str = "emaillistchecker";
const KEYRING_USER: &str = "default";

/// Timeouts are reported in whole milliseconds.
const MIN_TIMEOUT: Duration = Duration::from_millis(1);

/// Builder for [`EmailListChecker`].
///
/// Unset fields fall back to the environment, then to the built-in defaults.
/// The API key is additionally looked up in the OS keyring before the
/// environment.
#[derive(Default)]
pub struct EmailListCheckerBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl EmailListCheckerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API endpoint (mock servers, staging).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout_ms(self, ms: u64) -> Self {
        self.timeout(Duration::from_millis(ms))
    }

    pub fn build(self) -> Result<EmailListChecker> {
        let config = self.into_config()?;
        let transport = HttpTransport::new(&config)?;
        tracing::debug!(
            base_url = config.base_url(),
            timeout_ms = config.timeout().as_millis() as u64,
            "emaillistchecker client configured"
        );
        Ok(EmailListChecker::from_parts(config, transport))
    }

    fn into_config(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .or_else(Self::stored_api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::generic(format!("API key required ({})", ENV_API_KEY)))?;

        let base_url = self
            .base_url
            .or_else(|| env::var(ENV_BASE_URL).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url);
        url::Url::parse(&base_url)
            .map_err(|e| Error::generic(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let timeout = self
            .timeout
            .or_else(|| {
                env::var(ENV_TIMEOUT_MS)
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_millis)
            })
            .unwrap_or(DEFAULT_TIMEOUT);
        if timeout < MIN_TIMEOUT {
            return Err(Error::generic("Timeout must be at least 1ms"));
        }

        Ok(ClientConfig {
            api_key,
            base_url,
            timeout,
        })
    }

    fn stored_api_key() -> Option<String> {
        // 1. Try Keyring
        if let Ok(entry) = Entry::new(KEYRING_SERVICE, KEYRING_USER) {
            if let Ok(key) = entry.get_password() {
                return Some(key);
            }
        }

        // 2. Try Environment Variable
        env::var(ENV_API_KEY).ok()
    }
}
