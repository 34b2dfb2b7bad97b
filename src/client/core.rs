use crate::client::builder::EmailListCheckerBuilder;
use crate::client::config::ClientConfig;
use crate::client::error_classification::classify;
use crate::transport::{HttpTransport, RawResponse};
use crate::utils::unwrap_payload;
use crate::{Error, Result};
use reqwest::Method;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Client for the EmailListChecker API.
///
/// Holds only immutable configuration and a pooled HTTP client, so it can be
/// cloned freely and shared across tasks. Every operation issues exactly one
/// request; nothing is retried.
#[derive(Clone)]
pub struct EmailListChecker {
    config: ClientConfig,
    transport: HttpTransport,
}

impl EmailListChecker {
    /// Client with the default endpoint and a 30 s timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        EmailListCheckerBuilder::new().api_key(api_key).build()
    }

    pub fn builder() -> EmailListCheckerBuilder {
        EmailListCheckerBuilder::new()
    }

    /// Client configured entirely from the keyring/environment.
    pub fn from_env() -> Result<Self> {
        EmailListCheckerBuilder::new().build()
    }

    pub(crate) fn from_parts(config: ClientConfig, transport: HttpTransport) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatch a call and return the decoded payload with the envelope removed.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<Value> {
        let response = self.dispatch(method, path, body, query).await?;
        decode_json(&response.body).map(unwrap_payload)
    }

    /// Dispatch a call and return the successful body text untouched.
    pub async fn request_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<String> {
        let response = self.dispatch(method, path, body, query).await?;
        Ok(response.body)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<RawResponse> {
        let client_request_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        debug!(
            client_request_id = client_request_id.as_str(),
            method = method.as_str(),
            path,
            "emaillistchecker request started"
        );

        let outcome = self
            .transport
            .execute(method.clone(), path, body, query)
            .await
            .and_then(|response| {
                if response.is_success() {
                    Ok(response)
                } else {
                    Err(classify(&response))
                }
            });

        match &outcome {
            Ok(response) => debug!(
                client_request_id = client_request_id.as_str(),
                method = method.as_str(),
                path,
                http_status = response.status,
                duration_ms = start.elapsed().as_millis() as u64,
                "emaillistchecker request completed"
            ),
            Err(err) => info!(
                client_request_id = client_request_id.as_str(),
                method = method.as_str(),
                path,
                http_status = err.status_code().unwrap_or(0),
                error_kind = err.kind().as_str(),
                duration_ms = start.elapsed().as_millis() as u64,
                "emaillistchecker request failed"
            ),
        }

        outcome
    }
}

impl std::fmt::Debug for EmailListChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailListChecker")
            .field("config", &self.config)
            .finish()
    }
}

/// Decode a 2xx body. An empty body (e.g. 204) decodes to `null`.
fn decode_json(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
        .map_err(|e| Error::generic(format!("Failed to decode response body: {}", e)))
}
