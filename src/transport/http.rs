use crate::client::config::{ClientConfig, USER_AGENT};
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

/// A completed HTTP exchange, before any status interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub retry_after: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin wrapper over a configured `reqwest::Client`.
///
/// Every request carries the bearer credential, JSON content negotiation
/// headers and the client `User-Agent`. The configured timeout bounds the
/// whole exchange, body included.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|_| Error::generic("API key contains characters not allowed in a header"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::generic(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            timeout: config.timeout(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Send one request and collect the response, whatever its status.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<RawResponse> {
        let url = self.url_for(path);
        let mut request = self.client.request(method, &url);

        if let Some(params) = query {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_string());
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::generic(format!(
                "Request timeout after {}ms",
                self.timeout.as_millis()
            ))
        } else {
            Error::generic(format!("Request failed: {}", e))
        }
    }
}
