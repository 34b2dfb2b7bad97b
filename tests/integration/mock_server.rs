//! Mock HTTP server setup for integration tests

use emaillistchecker::EmailListChecker;
use mockito::{Mock, Server, ServerGuard};

pub const API_KEY: &str = "test-api-key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server
    pub fn client(&self) -> EmailListChecker {
        EmailListChecker::builder()
            .api_key(API_KEY)
            .base_url(&self.base_url)
            .timeout_ms(5_000)
            .build()
            .expect("client should build")
    }

    /// JSON response for `method path` with the given status
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
