//! Credits, usage and list management.

use crate::client::core::EmailListChecker;
use crate::Result;
use reqwest::Method;
use serde_json::Value;
use std::fmt::Display;

impl EmailListChecker {
    /// Current credit balance (`GET /credits`).
    pub async fn get_credits(&self) -> Result<Value> {
        self.request(Method::GET, "/credits", None, None).await
    }

    /// API usage statistics (`GET /usage`).
    pub async fn get_usage(&self) -> Result<Value> {
        self.request(Method::GET, "/usage", None, None).await
    }

    /// All verification lists (`GET /lists`).
    pub async fn get_lists(&self) -> Result<Value> {
        self.request(Method::GET, "/lists", None, None).await
    }

    /// Delete a verification list (`DELETE /lists/{id}`).
    pub async fn delete_list(&self, list_id: impl Display) -> Result<Value> {
        let path = format!("/lists/{}", list_id);
        self.request(Method::DELETE, &path, None, None).await
    }
}
