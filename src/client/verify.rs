//! Single and batch verification.

use crate::client::core::EmailListChecker;
use crate::types::{
    BatchOptions, BatchResults, ResultsFormat, ResultsOptions, VerifyOptions, MAX_BATCH_SIZE,
};
use crate::Result;
use reqwest::Method;
use serde_json::{json, Value};
use std::fmt::Display;

pub(crate) fn verify_body(email: &str, options: &VerifyOptions) -> Value {
    let mut body = json!({
        "email": email,
        "smtp_check": options.smtp_check,
    });
    if let Some(timeout) = options.timeout {
        body["timeout"] = json!(timeout);
    }
    body
}

pub(crate) fn batch_body(emails: &[impl AsRef<str>], options: &BatchOptions) -> Value {
    let emails: Vec<&str> = emails.iter().map(|e| e.as_ref()).collect();
    let mut body = json!({
        "emails": emails,
        "auto_start": options.auto_start,
    });
    if let Some(name) = options.name.as_deref().filter(|s| !s.is_empty()) {
        body["name"] = json!(name);
    }
    if let Some(url) = options.callback_url.as_deref().filter(|s| !s.is_empty()) {
        body["callback_url"] = json!(url);
    }
    body
}

impl EmailListChecker {
    /// Verify a single address (`POST /verify`).
    pub async fn verify(&self, email: &str, options: &VerifyOptions) -> Result<Value> {
        let body = verify_body(email, options);
        self.request(Method::POST, "/verify", Some(&body), None).await
    }

    /// Submit up to [`MAX_BATCH_SIZE`] addresses for verification (`POST /verify/batch`).
    ///
    /// Larger submissions are still sent; the service decides whether to reject them.
    pub async fn verify_batch(
        &self,
        emails: &[impl AsRef<str>],
        options: &BatchOptions,
    ) -> Result<Value> {
        if emails.len() > MAX_BATCH_SIZE {
            tracing::warn!(
                count = emails.len(),
                max = MAX_BATCH_SIZE,
                "batch exceeds the documented maximum size"
            );
        }
        let body = batch_body(emails, options);
        self.request(Method::POST, "/verify/batch", Some(&body), None)
            .await
    }

    /// Progress of a submitted batch (`GET /verify/batch/{id}`).
    pub async fn get_batch_status(&self, batch_id: impl Display) -> Result<Value> {
        let path = format!("/verify/batch/{}", batch_id);
        self.request(Method::GET, &path, None, None).await
    }

    /// Download batch results (`GET /verify/batch/{id}/results`).
    ///
    /// JSON results are unwrapped like every other payload; CSV and text
    /// downloads are returned exactly as received.
    pub async fn get_batch_results(
        &self,
        batch_id: impl Display,
        options: &ResultsOptions,
    ) -> Result<BatchResults> {
        let path = format!("/verify/batch/{}/results", batch_id);
        let query = [
            ("format", options.format.as_str()),
            ("filter", options.filter.as_str()),
        ];
        match options.format {
            ResultsFormat::Json => self
                .request(Method::GET, &path, None, Some(&query[..]))
                .await
                .map(BatchResults::Json),
            ResultsFormat::Csv | ResultsFormat::Txt => self
                .request_raw(Method::GET, &path, None, Some(&query[..]))
                .await
                .map(BatchResults::Raw),
        }
    }
}
