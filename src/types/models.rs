//! Typed views of documented response payloads.
//!
//! Operations return `serde_json::Value`; these structs are an opt-in,
//! lenient decoding layer. Unknown fields are ignored and missing ones
//! default, since the service schema is not under this crate's control.
//! An explicit `null` is treated like a missing field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an operation payload into one of the model types.
pub fn decode<T: DeserializeOwned>(payload: Value) -> crate::Result<T> {
    serde_json::from_value(payload)
        .map_err(|e| crate::Error::generic(format!("Failed to decode payload: {}", e)))
}

/// Result of a single verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationResult {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// `deliverable`, `undeliverable`, `risky` or `unknown`.
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
    pub reason: Option<String>,
    pub score: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub disposable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub role: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub free: bool,
    pub smtp_provider: Option<String>,
    pub domain: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub mx_records: Vec<String>,
}

impl VerificationResult {
    pub fn is_deliverable(&self) -> bool {
        self.result == "deliverable"
    }
}

/// Submission receipt and progress of a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchStatus {
    pub id: Value,
    pub name: Option<String>,
    /// e.g. `pending`, `processing`, `completed`, `failed`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub progress: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_emails: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub processed_emails: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub valid_emails: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub invalid_emails: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unknown_emails: u64,
}

impl BatchStatus {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }

    /// Whether polling can stop.
    pub fn is_finished(&self) -> bool {
        self.is_completed() || self.is_failed()
    }
}

/// One row of JSON batch results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResultEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
    pub reason: Option<String>,
}

/// Outcome of a name + domain lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundEmail {
    pub email: Option<String>,
    pub confidence: Option<f64>,
    pub pattern: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub alternatives: Vec<String>,
}

/// An address discovered by a domain or company search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveredEmail {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub domain: Option<String>,
    pub last_verified: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSearch {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_found: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub patterns: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub emails: Vec<DiscoveredEmail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySearch {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_found: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub possible_domains: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub emails: Vec<DiscoveredEmail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    #[serde(deserialize_with = "null_as_default")]
    pub balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub used_this_month: f64,
    pub plan: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    #[serde(deserialize_with = "null_as_default")]
    pub total_requests: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub successful_requests: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub failed_requests: u64,
}

impl Usage {
    /// Percentage of successful requests, `None` before the first request.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_requests == 0 {
            return None;
        }
        Some(self.successful_requests as f64 / self.total_requests as f64 * 100.0)
    }
}
