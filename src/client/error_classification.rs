//! Mapping of non-2xx responses onto [`Error`] variants.

use crate::transport::RawResponse;
use crate::{Error, ErrorContext};
use serde_json::Value;

/// Wait suggested to callers when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Parse `Retry-After` as whole seconds; HTTP-date and garbage fall back to the default.
pub(crate) fn retry_after_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Decode an error body; non-JSON text is kept verbatim as a string.
pub(crate) fn decode_error_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}

/// Human-readable text from `field` of an error body, if present.
fn body_field(body: Option<&Value>, field: &str) -> Option<String> {
    match body?.get(field)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Build the single error variant for a failed response.
///
/// Only the status code selects the variant; the body contributes the message
/// and is attached as `raw_body`.
pub(crate) fn classify(response: &RawResponse) -> Error {
    let status = response.status;
    let raw_body = decode_error_body(&response.body);
    let message_from = |field: &str, default: String| {
        body_field(raw_body.as_ref(), field).unwrap_or(default)
    };

    match status {
        401 => {
            let message = message_from("error", "Invalid API key".to_string());
            Error::Authentication {
                message,
                context: ErrorContext::new()
                    .with_status_code(status)
                    .with_raw_body(raw_body),
            }
        }
        402 => {
            let message = message_from("error", "Insufficient credits".to_string());
            Error::InsufficientCredits {
                message,
                context: ErrorContext::new()
                    .with_status_code(status)
                    .with_raw_body(raw_body),
            }
        }
        422 => {
            let message = message_from("message", "Validation error".to_string());
            Error::Validation {
                message,
                context: ErrorContext::new()
                    .with_status_code(status)
                    .with_raw_body(raw_body),
            }
        }
        429 => {
            let retry_after_secs = retry_after_secs(response.retry_after.as_deref());
            Error::RateLimit {
                message: format!(
                    "Rate limit exceeded. Retry after {} seconds",
                    retry_after_secs
                ),
                retry_after_secs,
                context: ErrorContext::new()
                    .with_status_code(status)
                    .with_raw_body(raw_body),
            }
        }
        _ => {
            let message = message_from("error", format!("API error: {}", status));
            Error::Api {
                message,
                context: ErrorContext::new()
                    .with_status_code(status)
                    .with_raw_body(raw_body),
            }
        }
    }
}
