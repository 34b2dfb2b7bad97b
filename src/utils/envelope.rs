//! Response envelope handling.
//!
//! Most endpoints wrap their payload as `{"data": ...}`; a few return it bare.

use serde_json::Value;

/// Name of the envelope field holding the payload.
pub const ENVELOPE_FIELD: &str = "data";

/// Return the nested `data` payload when present, otherwise the body itself.
///
/// A `data` field holding `null` counts as absent.
pub fn unwrap_payload(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove(ENVELOPE_FIELD) {
            Some(payload) if !payload.is_null() => payload,
            Some(null) => {
                map.insert(ENVELOPE_FIELD.to_string(), null);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}
