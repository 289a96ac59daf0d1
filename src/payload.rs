//! Permissive field extraction from untrusted payloads
//!
//! Inbound payloads come from the gateway or from the issuing bank's ACS,
//! neither of which this crate controls. Lookups here therefore never fail:
//! a missing or mistyped field resolves to `None` and partial data stays
//! usable.

use serde_json::Value;

/// Extract a string field, or `None` if absent, null, or not a string.
pub(crate) fn string_field(data: &Value, key: &str) -> Option<String> {
    match data.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Extract a raw field value, or `None` if absent or null.
pub(crate) fn value_field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|value| !value.is_null())
}
