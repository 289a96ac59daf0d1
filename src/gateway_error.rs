//! Normalized gateway error payloads
//!
//! The gateway returns its documented `code` / `description` / `property`
//! error shape most of the time, but some validation failures still arrive
//! in the legacy `statusCode` / `statusDetail` shape. [`ErrorDetail`]
//! normalizes both into one structure with a documented precedence, so
//! callers never branch on payload shape.
//!
//! Validation failures (HTTP 422) carry several errors at once in an
//! `errors` array; [`ErrorCollection`] parses those. Typical field-level
//! codes include 1003 (missing mandatory field), 1004 (invalid length) and
//! 1009 (contains invalid value); each carries the `property` name of the
//! field that failed.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::{string_field, value_field};

/// A gateway error code, numeric or textual on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    /// Numeric code, e.g. `1004`
    Numeric(i64),
    /// Textual code
    Text(String),
}

impl ErrorCode {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(ErrorCode::Numeric),
            Value::String(s) => Some(ErrorCode::Text(s.clone())),
            _ => None,
        }
    }

    /// The numeric form, if this code is numeric
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ErrorCode::Numeric(n) => Some(*n),
            ErrorCode::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Numeric(n) => write!(f, "{n}"),
            ErrorCode::Text(s) => f.write_str(s),
        }
    }
}

/// One normalized gateway error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    /// Error code; `None` when the payload carried neither shape
    pub code: Option<ErrorCode>,
    /// Human-readable description
    pub description: Option<String>,
    /// The field a validation error targets; `None` for whole-request errors
    pub property: Option<String>,
}

impl ErrorDetail {
    /// Create an error detail directly
    pub fn new(
        code: Option<ErrorCode>,
        description: Option<String>,
        property: Option<String>,
    ) -> Self {
        Self {
            code,
            description,
            property,
        }
    }

    /// Normalize a raw error payload.
    ///
    /// The documented shape wins over the legacy one: `code` is preferred
    /// to `statusCode` and `description` to `statusDetail`. Never fails;
    /// absent fields resolve to `None`.
    pub fn from_payload(data: &Value) -> Self {
        let code = value_field(data, "code")
            .or_else(|| value_field(data, "statusCode"))
            .and_then(ErrorCode::from_value);
        let description =
            string_field(data, "description").or_else(|| string_field(data, "statusDetail"));
        let property = string_field(data, "property");

        if code.is_none() && description.is_none() {
            tracing::debug!("gateway error payload carried neither primary nor legacy fields");
        }

        Self {
            code,
            description,
            property,
        }
    }

    /// Whether this error targets a specific request field
    pub fn is_field_error(&self) -> bool {
        self.property.is_some()
    }
}

/// The set of errors returned for one request
///
/// HTTP 422 responses carry multiple validation errors under an `errors`
/// key; other 4xx responses carry a single error at the top level. Both
/// shapes parse into one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCollection {
    errors: Vec<ErrorDetail>,
}

impl ErrorCollection {
    /// Parse an error response body.
    ///
    /// A payload with an `errors` array yields one [`ErrorDetail`] per
    /// element; any other payload is treated as a single top-level error.
    pub fn from_payload(data: &Value) -> Self {
        let errors = match data.get("errors").and_then(Value::as_array) {
            Some(items) => items.iter().map(ErrorDetail::from_payload).collect(),
            None => vec![ErrorDetail::from_payload(data)],
        };

        Self { errors }
    }

    /// All errors, in response order
    pub fn all(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// The first error, if any
    pub fn first(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }

    /// The errors targeting one request field
    pub fn by_property(&self, property: &str) -> Vec<&ErrorDetail> {
        self.errors
            .iter()
            .filter(|error| error.property.as_deref() == Some(property))
            .collect()
    }

    /// Number of errors in the collection
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the errors
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorDetail> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = &'a ErrorDetail;
    type IntoIter = std::slice::Iter<'a, ErrorDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
