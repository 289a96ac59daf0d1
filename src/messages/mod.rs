//! Outbound message contract and transport handoff
//!
//! Every outbound message exposes the same surface: a resource path, a
//! JSON body, headers, and a reference to the shared [`Credentials`]. The
//! crate performs no network I/O; a message flattens into a
//! [`RequestDescriptor`] which the caller hands to whatever HTTP transport
//! it uses.
//!
//! # Examples
//!
//! ```
//! use sagepay_messages::{Credentials, Message, Mode, SessionKeyRequest};
//!
//! let auth = Credentials::new("vendor", "key", "password", Mode::Test);
//! let descriptor = SessionKeyRequest::new(&auth).to_descriptor();
//!
//! assert_eq!(descriptor.method, http::Method::POST);
//! assert_eq!(
//!     descriptor.url,
//!     "https://test.sagepay.com/api/v1/merchant-session-keys"
//! );
//! ```

pub mod secure3d;
pub mod session_key;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use http::Method;
use serde_json::Value;

use crate::auth::Credentials;

/// Contract implemented by every outbound message
pub trait Message {
    /// The resource path segments, with placeholders already substituted
    fn resource_path(&self) -> Vec<String>;

    /// The request body
    fn body(&self) -> Value;

    /// The shared account credentials
    fn auth(&self) -> &Credentials;

    /// Extra request headers; empty unless a message overrides it
    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// The absolute endpoint URL for this message
    fn url(&self) -> String {
        self.auth().resolve_url_segments(&self.resource_path())
    }

    /// Flatten into the value the external transport consumes
    fn to_descriptor(&self) -> RequestDescriptor {
        RequestDescriptor {
            method: Method::POST,
            url: self.url(),
            headers: self.headers(),
            body: self.body(),
        }
    }
}

/// Everything a transport needs to send one message
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method; every message in this crate posts
    pub method: Method,
    /// Absolute endpoint URL
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// JSON request body
    pub body: Value,
}

/// Replace placeholder segments in a resource path template.
///
/// A segment equal to a `{placeholder}` token is replaced by its resolved
/// value; every occurrence of a given token is replaced in one pass.
/// Unmatched segments pass through untouched.
pub(crate) fn substitute_placeholders(template: &[&str], values: &[(&str, &str)]) -> Vec<String> {
    template
        .iter()
        .map(|segment| {
            values
                .iter()
                .find(|(placeholder, _)| placeholder == segment)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| (*segment).to_string())
        })
        .collect()
}
