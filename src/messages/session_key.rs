//! Merchant session key request
//!
//! The session key is a short-lived credential the front end uses to
//! tokenize card data before it reaches the merchant server. Obtaining one
//! authenticates the merchant, not a session, so this is the one message
//! that carries HTTP Basic Auth.

use std::collections::HashMap;

use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Value};

use super::Message;
use crate::auth::Credentials;

const RESOURCE_PATH: &[&str] = &["merchant-session-keys"];

/// Request for a new merchant session key
#[derive(Debug, Clone)]
pub struct SessionKeyRequest<'a> {
    auth: &'a Credentials,
}

impl<'a> SessionKeyRequest<'a> {
    /// Create a session key request for the given account
    pub fn new(auth: &'a Credentials) -> Self {
        Self { auth }
    }
}

impl Message for SessionKeyRequest<'_> {
    fn resource_path(&self) -> Vec<String> {
        RESOURCE_PATH.iter().map(|s| s.to_string()).collect()
    }

    fn body(&self) -> Value {
        json!({ "vendorName": self.auth.vendor_name() })
    }

    /// The HTTP Basic Auth header built from the integration key and
    /// password. Use this if your transport does not do Basic Auth out of
    /// the box.
    fn headers(&self) -> HashMap<String, String> {
        let token = general_purpose::STANDARD.encode(format!(
            "{}:{}",
            self.auth.integration_key(),
            self.auth.integration_password()
        ));

        HashMap::from([("Authorization".to_string(), format!("Basic {token}"))])
    }

    fn auth(&self) -> &Credentials {
        self.auth
    }
}
