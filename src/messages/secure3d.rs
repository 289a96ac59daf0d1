//! 3-D Secure completion request and ACS callback parsing
//!
//! The handshake spans three steps. The caller sends an initial
//! authorization request and is told to redirect the cardholder to the
//! issuing bank's Access Control System (ACS). The ACS posts its result
//! back to the merchant's callback endpoint; that payload parses into
//! [`Secure3DAcsResponse`]. The caller then submits a [`Secure3DRequest`]
//! to hand the PaRes to the gateway and complete the transaction.
//!
//! No state is retained here between the callback and the completion
//! request; the caller correlates them via the optional merchant data (MD)
//! or the transaction ID.

use serde_json::{json, Value};

use super::{substitute_placeholders, Message};
use crate::auth::Credentials;
use crate::payload::string_field;

const RESOURCE_PATH: &[&str] = &["{transactionId}", "3d-secure"];

/// Encrypted payer-authentication result produced by the ACS
///
/// Constructible from a raw string or from a parsed
/// [`Secure3DAcsResponse`]; both forms are equivalent once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaRes(String);

impl PaRes {
    /// The raw PaRes string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for PaRes {
    fn from(value: &str) -> Self {
        PaRes(value.to_string())
    }
}

impl From<String> for PaRes {
    fn from(value: String) -> Self {
        PaRes(value)
    }
}

impl From<&Secure3DAcsResponse> for PaRes {
    /// Extract the PaRes field from a parsed ACS callback.
    ///
    /// A callback missing the field canonicalizes to the empty string; the
    /// gateway, not this layer, rejects it.
    fn from(response: &Secure3DAcsResponse) -> Self {
        PaRes(response.pa_res().unwrap_or_default().to_string())
    }
}

impl From<Secure3DAcsResponse> for PaRes {
    fn from(response: Secure3DAcsResponse) -> Self {
        PaRes::from(&response)
    }
}

/// The 3-D Secure authentication result submitted to the gateway
#[derive(Debug, Clone)]
pub struct Secure3DRequest<'a> {
    auth: &'a Credentials,
    pa_res: PaRes,
    transaction_id: String,
}

impl<'a> Secure3DRequest<'a> {
    /// Create a completion request.
    ///
    /// `pa_res` accepts a raw string or a [`Secure3DAcsResponse`]; the
    /// PaRes is extracted at construction and the response object is not
    /// retained. `transaction_id` is the ID the gateway assigned in its
    /// initial response.
    pub fn new(
        auth: &'a Credentials,
        pa_res: impl Into<PaRes>,
        transaction_id: impl Into<String>,
    ) -> Self {
        Self {
            auth,
            pa_res: pa_res.into(),
            transaction_id: transaction_id.into(),
        }
    }

    /// The PaRes being submitted
    pub fn pa_res(&self) -> &PaRes {
        &self.pa_res
    }

    /// The gateway transaction ID being completed
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }
}

impl Message for Secure3DRequest<'_> {
    fn resource_path(&self) -> Vec<String> {
        substitute_placeholders(
            RESOURCE_PATH,
            &[("{transactionId}", self.transaction_id.as_str())],
        )
    }

    fn body(&self) -> Value {
        json!({ "paRes": self.pa_res.as_str() })
    }

    fn auth(&self) -> &Credentials {
        self.auth
    }
}

/// The POST the issuing bank's ACS sends the cardholder back with
///
/// The payload originates outside this system's control, so parsing is a
/// one-way, permissive extraction: missing fields yield `None`, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secure3DAcsResponse {
    pa_res: Option<String>,
    md: Option<String>,
}

impl Secure3DAcsResponse {
    /// Create a response from already-extracted fields
    pub fn new(pa_res: Option<String>, md: Option<String>) -> Self {
        Self { pa_res, md }
    }

    /// Parse the raw ACS callback payload.
    ///
    /// The payload is normally the raw POST form data from the ACS,
    /// converted to a JSON object by the caller.
    pub fn from_payload(data: &Value) -> Self {
        let pa_res = string_field(data, "PaRes");
        let md = string_field(data, "MD");

        if pa_res.is_none() {
            tracing::warn!("ACS callback payload is missing the PaRes field");
        }

        Self { pa_res, md }
    }

    /// The encrypted 3-D Secure result to pass on to the gateway
    pub fn pa_res(&self) -> Option<&str> {
        self.pa_res.as_deref()
    }

    /// The optional merchant data identifying the original transaction
    pub fn md(&self) -> Option<&str> {
        self.md.as_deref()
    }

    /// Serialize back to a flat object, for logging and debugging
    pub fn as_value(&self) -> Value {
        json!({
            "PaRes": self.pa_res,
            "MD": self.md,
        })
    }
}
