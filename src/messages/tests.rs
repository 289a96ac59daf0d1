//! Tests for outbound messages

use serde_json::json;

use super::secure3d::{PaRes, Secure3DAcsResponse, Secure3DRequest};
use super::session_key::SessionKeyRequest;
use super::{substitute_placeholders, Message};
use crate::auth::{Credentials, Mode};

fn credentials() -> Credentials {
    Credentials::new("vendor", "key", "password", Mode::Test)
}

#[test]
fn test_session_key_resource_path() {
    let auth = credentials();
    let request = SessionKeyRequest::new(&auth);

    assert_eq!(request.resource_path(), vec!["merchant-session-keys"]);
    assert_eq!(
        request.url(),
        "https://test.sagepay.com/api/v1/merchant-session-keys"
    );
}

#[test]
fn test_session_key_body() {
    let auth = credentials();
    let request = SessionKeyRequest::new(&auth);

    assert_eq!(request.body(), json!({ "vendorName": "vendor" }));
}

#[test]
fn test_session_key_basic_auth_header() {
    let auth = credentials();
    let headers = SessionKeyRequest::new(&auth).headers();

    // base64("key:password")
    assert_eq!(
        headers.get("Authorization").map(String::as_str),
        Some("Basic a2V5OnBhc3N3b3Jk")
    );
}

#[test]
fn test_session_key_basic_auth_header_other_credentials() {
    let auth = Credentials::new("vendor", "my-key", "my-password", Mode::Live);
    let headers = SessionKeyRequest::new(&auth).headers();

    // base64("my-key:my-password")
    assert_eq!(
        headers.get("Authorization").map(String::as_str),
        Some("Basic bXkta2V5Om15LXBhc3N3b3Jk")
    );
}

#[test]
fn test_session_key_descriptor() {
    let auth = credentials();
    let descriptor = SessionKeyRequest::new(&auth).to_descriptor();

    assert_eq!(descriptor.method, http::Method::POST);
    assert_eq!(
        descriptor.url,
        "https://test.sagepay.com/api/v1/merchant-session-keys"
    );
    assert_eq!(descriptor.body, json!({ "vendorName": "vendor" }));
    assert!(descriptor.headers.contains_key("Authorization"));
}

#[test]
fn test_secure3d_resource_path_substitution() {
    let auth = credentials();
    let request = Secure3DRequest::new(&auth, "XYZ", "T1");

    assert_eq!(request.resource_path(), vec!["T1", "3d-secure"]);
    assert_eq!(
        request.url(),
        "https://test.sagepay.com/api/v1/T1/3d-secure"
    );
}

#[test]
fn test_secure3d_body() {
    let auth = credentials();
    let request = Secure3DRequest::new(&auth, "XYZ", "T1");

    assert_eq!(request.body(), json!({ "paRes": "XYZ" }));
    assert_eq!(request.transaction_id(), "T1");
}

#[test]
fn test_secure3d_from_string_and_acs_response_are_equivalent() {
    let auth = credentials();
    let acs = Secure3DAcsResponse::from_payload(&json!({ "PaRes": "XYZ" }));

    let from_string = Secure3DRequest::new(&auth, "XYZ", "T1");
    let from_response = Secure3DRequest::new(&auth, &acs, "T1");

    assert_eq!(from_string.body(), from_response.body());
    assert_eq!(from_string.pa_res(), from_response.pa_res());
}

#[test]
fn test_secure3d_transaction_id_is_not_encoded_twice() {
    // The transaction ID is substituted raw and encoded once, at URL
    // resolution time.
    let auth = credentials();
    let request = Secure3DRequest::new(&auth, "XYZ", "T 1");

    assert_eq!(request.resource_path(), vec!["T 1", "3d-secure"]);
    assert_eq!(
        request.url(),
        "https://test.sagepay.com/api/v1/T%201/3d-secure"
    );
}

#[test]
fn test_acs_response_from_full_payload() {
    let response = Secure3DAcsResponse::from_payload(&json!({
        "PaRes": "eNrtxyz",
        "MD": "order-42"
    }));

    assert_eq!(response.pa_res(), Some("eNrtxyz"));
    assert_eq!(response.md(), Some("order-42"));
}

#[test]
fn test_acs_response_from_empty_payload() {
    let response = Secure3DAcsResponse::from_payload(&json!({}));

    assert_eq!(response.pa_res(), None);
    assert_eq!(response.md(), None);
}

#[test]
fn test_acs_response_ignores_mistyped_fields() {
    let response = Secure3DAcsResponse::from_payload(&json!({ "PaRes": 42, "MD": true }));

    assert_eq!(response.pa_res(), None);
    assert_eq!(response.md(), None);
}

#[test]
fn test_acs_response_as_value() {
    let response = Secure3DAcsResponse::new(Some("XYZ".to_string()), None);

    assert_eq!(
        response.as_value(),
        json!({ "PaRes": "XYZ", "MD": null })
    );
}

#[test]
fn test_pares_from_response_without_field_is_empty() {
    let acs = Secure3DAcsResponse::from_payload(&json!({}));
    let pa_res = PaRes::from(&acs);

    assert_eq!(pa_res.as_str(), "");
}

#[test]
fn test_substitute_placeholders_replaces_every_occurrence() {
    let path = substitute_placeholders(
        &["{id}", "between", "{id}", "{other}"],
        &[("{id}", "A"), ("{other}", "B")],
    );

    assert_eq!(path, vec!["A", "between", "A", "B"]);
}

#[test]
fn test_substitute_placeholders_leaves_unknown_segments() {
    let path = substitute_placeholders(&["{unknown}", "fixed"], &[("{id}", "A")]);

    assert_eq!(path, vec!["{unknown}", "fixed"]);
}

#[test]
fn test_messages_share_credentials() {
    let auth = credentials();
    let session = SessionKeyRequest::new(&auth);
    let secure = Secure3DRequest::new(&auth, "XYZ", "T1");

    assert_eq!(session.auth().vendor_name(), "vendor");
    assert_eq!(secure.auth().vendor_name(), "vendor");
}
