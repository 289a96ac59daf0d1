//! # sagepay-messages
//!
//! Typed message construction and response normalization for the Sage Pay
//! (Opayo) REST API.
//!
//! This crate performs no network I/O. It builds request descriptors
//! (path, headers, body) from typed domain values and parses heterogeneous
//! gateway responses into normalized objects; the HTTP transport is the
//! caller's, and can be synchronous or asynchronous.
//!
//! ## Quick Start
//!
//! ```
//! use sagepay_messages::{Credentials, Message, Mode, SessionKeyRequest};
//!
//! // Created once per integration and shared across all requests.
//! let auth = Credentials::new("vendor", "key", "password", Mode::Test);
//!
//! let request = SessionKeyRequest::new(&auth);
//! let descriptor = request.to_descriptor();
//!
//! assert_eq!(
//!     descriptor.url,
//!     "https://test.sagepay.com/api/v1/merchant-session-keys"
//! );
//! // Hand descriptor.method / url / headers / body to your transport.
//! ```
//!
//! ## Completing a 3-D Secure transaction
//!
//! ```
//! use sagepay_messages::{
//!     Credentials, Message, Mode, Secure3DAcsResponse, Secure3DRequest,
//! };
//! use serde_json::json;
//!
//! let auth = Credentials::new("vendor", "key", "password", Mode::Test);
//!
//! // The issuing bank's ACS posts the cardholder back with the result.
//! let callback = json!({ "PaRes": "eNrtxyz", "MD": "order-42" });
//! let acs = Secure3DAcsResponse::from_payload(&callback);
//!
//! // Forward the PaRes to the gateway to complete the transaction.
//! let request = Secure3DRequest::new(&auth, &acs, "T-123");
//! assert_eq!(
//!     request.url(),
//!     "https://test.sagepay.com/api/v1/T-123/3d-secure"
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`auth`] - account credentials, operating mode, endpoint resolution
//! - [`messages`] - the outbound message contract and concrete requests
//! - [`gateway_error`] - dual-shape gateway error normalization
//! - [`money`] - supported currencies and minor-unit amounts
//! - [`error`] - configuration errors raised at construction time
//!
//! Every value is immutable after construction; mode switching and URL
//! overrides return new copies, so [`Credentials`] can be shared across
//! threads and concurrent in-flight requests without synchronization.

pub mod auth;
pub mod error;
pub mod gateway_error;
pub mod messages;
pub mod money;
mod payload;

// Re-exports for convenience
pub use auth::{Credentials, Mode};
pub use error::{Result, SagePayError};
pub use gateway_error::{ErrorCode, ErrorCollection, ErrorDetail};
pub use messages::secure3d::{PaRes, Secure3DAcsResponse, Secure3DRequest};
pub use messages::session_key::SessionKeyRequest;
pub use messages::{Message, RequestDescriptor};
pub use money::{Amount, Currency};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_credentials_shared_across_messages() {
        let auth = Credentials::new("vendor", "key", "password", Mode::Live);

        let session = SessionKeyRequest::new(&auth);
        let secure = Secure3DRequest::new(&auth, "XYZ", "T1");

        assert_eq!(
            session.url(),
            "https://www.sagepay.com/api/v1/merchant-session-keys"
        );
        assert_eq!(secure.url(), "https://www.sagepay.com/api/v1/T1/3d-secure");
    }
}
