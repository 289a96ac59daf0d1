//! Account credentials and endpoint URL resolution
//!
//! [`Credentials`] is the immutable account identity created once per
//! integration and shared across every outbound message. It owns the
//! endpoint URL templates for both operating modes and resolves absolute
//! endpoint URLs from resource paths.
//!
//! # Examples
//!
//! ```
//! use sagepay_messages::{Credentials, Mode};
//!
//! let auth = Credentials::new("vendor", "key", "password", Mode::Live);
//! assert_eq!(
//!     auth.resolve_url_segments(&["js", "sagepay.js"]),
//!     "https://www.sagepay.com/api/v1/js/sagepay.js"
//! );
//!
//! // Mode switching is copy-on-write; the original is untouched.
//! let testing = auth.with_testing_mode();
//! assert!(!auth.is_testing());
//! assert!(testing.is_testing());
//! ```

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Result, SagePayError};

/// The API version this release is locked onto
pub const API_VERSION: &str = "v1";

/// Endpoint URL template for live accounts
pub const LIVE_URL_TEMPLATE: &str = "https://www.sagepay.com/api/{version}{resource}";

/// Endpoint URL template for test accounts
pub const TEST_URL_TEMPLATE: &str = "https://test.sagepay.com/api/{version}{resource}";

/// Escapes everything outside the RFC 3986 unreserved set, one path
/// segment at a time.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Operating environment selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Production account against the live gateway
    Live,
    /// Test account against the sandbox gateway
    Test,
}

impl Mode {
    /// Get the mode identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Live => "live",
            Mode::Test => "test",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SagePayError;

    /// Parse a mode from its configuration string form.
    ///
    /// Anything other than `"live"` or `"test"` is a configuration error.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "live" => Ok(Mode::Live),
            "test" => Ok(Mode::Test),
            other => Err(SagePayError::unknown_mode(other)),
        }
    }
}

/// One endpoint URL template per mode
#[derive(Debug, Clone, PartialEq, Eq)]
struct Endpoints {
    live: String,
    test: String,
}

impl Endpoints {
    fn template(&self, mode: Mode) -> &str {
        match mode {
            Mode::Live => &self.live,
            Mode::Test => &self.test,
        }
    }

    fn template_mut(&mut self, mode: Mode) -> &mut String {
        match mode {
            Mode::Live => &mut self.live,
            Mode::Test => &mut self.test,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            live: LIVE_URL_TEMPLATE.to_string(),
            test: TEST_URL_TEMPLATE.to_string(),
        }
    }
}

/// Immutable account credentials and endpoint configuration
///
/// Every mutating operation returns a new copy, so a single instance can be
/// shared freely across threads and in-flight requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    vendor_name: String,
    integration_key: String,
    integration_password: String,
    mode: Mode,
    endpoints: Endpoints,
}

impl Credentials {
    /// Create credentials for the given account and operating mode
    pub fn new(
        vendor_name: impl Into<String>,
        integration_key: impl Into<String>,
        integration_password: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            vendor_name: vendor_name.into(),
            integration_key: integration_key.into(),
            integration_password: integration_password.into(),
            mode,
            endpoints: Endpoints::default(),
        }
    }

    /// The vendor name owning the API account
    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    /// The integration key generated for the merchant site
    pub fn integration_key(&self) -> &str {
        &self.integration_key
    }

    /// The integration password generated for the merchant site
    pub fn integration_password(&self) -> &str {
        &self.integration_password
    }

    /// The active operating mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The fixed API version
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Whether this is a test account
    pub fn is_testing(&self) -> bool {
        self.mode == Mode::Test
    }

    /// Resolve the absolute endpoint URL for a pre-encoded resource path.
    ///
    /// The resource is assumed already URL-encoded and should start with a
    /// `/`; one is inserted if absent. `{version}` and `{resource}` in the
    /// active mode's template are substituted.
    pub fn resolve_url(&self, resource: &str) -> String {
        let resource = if resource.is_empty() || resource.starts_with('/') {
            resource.to_string()
        } else {
            format!("/{resource}")
        };

        self.endpoints
            .template(self.mode)
            .replace("{version}", API_VERSION)
            .replace("{resource}", &resource)
    }

    /// Resolve the absolute endpoint URL from raw path segments.
    ///
    /// Each segment is percent-encoded independently before joining, so
    /// segments must not be encoded in advance and must not contain
    /// directory separators.
    pub fn resolve_url_segments<S: AsRef<str>>(&self, segments: &[S]) -> String {
        let encoded: Vec<String> = segments
            .iter()
            .map(|segment| utf8_percent_encode(segment.as_ref(), PATH_SEGMENT).to_string())
            .collect();

        self.resolve_url(&format!("/{}", encoded.join("/")))
    }

    /// The URL of `sagepay.js`, the front-end card token generator
    pub fn javascript_url(&self) -> String {
        self.resolve_url_segments(&["js", "sagepay.js"])
    }

    /// Return a copy of these credentials with test mode set
    pub fn with_testing_mode(&self) -> Self {
        let mut copy = self.clone();
        copy.mode = Mode::Test;
        copy
    }

    /// Return a copy with one mode's endpoint URL template overridden.
    ///
    /// The template may carry the `{version}` and `{resource}` replacement
    /// fields.
    pub fn with_url(&self, mode: Mode, template: impl Into<String>) -> Self {
        let mut copy = self.clone();
        *copy.endpoints.template_mut(mode) = template.into();
        copy
    }
}
