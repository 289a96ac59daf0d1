//! Error types for the Sage Pay message layer
//!
//! All construction failures in this crate are configuration errors: the
//! caller supplied an input the fixed registries do not recognise, and must
//! fix the input before retrying. Malformed upstream payloads are not
//! errors at this layer; they parse permissively into optional fields.

use thiserror::Error;

/// Result type alias for message-layer operations
pub type Result<T> = std::result::Result<T, SagePayError>;

/// Errors raised while constructing message-layer values
#[derive(Debug, Error)]
pub enum SagePayError {
    /// The mode string does not name a known operating environment
    #[error("unknown mode \"{mode}\"")]
    UnknownMode {
        /// The rejected mode string
        mode: String,
    },

    /// The currency code is not in the supported-currency registry
    #[error("unknown currency code \"{code}\"")]
    UnknownCurrency {
        /// The rejected ISO 4217 code
        code: String,
    },

    /// A major-unit amount cannot be represented in minor units
    #[error("invalid amount: {reason}")]
    InvalidAmount {
        /// Why the amount was rejected
        reason: String,
    },
}

impl SagePayError {
    /// Create an unknown-mode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode { mode: mode.into() }
    }

    /// Create an unknown-currency error
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Create an invalid-amount error
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SagePayError::unknown_mode("sandbox").to_string(),
            "unknown mode \"sandbox\""
        );
        assert_eq!(
            SagePayError::unknown_currency("ZZZ").to_string(),
            "unknown currency code \"ZZZ\""
        );
    }
}
