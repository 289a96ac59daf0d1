//! Currencies supported by the gateway
//!
//! The registry is fixed at compile time and closed to callers; only the
//! currencies the gateway itself accepts are present.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SagePayError};

/// Display and formatting metadata for one supported currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ISO 4217 currency code
    pub code: &'static str,
    /// Number of digits after the decimal point in major-unit form
    pub digits: u32,
    /// Display symbol, one or more UTF-8 characters
    pub symbol: &'static str,
    /// English display name
    pub name: &'static str,
}

/// The supported-currency registry
pub mod currencies {
    use super::CurrencyInfo;

    /// Pound sterling
    pub const GBP: &str = "GBP";
    /// Euro
    pub const EUR: &str = "EUR";
    /// US dollar
    pub const USD: &str = "USD";

    const GBP_INFO: CurrencyInfo = CurrencyInfo {
        code: GBP,
        digits: 2,
        symbol: "£",
        name: "Pound sterling",
    };

    const EUR_INFO: CurrencyInfo = CurrencyInfo {
        code: EUR,
        digits: 2,
        symbol: "€",
        name: "Euro",
    };

    const USD_INFO: CurrencyInfo = CurrencyInfo {
        code: USD,
        digits: 2,
        symbol: "$",
        name: "US dollar",
    };

    /// Get the registry entry for a currency code.
    ///
    /// The match is case-sensitive and exact.
    pub fn info(code: &str) -> Option<&'static CurrencyInfo> {
        match code {
            GBP => Some(&GBP_INFO),
            EUR => Some(&EUR_INFO),
            USD => Some(&USD_INFO),
            _ => None,
        }
    }

    /// Check if a currency code is supported
    pub fn is_supported(code: &str) -> bool {
        info(code).is_some()
    }

    /// Get all supported currency codes
    pub fn all_supported() -> Vec<&'static str> {
        vec![GBP, EUR, USD]
    }
}

/// A validated currency
///
/// Construction resolves the code against the registry once; accessors are
/// pure lookups afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    info: &'static CurrencyInfo,
}

impl Currency {
    /// Resolve a currency code against the registry
    pub fn new(code: &str) -> Result<Self> {
        currencies::info(code)
            .map(|info| Self { info })
            .ok_or_else(|| SagePayError::unknown_currency(code))
    }

    /// The ISO 4217 currency code
    pub fn code(&self) -> &'static str {
        self.info.code
    }

    /// Digits after the decimal point in major-unit form
    pub fn digits(&self) -> u32 {
        self.info.digits
    }

    /// The display symbol
    pub fn symbol(&self) -> &'static str {
        self.info.symbol
    }

    /// The English display name
    pub fn name(&self) -> &'static str {
        self.info.name
    }
}

impl FromStr for Currency {
    type Err = SagePayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_currencies() {
        let gbp = Currency::new("GBP").unwrap();
        assert_eq!(gbp.code(), "GBP");
        assert_eq!(gbp.digits(), 2);
        assert_eq!(gbp.symbol(), "£");
        assert_eq!(gbp.name(), "Pound sterling");

        assert_eq!(Currency::new("EUR").unwrap().symbol(), "€");
        assert_eq!(Currency::new("USD").unwrap().symbol(), "$");
    }

    #[test]
    fn test_unknown_currency() {
        let err = Currency::new("ZZZ").unwrap_err();
        assert_eq!(err.to_string(), "unknown currency code \"ZZZ\"");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(Currency::new("gbp").is_err());
    }

    #[test]
    fn test_from_str() {
        let usd: Currency = "USD".parse().unwrap();
        assert_eq!(usd.name(), "US dollar");
    }

    #[test]
    fn test_registry() {
        assert!(currencies::is_supported("GBP"));
        assert!(!currencies::is_supported("JPY"));
        assert_eq!(currencies::all_supported(), vec!["GBP", "EUR", "USD"]);
    }
}
