//! Monetary amounts in gateway minor units
//!
//! The gateway takes amounts as integer minor units (pence, cents).
//! [`Amount`] ties a minor-unit count to its [`Currency`] and converts
//! to and from major units using the registry's digit count.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Result, SagePayError};
use crate::money::Currency;

/// A monetary amount in minor units of its currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    currency: Currency,
    minor_units: i64,
}

impl Amount {
    /// Create an amount from a minor-unit count
    pub fn new(currency: Currency, minor_units: i64) -> Self {
        Self {
            currency,
            minor_units,
        }
    }

    /// Create an amount from a major-unit value.
    ///
    /// Fails if the value carries more decimal places than the currency
    /// supports, or overflows 64-bit minor units.
    pub fn from_major(currency: Currency, major: Decimal) -> Result<Self> {
        let scaled = major * Decimal::from(10u64.pow(currency.digits()));

        if !scaled.normalize().is_integer() {
            return Err(SagePayError::invalid_amount(format!(
                "{} {} has more than {} decimal places",
                major,
                currency.code(),
                currency.digits()
            )));
        }

        let minor_units = scaled.to_i64().ok_or_else(|| {
            SagePayError::invalid_amount(format!(
                "{} {} does not fit in 64-bit minor units",
                major,
                currency.code()
            ))
        })?;

        Ok(Self {
            currency,
            minor_units,
        })
    }

    /// The currency of this amount
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The minor-unit count, as sent to the gateway
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// The major-unit value, scaled to the currency's digits
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.minor_units, self.currency.digits())
    }

    /// Display form with the currency symbol, e.g. `£12.34`
    pub fn format(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.to_major())
    }
}
