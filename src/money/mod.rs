//! Money types
//!
//! - [`Currency`] - validated currency codes backed by a fixed registry
//! - [`Amount`] - minor-unit amounts with major-unit conversion

pub mod amount;
pub mod currency;

pub use amount::Amount;
pub use currency::{currencies, Currency, CurrencyInfo};
