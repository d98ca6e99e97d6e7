//! Type-safe price representation using decimal arithmetic.
//!
//! Shopify returns money as a decimal string plus an ISO 4217 currency code.
//! Prices are parsed into [`Decimal`] so totals never pick up float error.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount was not a valid decimal number.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
}

/// A price with currency information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code as reported by Shopify (e.g., "USD").
    pub currency_code: String,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Parse a Shopify `MoneyV2` pair.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::InvalidAmount` if `amount` is not a decimal.
    pub fn parse(amount: &str, currency_code: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| PriceError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency_code))
    }

    /// Amount rounded to two decimal places (half away from zero).
    #[must_use]
    pub fn rounded_amount(&self) -> Decimal {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded
    }

    /// Format for display as `"<CURRENCY> <amount>"`, e.g. `"USD 1234.50"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.currency_code, self.rounded_amount())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
