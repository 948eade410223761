//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt;

use coinage_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::code::CurrencyCode;
use super::coerce::{CurrencyLike, Numeric};
use crate::currency::conversion::{MONEY_DECIMAL_PLACES, round_money};

/// Represents a monetary amount with currency.
///
/// Money is immutable: every operation returns a new value. The derived
/// equality is structural (same amount, same code); use
/// [`MoneyOperable::equals`](crate::currency::MoneyOperable::equals) to
/// compare across currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    ///
    /// The amount is stored as given; rounding only applies to the results
    /// of conversions and arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if `amount` is not numeric and
    /// `MoneyError::InvalidCurrency` if `currency` is not a non-blank string.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::Money;
    ///
    /// let money = Money::new(50, "EUR").unwrap();
    /// assert_eq!(money.to_string(), "50.00 EUR");
    /// ```
    pub fn new(amount: impl Numeric, currency: impl CurrencyLike) -> MoneyResult<Self> {
        let amount = amount.to_decimal().ok_or(MoneyError::InvalidAmount)?;
        let currency = currency
            .to_currency_code()
            .ok_or(MoneyError::InvalidCurrency)?;
        Ok(Self { amount, currency })
    }

    /// Creates a Money instance from already validated parts.
    #[must_use]
    pub const fn from_decimal(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Formats the value as `"<amount to 2 decimals> <currency>"`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut amount = round_money(self.amount);
        amount.rescale(MONEY_DECIMAL_PLACES);
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        write!(f, "{amount} {}", self.currency)
    }
}
