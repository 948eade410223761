//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for money results:
//! - Always round to 2 decimal places
//! - Ties round away from zero (1.005 -> 1.01, -1.005 -> -1.01)
//! - Stored amounts stay unrounded; only derived results are rounded

use coinage_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::registry::RateRegistry;
use crate::money::{CurrencyLike, Money};

/// Decimal places kept on every derived money amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to the nearest hundredth, ties away from zero.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts an amount using the given exchange rate.
///
/// # Errors
///
/// Returns `MoneyError::ArithmeticOverflow` if the product does not fit in a
/// `Decimal`.
pub fn convert_amount(amount: Decimal, rate: Decimal) -> MoneyResult<Decimal> {
    amount
        .checked_mul(rate)
        .map(round_money)
        .ok_or(MoneyError::ArithmeticOverflow)
}

impl Money {
    /// Converts this value into `target` using rates from `rates`.
    ///
    /// A direct rate for `self.currency -> target` is preferred; otherwise the
    /// reciprocal of a registered `target -> self.currency` rate is used.
    /// Converting into the value's own currency also needs a registered rate.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` if `target` is not a currency
    /// code, `MoneyError::NoConversionRateDefined` if neither rate exists.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use coinage_core::{Money, RateRegistry};
    /// use rust_decimal_macros::dec;
    ///
    /// let rates = RateRegistry::new();
    /// rates
    ///     .register_rates("EUR", &BTreeMap::from([("USD", dec!(1.11))]))
    ///     .unwrap();
    ///
    /// let usd = Money::new(50, "EUR").unwrap().convert_to("USD", &rates).unwrap();
    /// assert_eq!(usd.amount(), dec!(55.50));
    /// ```
    pub fn convert_to(&self, target: impl CurrencyLike, rates: &RateRegistry) -> MoneyResult<Self> {
        let target = target
            .to_currency_code()
            .ok_or(MoneyError::InvalidCurrency)?;
        let lookup = rates.lookup(self.currency(), &target)?;
        let amount = convert_amount(self.amount(), lookup.rate)?;
        Ok(Self::from_decimal(amount, target))
    }
}
