//! Arithmetic and comparison on money values.
//!
//! Money-money operations convert the right operand into the left operand's
//! currency first. Arithmetic results are rounded to 2 decimal places and
//! keep the left operand's currency.

use coinage_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::conversion::round_money;
use super::registry::RateRegistry;
use crate::money::{Money, MoneyLike, Numeric};

/// Arithmetic and comparison operations on money values.
pub trait MoneyOperable {
    /// Adds `other`, converted into this value's currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::OperandNotMoney` if `other` is not a money value,
    /// or the conversion error if no rate is defined.
    fn add(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<Money>;

    /// Subtracts `other`, converted into this value's currency.
    ///
    /// # Errors
    ///
    /// Same as [`MoneyOperable::add`].
    fn subtract(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<Money>;

    /// Multiplies the amount by a scalar.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidScalar` if `factor` is not numeric.
    fn multiply(&self, factor: impl Numeric) -> MoneyResult<Money>;

    /// Divides the amount by a scalar.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidScalar` if `divisor` is not numeric and
    /// `MoneyError::DivisionByZero` if it is zero.
    fn divide(&self, divisor: impl Numeric) -> MoneyResult<Money>;

    /// Returns true if both amounts are equal after conversion.
    ///
    /// # Errors
    ///
    /// Same as [`MoneyOperable::add`].
    fn equals(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<bool>;

    /// Returns true if this amount is greater after conversion.
    ///
    /// # Errors
    ///
    /// Same as [`MoneyOperable::add`].
    fn greater_than(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<bool>;

    /// Returns true if this amount is smaller after conversion.
    ///
    /// # Errors
    ///
    /// Same as [`MoneyOperable::add`].
    fn less_than(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<bool>;
}

impl Money {
    /// Applies `op` to this amount and `other`'s amount expressed in this
    /// currency.
    fn combine<T>(
        &self,
        other: impl MoneyLike,
        rates: &RateRegistry,
        op: impl FnOnce(Decimal, Decimal) -> MoneyResult<T>,
    ) -> MoneyResult<T> {
        let other = other.to_money().ok_or(MoneyError::OperandNotMoney)?;
        let other = if other.currency() == self.currency() {
            other
        } else {
            other.convert_to(self.currency(), rates)?
        };
        op(self.amount(), other.amount())
    }

    fn arithmetic(
        &self,
        other: impl MoneyLike,
        rates: &RateRegistry,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> MoneyResult<Self> {
        self.combine(other, rates, |lhs, rhs| {
            let amount = op(lhs, rhs).ok_or(MoneyError::ArithmeticOverflow)?;
            Ok(self.with_amount(amount))
        })
    }

    fn scale(
        &self,
        scalar: impl Numeric,
        op: impl FnOnce(Decimal, Decimal) -> MoneyResult<Decimal>,
    ) -> MoneyResult<Self> {
        let scalar = scalar.to_decimal().ok_or(MoneyError::InvalidScalar)?;
        let amount = op(self.amount(), scalar)?;
        Ok(self.with_amount(amount))
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self::from_decimal(round_money(amount), self.currency().clone())
    }
}

impl MoneyOperable for Money {
    fn add(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<Money> {
        self.arithmetic(other, rates, Decimal::checked_add)
    }

    fn subtract(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<Money> {
        self.arithmetic(other, rates, Decimal::checked_sub)
    }

    fn multiply(&self, factor: impl Numeric) -> MoneyResult<Money> {
        self.scale(factor, |amount, factor| {
            amount
                .checked_mul(factor)
                .ok_or(MoneyError::ArithmeticOverflow)
        })
    }

    fn divide(&self, divisor: impl Numeric) -> MoneyResult<Money> {
        self.scale(divisor, |amount, divisor| {
            if divisor.is_zero() {
                return Err(MoneyError::DivisionByZero);
            }
            amount
                .checked_div(divisor)
                .ok_or(MoneyError::ArithmeticOverflow)
        })
    }

    fn equals(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<bool> {
        self.combine(other, rates, |lhs, rhs| Ok(lhs == rhs))
    }

    fn greater_than(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<bool> {
        self.combine(other, rates, |lhs, rhs| Ok(lhs > rhs))
    }

    fn less_than(&self, other: impl MoneyLike, rates: &RateRegistry) -> MoneyResult<bool> {
        self.combine(other, rates, |lhs, rhs| Ok(lhs < rhs))
    }
}
