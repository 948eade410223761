//! Conversions from typed and dynamic inputs into money building blocks.
//!
//! Each trait is implemented for the natural Rust types and for
//! `serde_json::Value`, which is how untyped input (configuration, JSON
//! payloads) reaches the money API. A `None` result means the input has the
//! wrong shape; callers turn it into the matching `MoneyError`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

use super::code::CurrencyCode;
use super::types::Money;

/// A value usable as a decimal amount, rate or scalar.
pub trait Numeric {
    /// Returns the value as a `Decimal`, or `None` if it is not numeric.
    fn to_decimal(&self) -> Option<Decimal>;
}

/// A value usable as a currency code.
pub trait CurrencyLike {
    /// Returns the value as a `CurrencyCode`, or `None` if it is not a
    /// non-blank string.
    fn to_currency_code(&self) -> Option<CurrencyCode>;
}

/// A value usable as the other operand of a money operation.
pub trait MoneyLike {
    /// Returns the value as `Money`, or `None` if it is not a money value.
    fn to_money(&self) -> Option<Money>;
}

// Integers go through `as_i64`/`as_u64`; floats through their shortest
// round-trip representation so that `1.11` stays exactly `1.11`.
fn number_to_decimal(number: &Number) -> Option<Decimal> {
    if let Some(value) = number.as_i64() {
        return Some(Decimal::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Some(Decimal::from(value));
    }
    let repr = number.to_string();
    Decimal::from_str(&repr)
        .or_else(|_| Decimal::from_scientific(&repr))
        .ok()
}

impl Numeric for Decimal {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }
}

macro_rules! impl_numeric_for_integer {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_decimal(&self) -> Option<Decimal> {
                    Some(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_numeric_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Numeric for f64 {
    fn to_decimal(&self) -> Option<Decimal> {
        Number::from_f64(*self).as_ref().and_then(number_to_decimal)
    }
}

impl Numeric for Value {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => number_to_decimal(number),
            _ => None,
        }
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_decimal(&self) -> Option<Decimal> {
        (**self).to_decimal()
    }
}

impl CurrencyLike for str {
    fn to_currency_code(&self) -> Option<CurrencyCode> {
        CurrencyCode::new(self).ok()
    }
}

impl CurrencyLike for String {
    fn to_currency_code(&self) -> Option<CurrencyCode> {
        self.as_str().to_currency_code()
    }
}

impl CurrencyLike for CurrencyCode {
    fn to_currency_code(&self) -> Option<CurrencyCode> {
        Some(self.clone())
    }
}

impl CurrencyLike for Value {
    fn to_currency_code(&self) -> Option<CurrencyCode> {
        self.as_str().and_then(CurrencyLike::to_currency_code)
    }
}

impl<T: CurrencyLike + ?Sized> CurrencyLike for &T {
    fn to_currency_code(&self) -> Option<CurrencyCode> {
        (**self).to_currency_code()
    }
}

impl MoneyLike for Money {
    fn to_money(&self) -> Option<Money> {
        Some(self.clone())
    }
}

impl MoneyLike for Value {
    fn to_money(&self) -> Option<Money> {
        serde_json::from_value(self.clone()).ok()
    }
}

impl<T: MoneyLike + ?Sized> MoneyLike for &T {
    fn to_money(&self) -> Option<Money> {
        (**self).to_money()
    }
}
