//! Operator syntax for money values.
//!
//! `&a + &b`, `&a - &b`, `&a * n` and `&a / n` forward to
//! [`MoneyOperable`] using [`RateRegistry::global`]. They return
//! `MoneyResult<Money>` because conversion and division can fail.

use std::ops::{Add, Div, Mul, Sub};

use coinage_shared::MoneyResult;
use rust_decimal::Decimal;

use super::operations::MoneyOperable;
use super::registry::RateRegistry;
use crate::money::Money;

impl Add for &Money {
    type Output = MoneyResult<Money>;

    fn add(self, rhs: Self) -> Self::Output {
        MoneyOperable::add(self, rhs, RateRegistry::global())
    }
}

impl Sub for &Money {
    type Output = MoneyResult<Money>;

    fn sub(self, rhs: Self) -> Self::Output {
        MoneyOperable::subtract(self, rhs, RateRegistry::global())
    }
}

impl Mul<Decimal> for &Money {
    type Output = MoneyResult<Money>;

    fn mul(self, rhs: Decimal) -> Self::Output {
        MoneyOperable::multiply(self, rhs)
    }
}

impl Div<Decimal> for &Money {
    type Output = MoneyResult<Money>;

    fn div(self, rhs: Decimal) -> Self::Output {
        MoneyOperable::divide(self, rhs)
    }
}
