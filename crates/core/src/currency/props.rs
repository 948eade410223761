//! Property-based tests for currency operations.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::conversion::{MONEY_DECIMAL_PLACES, round_money};
use super::operations::MoneyOperable;
use super::registry::RateRegistry;
use crate::money::Money;

/// Strategy to generate amounts from -1,000,000.00 to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate unrounded amounts with up to 6 decimal places.
fn raw_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate exchange rates (0.0001 to 10000.0000).
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate moderate exchange rates (0.5000 to 2.0000).
fn moderate_rate() -> impl Strategy<Value = Decimal> {
    (5_000i64..=20_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn eur_usd(rate: Decimal) -> RateRegistry {
    let rates = RateRegistry::new();
    rates
        .register_rates("EUR", &BTreeMap::from([("USD", rate)]))
        .expect("valid rate table");
    rates
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rounding never keeps more than 2 decimal places and moves the value
    /// by at most half a cent.
    #[test]
    fn prop_round_money_is_within_half_cent(value in raw_amount()) {
        let rounded = round_money(value);
        prop_assert!(rounded.scale() <= MONEY_DECIMAL_PLACES);
        prop_assert!((rounded - value).abs() <= dec!(0.005));
    }

    /// Direct and inverse conversions yield at most 2 decimal places.
    #[test]
    fn prop_conversion_is_rounded(amount in amount(), rate in rate()) {
        let rates = eur_usd(rate);

        let usd = Money::new(amount, "EUR").unwrap().convert_to("USD", &rates).unwrap();
        prop_assert!(usd.amount().scale() <= MONEY_DECIMAL_PLACES);
        prop_assert_eq!(usd.currency().as_str(), "USD");

        let eur = Money::new(amount, "USD").unwrap().convert_to("EUR", &rates).unwrap();
        prop_assert!(eur.amount().scale() <= MONEY_DECIMAL_PLACES);
        prop_assert_eq!(eur.currency().as_str(), "EUR");
    }

    /// Converting there and back through one table stays within two cents.
    #[test]
    fn prop_round_trip_within_two_cents(amount in amount(), rate in moderate_rate()) {
        let rates = eur_usd(rate);
        let original = Money::new(amount, "EUR").unwrap();

        let back = original
            .convert_to("USD", &rates)
            .and_then(|usd| usd.convert_to("EUR", &rates))
            .unwrap();

        prop_assert!((back.amount() - original.amount()).abs() <= dec!(0.02));
    }

    /// Same-currency addition is commutative and needs no rates.
    #[test]
    fn prop_same_currency_add_commutes(a in amount(), b in amount()) {
        let rates = RateRegistry::new();
        let a = Money::new(a, "EUR").unwrap();
        let b = Money::new(b, "EUR").unwrap();

        let ab = a.add(&b, &rates).unwrap();
        let ba = b.add(&a, &rates).unwrap();
        prop_assert_eq!(ab.amount(), ba.amount());
        prop_assert_eq!(ab.amount(), a.amount() + b.amount());
    }

    /// Subtracting a value from itself is zero, in any currency pair.
    #[test]
    fn prop_subtract_self_is_zero(amount in amount(), rate in rate()) {
        let rates = eur_usd(rate);
        let money = Money::new(amount, "EUR").unwrap();

        prop_assert!(money.subtract(&money, &rates).unwrap().is_zero());
        prop_assert!(money.equals(&money, &rates).unwrap());
    }

    /// Exactly one of `<`, `==` and `>` holds for same-currency operands.
    #[test]
    fn prop_comparison_is_total(a in amount(), b in amount()) {
        let rates = RateRegistry::new();
        let a = Money::new(a, "EUR").unwrap();
        let b = Money::new(b, "EUR").unwrap();

        let outcomes = [
            a.less_than(&b, &rates).unwrap(),
            a.equals(&b, &rates).unwrap(),
            a.greater_than(&b, &rates).unwrap(),
        ];
        prop_assert_eq!(outcomes.iter().filter(|holds| **holds).count(), 1);
    }

    /// Multiplying then dividing by the same whole factor restores the amount.
    #[test]
    fn prop_multiply_then_divide(amount in amount(), factor in 1i64..1_000) {
        let money = Money::new(amount, "EUR").unwrap();
        let restored = money.multiply(factor).and_then(|m| m.divide(factor)).unwrap();
        prop_assert_eq!(restored.amount(), money.amount());
    }

    /// Registration replaces the previous table for the same base.
    #[test]
    fn prop_registration_replaces(first in rate(), second in rate()) {
        let rates = RateRegistry::new();
        rates
            .register_rates("EUR", &BTreeMap::from([("USD", first), ("GBP", first)]))
            .unwrap();
        rates
            .register_rates("EUR", &BTreeMap::from([("USD", second)]))
            .unwrap();

        let table = rates.rates_for("EUR").unwrap();
        prop_assert_eq!(table.get("USD"), Some(second));
        prop_assert_eq!(table.get("GBP"), None);
    }
}
