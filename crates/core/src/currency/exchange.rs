//! Exchange rate types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::money::CurrencyCode;

/// Conversion multipliers from one base currency to its targets.
///
/// Each rate is the amount of the target currency per one unit of the base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Returns the rate to `target`, if one is registered.
    #[must_use]
    pub fn get(&self, target: &str) -> Option<Decimal> {
        self.rates.get(target).copied()
    }

    /// Returns the number of target currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over `(target, rate)` pairs ordered by target code.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }
}

impl FromIterator<(CurrencyCode, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, Decimal)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

/// How an exchange rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLookupMethod {
    /// Rate registered for source -> target.
    Direct,
    /// Rate registered for target -> source, then inverted.
    Inverse,
}

/// Result of an exchange rate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLookup {
    /// Source currency code.
    pub from: CurrencyCode,
    /// Target currency code.
    pub to: CurrencyCode,
    /// Exchange rate (1 from = rate to).
    pub rate: Decimal,
    /// How the rate was obtained.
    pub method: RateLookupMethod,
}

impl RateLookup {
    /// Returns the inverse rate, or `None` if the rate is zero.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        Some(Self {
            from: self.to.clone(),
            to: self.from.clone(),
            rate: Decimal::ONE.checked_div(self.rate)?,
            method: RateLookupMethod::Inverse,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_rate_table_from_iter() {
        let table: RateTable = [(code("USD"), dec!(1.11)), (code("Bitcoin"), dec!(0.0047))]
            .into_iter()
            .collect();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.get("USD"), Some(dec!(1.11)));
        assert_eq!(table.get("Bitcoin"), Some(dec!(0.0047)));
        assert_eq!(table.get("GBP"), None);
    }

    #[test]
    fn test_rate_table_iter_is_ordered() {
        let table: RateTable = [(code("USD"), dec!(1.11)), (code("GBP"), dec!(0.85))]
            .into_iter()
            .collect();

        let codes: Vec<&str> = table.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, vec!["GBP", "USD"]);
    }

    #[test]
    fn test_inverse() {
        let lookup = RateLookup {
            from: code("EUR"),
            to: code("USD"),
            rate: dec!(2),
            method: RateLookupMethod::Direct,
        };

        let inverse = lookup.inverse().unwrap();
        assert_eq!(inverse.from, code("USD"));
        assert_eq!(inverse.to, code("EUR"));
        assert_eq!(inverse.rate, dec!(0.5));
        assert_eq!(inverse.method, RateLookupMethod::Inverse);
    }

    #[test]
    fn test_inverse_of_zero_rate() {
        let lookup = RateLookup {
            from: code("EUR"),
            to: code("USD"),
            rate: Decimal::ZERO,
            method: RateLookupMethod::Direct,
        };

        assert!(lookup.inverse().is_none());
    }
}
