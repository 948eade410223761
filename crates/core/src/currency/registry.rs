//! Registry of conversion rates keyed by base currency.
//!
//! Tables are replaced wholesale: registering a table for a base currency
//! discards whatever was registered for it before. Each table is validated
//! and built before it is published, so readers never see a partial table.

use std::collections::BTreeMap;
use std::sync::Arc;

use coinage_shared::{AppConfig, MoneyError, MoneyResult};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use super::exchange::{RateLookup, RateLookupMethod, RateTable};
use crate::money::{CurrencyCode, CurrencyLike, Numeric};

static GLOBAL: Lazy<RateRegistry> = Lazy::new(RateRegistry::new);

/// Conversion rates shared by all money operations that receive it.
///
/// Thread-safe: lookups run concurrently, and a registration swaps in a
/// complete table for its base currency in one step.
#[derive(Debug, Default)]
pub struct RateRegistry {
    tables: DashMap<CurrencyCode, Arc<RateTable>>,
}

impl RateRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    ///
    /// Used by the `std::ops` operators on `Money`. Code that can pass a
    /// registry explicitly should prefer its own instance.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers the rate table for `base`, replacing any previous table.
    ///
    /// `rates` maps each target currency to the amount of it per one unit of
    /// `base`. An empty map clears the table for `base`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` if `base` or a target key is not
    /// a currency code, and `MoneyError::RatesNotNumeric` if a rate is not
    /// numeric. Nothing is registered on error.
    pub fn register_rates<K, V>(
        &self,
        base: impl CurrencyLike,
        rates: &BTreeMap<K, V>,
    ) -> MoneyResult<()>
    where
        K: CurrencyLike,
        V: Numeric,
    {
        self.register_entries(base, rates)
    }

    /// Registers a rate table given as a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::RatesNotAMapping` if `rates` is not an object,
    /// otherwise the same errors as [`Self::register_rates`].
    pub fn register_value(&self, base: impl CurrencyLike, rates: &Value) -> MoneyResult<()> {
        let Value::Object(rates) = rates else {
            return Err(MoneyError::RatesNotAMapping);
        };
        self.register_entries(base, rates)
    }

    /// Registers every rate table found in configuration.
    ///
    /// All tables are validated before any is registered. Returns the number
    /// of tables registered.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn seed_from_config(&self, config: &AppConfig) -> MoneyResult<usize> {
        let tables = config
            .rate_tables()
            .into_iter()
            .map(|(base, rates)| -> MoneyResult<(CurrencyCode, RateTable)> {
                let base = base.to_currency_code().ok_or(MoneyError::InvalidCurrency)?;
                let Value::Object(rates) = rates else {
                    return Err(MoneyError::RatesNotAMapping);
                };
                Ok((base, build_table(&rates)?))
            })
            .collect::<MoneyResult<Vec<_>>>()?;

        let count = tables.len();
        for (base, table) in tables {
            self.publish(base, table);
        }
        Ok(count)
    }

    /// Returns the table registered for `base`.
    #[must_use]
    pub fn rates_for(&self, base: &str) -> Option<Arc<RateTable>> {
        self.tables.get(base).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns true if a table is registered for `base`.
    #[must_use]
    pub fn contains(&self, base: &str) -> bool {
        self.tables.contains_key(base)
    }

    /// Resolves the rate for converting `from` into `to`.
    ///
    /// Lookup priority:
    /// 1. Direct rate (from -> to)
    /// 2. Inverse rate (to -> from, then invert)
    ///
    /// A currency has no implicit rate to itself; `EUR -> EUR` resolves only
    /// if a table registers it.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::NoConversionRateDefined` if no usable rate exists.
    /// A registered inverse rate of zero cannot be inverted and counts as
    /// missing.
    pub fn lookup(&self, from: &CurrencyCode, to: &CurrencyCode) -> MoneyResult<RateLookup> {
        if let Some(rate) = self.find_direct(from, to) {
            debug!(%from, %to, %rate, "Resolved direct conversion rate");
            return Ok(RateLookup {
                from: from.clone(),
                to: to.clone(),
                rate,
                method: RateLookupMethod::Direct,
            });
        }

        if let Some(rate) = self.find_direct(to, from) {
            let registered = RateLookup {
                from: to.clone(),
                to: from.clone(),
                rate,
                method: RateLookupMethod::Direct,
            };
            if let Some(inverse) = registered.inverse() {
                debug!(%from, %to, rate = %inverse.rate, "Resolved inverse conversion rate");
                return Ok(inverse);
            }
        }

        Err(MoneyError::NoConversionRateDefined {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn register_entries<I, K, V>(&self, base: impl CurrencyLike, rates: I) -> MoneyResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: CurrencyLike,
        V: Numeric,
    {
        let base = base.to_currency_code().ok_or(MoneyError::InvalidCurrency)?;
        let table = build_table(rates)?;
        self.publish(base, table);
        Ok(())
    }

    fn find_direct(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<Decimal> {
        self.tables
            .get(from.as_str())
            .and_then(|table| table.value().get(to.as_str()))
    }

    fn publish(&self, base: CurrencyCode, table: RateTable) {
        debug!(%base, rates = table.len(), "Registered conversion rates");
        self.tables.insert(base, Arc::new(table));
    }
}

fn build_table<I, K, V>(rates: I) -> MoneyResult<RateTable>
where
    I: IntoIterator<Item = (K, V)>,
    K: CurrencyLike,
    V: Numeric,
{
    rates
        .into_iter()
        .map(|(target, rate)| -> MoneyResult<(CurrencyCode, Decimal)> {
            let target = target
                .to_currency_code()
                .ok_or(MoneyError::InvalidCurrency)?;
            let rate = rate
                .to_decimal()
                .ok_or_else(|| MoneyError::RatesNotNumeric {
                    currency: target.to_string(),
                })?;
            Ok((target, rate))
        })
        .collect()
}
