//! Core money logic for Coinage.
//!
//! This crate contains pure value logic with ZERO file, network or database
//! dependencies. Money values, conversion rates and arithmetic live here.
//!
//! # Modules
//!
//! - `money` - The `Money` value, currency codes and input coercion
//! - `currency` - Rate registry, conversion, arithmetic and comparison
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use coinage_core::{Money, MoneyOperable, RateRegistry};
//! use rust_decimal_macros::dec;
//!
//! let rates = RateRegistry::new();
//! rates
//!     .register_rates("EUR", &BTreeMap::from([("USD", dec!(1.11))]))
//!     .unwrap();
//!
//! let eur = Money::new(50, "EUR").unwrap();
//! let usd = Money::new(dec!(55.50), "USD").unwrap();
//!
//! assert_eq!(eur.add(&usd, &rates).unwrap().to_string(), "100.00 EUR");
//! assert!(eur.equals(&usd, &rates).unwrap());
//! ```

pub mod currency;
pub mod money;

pub use coinage_shared::{MoneyError, MoneyResult};
pub use currency::{
    MONEY_DECIMAL_PLACES, MoneyOperable, RateLookup, RateLookupMethod, RateRegistry, RateTable,
    convert_amount, round_money,
};
pub use money::{CurrencyCode, CurrencyLike, Money, MoneyLike, Numeric};
