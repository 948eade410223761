//! Multi-currency handling and exchange rates.

pub mod conversion;
pub mod exchange;
pub mod operations;
pub mod ops;
pub mod registry;

#[cfg(test)]
mod props;

pub use conversion::{MONEY_DECIMAL_PLACES, convert_amount, round_money};
pub use exchange::{RateLookup, RateLookupMethod, RateTable};
pub use operations::MoneyOperable;
pub use registry::RateRegistry;
