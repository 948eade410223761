//! Money values and the inputs they are built from.

pub mod code;
pub mod coerce;
pub mod types;

pub use code::CurrencyCode;
pub use coerce::{CurrencyLike, MoneyLike, Numeric};
pub use types::Money;
