//! Currency codes.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use coinage_shared::{MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};

/// A currency code such as `EUR`, `USD` or `Bitcoin`.
///
/// Any non-blank string is accepted. Codes are compared exactly as given,
/// so `eur` and `EUR` are different currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` if the code is blank.
    pub fn new(code: impl Into<String>) -> MoneyResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(MoneyError::InvalidCurrency);
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
