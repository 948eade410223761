//! Error types for money construction, rate registration and arithmetic.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money values and the rate registry.
///
/// Every variant describes bad caller input or a missing rate. None of them
/// are transient, so retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Amount is not a numeric value.
    #[error("Amount must be numeric")]
    InvalidAmount,

    /// Currency is not a non-empty string.
    #[error("Currency must be a non-empty string")]
    InvalidCurrency,

    /// Rate table is not a key/value mapping.
    #[error("Conversion rates must be a mapping of currency to rate")]
    RatesNotAMapping,

    /// A rate in the submitted table is not numeric.
    #[error("Conversion rate for {currency} is not numeric")]
    RatesNotNumeric {
        /// Target currency whose rate was rejected.
        currency: String,
    },

    /// Neither a direct nor an inverse rate exists for the pair.
    #[error("No conversion rate defined from {from} to {to}")]
    NoConversionRateDefined {
        /// Source currency.
        from: String,
        /// Target currency.
        to: String,
    },

    /// Right-hand operand of a money operation is not a money value.
    #[error("Operand is not a money value")]
    OperandNotMoney,

    /// Scalar operand is not numeric.
    #[error("Scalar operand must be numeric")]
    InvalidScalar,

    /// Division by a zero scalar.
    #[error("Division by zero")]
    DivisionByZero,

    /// Decimal arithmetic exceeded the representable range.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidCurrency => "INVALID_CURRENCY",
            Self::RatesNotAMapping => "RATES_NOT_A_MAPPING",
            Self::RatesNotNumeric { .. } => "RATES_NOT_NUMERIC",
            Self::NoConversionRateDefined { .. } => "NO_CONVERSION_RATE_DEFINED",
            Self::OperandNotMoney => "OPERAND_NOT_MONEY",
            Self::InvalidScalar => "INVALID_SCALAR",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MoneyError::InvalidAmount, "INVALID_AMOUNT")]
    #[case(MoneyError::InvalidCurrency, "INVALID_CURRENCY")]
    #[case(MoneyError::RatesNotAMapping, "RATES_NOT_A_MAPPING")]
    #[case(MoneyError::RatesNotNumeric { currency: "USD".into() }, "RATES_NOT_NUMERIC")]
    #[case(
        MoneyError::NoConversionRateDefined { from: "EUR".into(), to: "GBP".into() },
        "NO_CONVERSION_RATE_DEFINED"
    )]
    #[case(MoneyError::OperandNotMoney, "OPERAND_NOT_MONEY")]
    #[case(MoneyError::InvalidScalar, "INVALID_SCALAR")]
    #[case(MoneyError::DivisionByZero, "DIVISION_BY_ZERO")]
    #[case(MoneyError::ArithmeticOverflow, "ARITHMETIC_OVERFLOW")]
    fn test_error_codes(#[case] error: MoneyError, #[case] code: &str) {
        assert_eq!(error.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::RatesNotNumeric {
                currency: "USD".into()
            }
            .to_string(),
            "Conversion rate for USD is not numeric"
        );
        assert_eq!(
            MoneyError::NoConversionRateDefined {
                from: "EUR".into(),
                to: "GBP".into()
            }
            .to_string(),
            "No conversion rate defined from EUR to GBP"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "Division by zero");
    }
}
