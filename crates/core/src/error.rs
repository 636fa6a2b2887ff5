//! Error types for currency lookups and money arithmetic.
//!
//! Every failure a caller may want to branch on has its own variant:
//! unknown codes, currency mismatches, overflow, and malformed input are
//! never folded into a generic error.

use coinage_shared::AppError;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur during currency and money operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Registry Errors ==========
    /// Currency code (or code and namespace pair) is not registered.
    #[error("{}", unknown_code_message(.code, .namespace.as_deref()))]
    UnknownCurrencyCode {
        /// The code that was looked up.
        code: String,
        /// The namespace, when the lookup was namespace-qualified.
        namespace: Option<String>,
    },

    /// Currency is already registered in the namespace.
    #[error("Currency {code} is already registered in namespace {namespace}")]
    DuplicateRegistration {
        /// The duplicate code.
        code: String,
        /// The namespace it collided in.
        namespace: String,
    },

    // ========== Arithmetic Errors ==========
    /// Operation mixes two different currencies.
    #[error("The requested operation expected the currency {expected}, but the actual value was the currency {actual}")]
    InvalidCurrency {
        /// Currency of the left operand.
        expected: String,
        /// Currency of the right operand.
        actual: String,
    },

    /// Arithmetic overflowed the representable range.
    #[error("Arithmetic overflow while performing {operation}")]
    Overflow {
        /// Operation that overflowed (e.g. "addition").
        operation: &'static str,
    },

    /// Division by zero.
    #[error("Attempted to divide money by zero")]
    DivideByZero,

    // ========== Argument Errors ==========
    /// Argument is malformed or missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Argument is outside its allowed range.
    #[error("Argument out of range: {0}")]
    OutOfRange(String),

    /// Exchange rate base and quote are the same currency.
    #[error("Base and quote currency must differ, both are {0}")]
    SameCurrency(String),

    // ========== Parsing Errors ==========
    /// Text could not be parsed.
    #[error("Format error: {0}")]
    Format(String),

    /// Leaf-type validation error.
    #[error(transparent)]
    Shared(#[from] AppError),
}

fn unknown_code_message(code: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(namespace) => format!("{code} is an unknown currency code in namespace {namespace}"),
        None => format!("{code} is an unknown currency code"),
    }
}

impl MoneyError {
    /// Builds an `InvalidCurrency` error for two mismatching currency codes.
    pub(crate) fn mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Self::InvalidCurrency {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Builds an `UnknownCurrencyCode` error.
    pub(crate) fn unknown(code: impl ToString, namespace: Option<&str>) -> Self {
        Self::UnknownCurrencyCode {
            code: code.to_string(),
            namespace: namespace.map(str::to_string),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrencyCode { .. } => "UNKNOWN_CURRENCY_CODE",
            Self::DuplicateRegistration { .. } => "DUPLICATE_REGISTRATION",
            Self::InvalidCurrency { .. } => "INVALID_CURRENCY",
            Self::Overflow { .. } => "ARITHMETIC_OVERFLOW",
            Self::DivideByZero => "DIVIDE_BY_ZERO",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::SameCurrency(_) => "SAME_CURRENCY",
            Self::Format(_) => "FORMAT_ERROR",
            Self::Shared(inner) => inner.error_code(),
        }
    }

    /// Returns true if this error came from parsing text.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
