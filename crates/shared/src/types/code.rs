//! Three-letter currency codes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AppError, AppResult};

/// A three-letter alphabetic currency code (e.g., "EUR", "JPY").
///
/// Stored inline so it is `Copy` and cheap to hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Parses a currency code, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the code is empty, not exactly three
    /// characters long, or contains anything but ASCII letters.
    pub fn parse(code: &str) -> AppResult<Self> {
        if code.is_empty() {
            return Err(AppError::Validation(
                "currency code must not be empty".to_string(),
            ));
        }
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(AppError::Validation(format!(
                "currency code must be three letters, got '{code}'"
            )));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Builds a code from a literal known to be valid.
    ///
    /// Used for the built-in tables; invalid input yields `XXX`.
    #[must_use]
    pub const fn from_static(code: &'static str) -> Self {
        let b = code.as_bytes();
        if b.len() != 3
            || !b[0].is_ascii_uppercase()
            || !b[1].is_ascii_uppercase()
            || !b[2].is_ascii_uppercase()
        {
            return Self(*b"XXX");
        }
        Self([b[0], b[1], b[2]])
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code: String = Deserialize::deserialize(deserializer)?;
        Self::parse(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("EUR", "EUR")]
    #[case("usd", "USD")]
    #[case("Jpy", "JPY")]
    fn test_parse_valid(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(CurrencyCode::parse(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("EU")]
    #[case("EURO")]
    #[case("E1R")]
    #[case("€UR")]
    fn test_parse_invalid(#[case] input: &str) {
        let err = CurrencyCode::parse(input).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_from_static() {
        assert_eq!(CurrencyCode::from_static("CHF").as_str(), "CHF");
        assert_eq!(CurrencyCode::from_static("chf").as_str(), "XXX");
    }

    #[test]
    fn test_display_and_debug() {
        let code = CurrencyCode::from_static("GBP");
        assert_eq!(code.to_string(), "GBP");
        assert_eq!(format!("{code:?}"), "CurrencyCode(GBP)");
    }

    #[test]
    fn test_serde_as_string() {
        let code = CurrencyCode::from_static("SEK");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"SEK\"");
        let back: CurrencyCode = serde_json::from_str("\"sek\"").unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<CurrencyCode>("\"SEKX\"").is_err());
    }
}
