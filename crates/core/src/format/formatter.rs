//! Culture-aware money formatting and parsing.
//!
//! Format specifiers:
//! - `C` currency symbol (the default, also for an empty specifier)
//! - `I` ISO code
//! - `F` English name after the number
//! - `N` number only
//! - `G` same as `C` with the currency's own digits
//!
//! `C`, `I`, `F` and `N` take an optional digit count `0..=4` (`"C2"`).

use std::sync::Arc;

use coinage_shared::MinorUnit;
use coinage_shared::config::FormattingConfig;
use rust_decimal::RoundingStrategy;

use super::culture::Culture;
use crate::currency::{Currency, CurrencyInfo, CurrencyRegistry};
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

const MAX_FORMAT_DIGITS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Symbol,
    Code,
    EnglishName,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormatSpec {
    style: Style,
    digits: Option<u32>,
}

impl FormatSpec {
    fn parse(spec: &str) -> MoneyResult<Self> {
        let spec = spec.trim();
        let mut chars = spec.chars();
        let Some(letter) = chars.next() else {
            return Ok(Self {
                style: Style::Symbol,
                digits: None,
            });
        };
        let style = match letter.to_ascii_uppercase() {
            'C' | 'G' => Style::Symbol,
            'I' => Style::Code,
            'F' => Style::EnglishName,
            'N' => Style::Number,
            _ => {
                return Err(MoneyError::Format(format!(
                    "unknown format specifier '{spec}'"
                )));
            }
        };
        let suffix = chars.as_str();
        if suffix.is_empty() {
            return Ok(Self {
                style,
                digits: None,
            });
        }
        if letter.eq_ignore_ascii_case(&'G') {
            return Err(MoneyError::Format(format!(
                "format specifier '{spec}' does not take a digit count"
            )));
        }
        match suffix.parse::<u32>() {
            Ok(digits) if digits <= MAX_FORMAT_DIGITS => Ok(Self {
                style,
                digits: Some(digits),
            }),
            _ => Err(MoneyError::Format(format!(
                "format specifier '{spec}' needs a digit count between 0 and {MAX_FORMAT_DIGITS}"
            ))),
        }
    }
}

/// Text split into its sign, optional currency token, and number.
struct Tokens<'t> {
    negative: bool,
    currency: Option<&'t str>,
    number: &'t str,
}

impl<'t> Tokens<'t> {
    fn split(text: &'t str) -> MoneyResult<Self> {
        let trimmed = text.trim();
        let (parenthesized, body) = match trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(inner) => (true, inner.trim()),
            None => (false, trimmed),
        };

        let (Some(first), Some(last)) = (
            body.find(|ch: char| ch.is_ascii_digit()),
            body.rfind(|ch: char| ch.is_ascii_digit()),
        ) else {
            return Err(MoneyError::Format(format!("'{text}' contains no amount")));
        };

        let (prefix, number, suffix) = (&body[..first], &body[first..=last], &body[last + 1..]);
        let is_sign = |ch: char| ch == '-' || ch == '+';
        let negative = parenthesized || prefix.contains('-') || suffix.trim_start().starts_with('-');

        let prefix = prefix.trim_matches(|ch: char| ch.is_whitespace() || is_sign(ch));
        let suffix = suffix.trim_matches(|ch: char| ch.is_whitespace() || is_sign(ch));
        let currency = match (prefix.is_empty(), suffix.is_empty()) {
            (true, true) => None,
            (false, true) => Some(prefix),
            (true, false) => Some(suffix),
            (false, false) => {
                return Err(MoneyError::Format(format!(
                    "'{text}' has text on both sides of the amount"
                )));
            }
        };

        Ok(Self {
            negative,
            currency,
            number,
        })
    }
}

/// Formats and parses money for one culture against one registry.
///
/// ```
/// use coinage_core::currency::CurrencyRegistry;
/// use coinage_core::format::{Culture, MoneyFormatter};
/// use coinage_core::money::Money;
/// use rust_decimal_macros::dec;
///
/// let registry = CurrencyRegistry::new();
/// let formatter = MoneyFormatter::new(&registry, &Culture::NL_NL);
/// let euros = Money::euro(dec!(1234.5));
/// let text = formatter.format(&euros, "C").unwrap();
/// assert_eq!(text, "€ 1.234,50");
/// assert_eq!(formatter.parse(&text).unwrap(), euros);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MoneyFormatter<'r> {
    registry: &'r CurrencyRegistry,
    culture: Culture,
}

impl<'r> MoneyFormatter<'r> {
    /// Creates a formatter for `culture`.
    #[must_use]
    pub fn new(registry: &'r CurrencyRegistry, culture: &Culture) -> Self {
        Self {
            registry,
            culture: *culture,
        }
    }

    /// Creates a formatter for the configured default culture.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the configured culture is unknown or
    /// neutral.
    pub fn from_config(
        registry: &'r CurrencyRegistry,
        config: &FormattingConfig,
    ) -> MoneyResult<Self> {
        let culture = Culture::from_name(&config.default_culture)?;
        Ok(Self::new(registry, &culture))
    }

    /// Culture used by this formatter.
    #[must_use]
    pub const fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Formats `money` with a specifier such as `"C"`, `"I2"` or `"N0"`.
    ///
    /// # Errors
    ///
    /// Returns `Format` for an unknown specifier, and `UnknownCurrencyCode`
    /// when the symbol or name is needed but the currency is no longer
    /// registered.
    pub fn format(&self, money: &Money, spec: &str) -> MoneyResult<String> {
        let spec = FormatSpec::parse(spec)?;
        let digits = spec.digits.or(match money.minor_unit() {
            MinorUnit::NotApplicable => None,
            unit => Some(unit.decimal_digits()),
        });
        let number = self.culture.format_magnitude(money.amount(), digits);
        let placement = self.culture.symbol_placement();

        let body = match spec.style {
            Style::Symbol => {
                let info = self.registry.get_currency(&money.currency())?;
                placement.apply(&info.symbol, &number)
            }
            Style::Code => placement
                .spaced()
                .apply(money.currency().code().as_str(), &number),
            Style::EnglishName => {
                let info = self.registry.get_currency(&money.currency())?;
                format!("{number} {}", info.english_name)
            }
            Style::Number => number,
        };

        let shown_as_zero = digits.is_some_and(|digits| {
            money
                .amount()
                .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
                .is_zero()
        });
        if money.is_negative() && !shown_as_zero {
            Ok(format!("-{body}"))
        } else {
            Ok(body)
        }
    }

    /// Parses text such as `"$1,234.56"`, `"EUR 10"` or `"-1.234,50 €"`.
    ///
    /// A symbol shared by several currencies resolves to the culture's own
    /// currency when it is one of them. Text without a currency token uses
    /// the culture's currency.
    ///
    /// # Errors
    ///
    /// Returns `Format` for malformed numbers, unknown or ambiguous currency
    /// tokens, or a missing token in a culture without a region.
    pub fn parse(&self, text: &str) -> MoneyResult<Money> {
        let tokens = Tokens::split(text)?;
        let home = self.home_currency();
        let info = match tokens.currency {
            Some(token) => self.resolve_token(token, home)?,
            None => {
                let home = home.ok_or_else(|| {
                    MoneyError::Format(format!(
                        "'{text}' has no currency and culture {} has no region",
                        self.culture
                    ))
                })?;
                self.registry.get_currency(&home)?
            }
        };
        self.build(&tokens, &info, text)
    }

    /// Parses text that must denote `currency`. A token, when present, has to
    /// resolve to it; ambiguous symbols are resolved in its favour.
    ///
    /// # Errors
    ///
    /// Returns `Format` for malformed text or a token naming another
    /// currency.
    pub fn parse_in(&self, text: &str, currency: &Currency) -> MoneyResult<Money> {
        let tokens = Tokens::split(text)?;
        let info = match tokens.currency {
            Some(token) => {
                let info = self.resolve_token(token, Some(*currency))?;
                if info.currency() != *currency {
                    return Err(MoneyError::Format(format!(
                        "'{text}' is in {}, expected {currency}",
                        info.code
                    )));
                }
                info
            }
            None => self.registry.get_currency(currency)?,
        };
        self.build(&tokens, &info, text)
    }

    /// Like [`parse`](Self::parse), but returns `None` on failure.
    #[must_use]
    pub fn try_parse(&self, text: &str) -> Option<Money> {
        self.parse(text).ok()
    }

    fn home_currency(&self) -> Option<Currency> {
        Currency::from_culture(&self.culture, self.registry).ok()
    }

    fn build(&self, tokens: &Tokens<'_>, info: &CurrencyInfo, text: &str) -> MoneyResult<Money> {
        let magnitude = self
            .culture
            .parse_decimal(tokens.number)
            .ok_or_else(|| MoneyError::Format(format!("'{text}' is not a valid amount")))?;
        let amount = if tokens.negative { -magnitude } else { magnitude };
        Ok(Money::new(amount, info))
    }

    fn resolve_token(
        &self,
        token: &str,
        preferred: Option<Currency>,
    ) -> MoneyResult<Arc<CurrencyInfo>> {
        if token.len() == 3
            && token.chars().all(|ch| ch.is_ascii_uppercase())
            && let Some(info) = self.registry.try_get(token)
        {
            return Ok(info);
        }

        let mut candidates: Vec<_> = self
            .registry
            .currencies_with_symbol(token)
            .into_iter()
            .filter(|info| !info.is_historic())
            .collect();
        if candidates.is_empty() {
            candidates = self
                .registry
                .all_currencies()
                .into_iter()
                .filter(|info| info.english_name.eq_ignore_ascii_case(token))
                .collect();
        }

        match candidates.len() {
            0 => Err(MoneyError::Format(format!(
                "'{token}' is not a known currency code or symbol"
            ))),
            1 => Ok(candidates.swap_remove(0)),
            _ => preferred
                .and_then(|preferred| {
                    candidates
                        .into_iter()
                        .find(|info| info.currency() == preferred)
                })
                .ok_or_else(|| {
                    MoneyError::Format(format!(
                        "currency symbol '{token}' is ambiguous in culture {}",
                        self.culture
                    ))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyBuilder;
    use rust_decimal::Decimal;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    // =========================================================================
    // format tests
    // =========================================================================

    #[rstest]
    #[case(Culture::EN_US, "C", "$1,234.56")]
    #[case(Culture::EN_US, "", "$1,234.56")]
    #[case(Culture::EN_US, "G", "$1,234.56")]
    #[case(Culture::EN_US, "C0", "$1,235")]
    #[case(Culture::EN_US, "C4", "$1,234.5600")]
    #[case(Culture::EN_US, "I", "USD 1,234.56")]
    #[case(Culture::EN_US, "F", "1,234.56 United States dollar")]
    #[case(Culture::EN_US, "N1", "1,234.6")]
    #[case(Culture::DE_DE, "C", "1.234,56 $")]
    #[case(Culture::DE_DE, "i", "1.234,56 USD")]
    fn test_format_dollars(#[case] culture: Culture, #[case] spec: &str, #[case] expected: &str) {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &culture);
        let dollars = Money::us_dollar(dec!(1234.56));
        assert_eq!(formatter.format(&dollars, spec).unwrap(), expected);
    }

    #[rstest]
    #[case("X")]
    #[case("C5")]
    #[case("Cx")]
    #[case("G2")]
    fn test_format_rejects_specifier(#[case] spec: &str) {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &Culture::EN_US);
        let result = formatter.format(&Money::euro(dec!(1)), spec);
        assert!(matches!(result, Err(MoneyError::Format(_))));
    }

    #[test]
    fn test_format_uses_currency_digits() {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &Culture::EN_US);
        let dinars = registry.money(dec!(1.5), "BHD").unwrap();
        assert_eq!(formatter.format(&dinars, "C").unwrap(), "BD1.500");
        assert_eq!(
            formatter.format(&Money::yen(dec!(1000)), "I").unwrap(),
            "JPY 1,000"
        );
    }

    #[test]
    fn test_format_negative() {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &Culture::NL_NL);
        let euros = Money::euro(dec!(-10.5));
        assert_eq!(formatter.format(&euros, "C").unwrap(), "-€ 10,50");
        assert_eq!(
            formatter.format(&Money::euro(dec!(-0.004)), "C").unwrap(),
            "€ 0,00"
        );
        assert_eq!(
            formatter.format(&Money::euro(dec!(-0.01)), "C0").unwrap(),
            "€ 0"
        );
    }

    // =========================================================================
    // parse tests
    // =========================================================================

    #[rstest]
    #[case(Culture::EN_US, "$1,234.56", "USD", dec!(1234.56))]
    #[case(Culture::EN_US, "-$10.00", "USD", dec!(-10))]
    #[case(Culture::EN_US, "($10.00)", "USD", dec!(-10))]
    #[case(Culture::EN_US, "EUR 10", "EUR", dec!(10))]
    #[case(Culture::EN_US, "10 Euro", "EUR", dec!(10))]
    #[case(Culture::EN_US, "1,234.5", "USD", dec!(1234.5))]
    #[case(Culture::NL_NL, "€ -1.234,50", "EUR", dec!(-1234.5))]
    #[case(Culture::DE_DE, "1.234,56 €", "EUR", dec!(1234.56))]
    #[case(Culture::JA_JP, "¥1,000", "JPY", dec!(1000))]
    #[case(Culture::ZH_CN, "¥1,000.10", "CNY", dec!(1000.1))]
    #[case(Culture::EN_GB, "£5", "GBP", dec!(5))]
    fn test_parse(
        #[case] culture: Culture,
        #[case] text: &str,
        #[case] code: &str,
        #[case] amount: Decimal,
    ) {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &culture);
        let expected = registry.money(amount, code).unwrap();
        assert_eq!(formatter.parse(text).unwrap(), expected);
    }

    #[test]
    fn test_parse_rounds_into_currency() {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &Culture::JA_JP);
        assert_eq!(formatter.parse("¥10.5").unwrap(), Money::yen(dec!(10)));
    }

    #[rstest]
    #[case(Culture::EN_US, "")]
    #[case(Culture::EN_US, "$")]
    #[case(Culture::EN_US, "$1.2.3")]
    #[case(Culture::EN_US, "ZZZ 10")]
    #[case(Culture::EN_US, "$ 10 USD")]
    #[case(Culture::EN_GB, "$10")]
    #[case(Culture::INVARIANT, "10")]
    fn test_parse_failures(#[case] culture: Culture, #[case] text: &str) {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &culture);
        let result = formatter.parse(text);
        assert!(
            result.as_ref().is_err_and(MoneyError::is_format_error),
            "expected format error for {text:?}, got {result:?}"
        );
        assert!(formatter.try_parse(text).is_none());
    }

    #[test]
    fn test_parse_in() {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &Culture::EN_GB);
        let dollars = Currency::from_code("USD", &registry).unwrap();

        assert_eq!(
            formatter.parse_in("$10", &dollars).unwrap(),
            Money::us_dollar(dec!(10))
        );
        assert_eq!(
            formatter.parse_in("10", &dollars).unwrap(),
            Money::us_dollar(dec!(10))
        );
        assert!(matches!(
            formatter.parse_in("£10", &dollars),
            Err(MoneyError::Format(_))
        ));
    }

    #[test]
    fn test_parse_custom_symbol() {
        let registry = CurrencyRegistry::new();
        CurrencyBuilder::new("BTC", "CRYPTO")
            .english_name("Bitcoin")
            .symbol("₿")
            .minor_unit(MinorUnit::decimal_places(8).unwrap())
            .register(&registry)
            .unwrap();
        let formatter = MoneyFormatter::new(&registry, &Culture::EN_US);

        let coins = formatter.parse("₿0.00012345").unwrap();
        assert_eq!(coins.currency().code().as_str(), "BTC");
        assert_eq!(coins.amount(), dec!(0.00012345));
        assert_eq!(formatter.format(&coins, "C").unwrap(), "₿0.00012345");
    }

    #[rstest]
    #[case(Culture::EN_US, "USD", dec!(-1234567.89))]
    #[case(Culture::NL_NL, "EUR", dec!(0.01))]
    #[case(Culture::DE_DE, "EUR", dec!(1000000))]
    #[case(Culture::FR_FR, "EUR", dec!(98765.43))]
    #[case(Culture::DE_CH, "CHF", dec!(1234.5))]
    #[case(Culture::JA_JP, "JPY", dec!(-5000))]
    #[case(Culture::EN_US, "BHD", dec!(12.345))]
    fn test_symbol_round_trip(
        #[case] culture: Culture,
        #[case] code: &str,
        #[case] amount: Decimal,
    ) {
        let registry = CurrencyRegistry::new();
        let formatter = MoneyFormatter::new(&registry, &culture);
        let money = registry.money(amount, code).unwrap();
        let text = formatter.format(&money, "C").unwrap();
        assert_eq!(formatter.parse(&text).unwrap(), money, "round trip of {text}");
    }

    #[test]
    fn test_from_config() {
        let registry = CurrencyRegistry::new();
        let config = FormattingConfig {
            default_culture: "de-DE".to_string(),
        };
        let formatter = MoneyFormatter::from_config(&registry, &config).unwrap();
        assert_eq!(*formatter.culture(), Culture::DE_DE);

        let neutral = FormattingConfig {
            default_culture: "de".to_string(),
        };
        assert!(MoneyFormatter::from_config(&registry, &neutral).is_err());
    }
}
