//! Built-in cultures: number separators, symbol placement, home region.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::region;
use crate::error::{MoneyError, MoneyResult};

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Prefix,
    /// `€ 1,00`
    PrefixWithSpace,
    /// `1,00€`
    Suffix,
    /// `1,00 €`
    SuffixWithSpace,
}

impl SymbolPlacement {
    /// Same side, always separated by a space. Used for ISO codes.
    #[must_use]
    pub const fn spaced(self) -> Self {
        match self {
            Self::Prefix | Self::PrefixWithSpace => Self::PrefixWithSpace,
            Self::Suffix | Self::SuffixWithSpace => Self::SuffixWithSpace,
        }
    }

    pub(crate) fn apply(self, token: &str, number: &str) -> String {
        match self {
            Self::Prefix => format!("{token}{number}"),
            Self::PrefixWithSpace => format!("{token} {number}"),
            Self::Suffix => format!("{number}{token}"),
            Self::SuffixWithSpace => format!("{number} {token}"),
        }
    }
}

/// Number and currency conventions of one culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    name: &'static str,
    decimal_separator: char,
    group_separator: char,
    symbol_placement: SymbolPlacement,
    region: Option<&'static str>,
}

impl Culture {
    /// Culture-independent conventions. Has no home region.
    pub const INVARIANT: Self = Self::new("", '.', ',', SymbolPlacement::Prefix, None);
    /// English (United States).
    pub const EN_US: Self = Self::new("en-US", '.', ',', SymbolPlacement::Prefix, Some("US"));
    /// English (United Kingdom).
    pub const EN_GB: Self = Self::new("en-GB", '.', ',', SymbolPlacement::Prefix, Some("GB"));
    /// Dutch (Netherlands).
    pub const NL_NL: Self = Self::new(
        "nl-NL",
        ',',
        '.',
        SymbolPlacement::PrefixWithSpace,
        Some("NL"),
    );
    /// German (Germany).
    pub const DE_DE: Self = Self::new(
        "de-DE",
        ',',
        '.',
        SymbolPlacement::SuffixWithSpace,
        Some("DE"),
    );
    /// French (France). Groups with a narrow no-break space.
    pub const FR_FR: Self = Self::new(
        "fr-FR",
        ',',
        '\u{202F}',
        SymbolPlacement::SuffixWithSpace,
        Some("FR"),
    );
    /// Japanese (Japan).
    pub const JA_JP: Self = Self::new("ja-JP", '.', ',', SymbolPlacement::Prefix, Some("JP"));
    /// Chinese (Simplified, China).
    pub const ZH_CN: Self = Self::new("zh-CN", '.', ',', SymbolPlacement::Prefix, Some("CN"));
    /// German (Switzerland). Groups with a right single quotation mark.
    pub const DE_CH: Self = Self::new(
        "de-CH",
        '.',
        '\u{2019}',
        SymbolPlacement::PrefixWithSpace,
        Some("CH"),
    );

    const BUILT_IN: [Self; 9] = [
        Self::INVARIANT,
        Self::EN_US,
        Self::EN_GB,
        Self::NL_NL,
        Self::DE_DE,
        Self::FR_FR,
        Self::JA_JP,
        Self::ZH_CN,
        Self::DE_CH,
    ];

    const fn new(
        name: &'static str,
        decimal_separator: char,
        group_separator: char,
        symbol_placement: SymbolPlacement,
        region: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            decimal_separator,
            group_separator,
            symbol_placement,
            region,
        }
    }

    /// Looks up a built-in culture by name, case-insensitively.
    ///
    /// `""` and `"invariant"` give [`Culture::INVARIANT`]; `_` is accepted
    /// in place of `-`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for neutral names such as `"en"` and for
    /// cultures that are not built in.
    pub fn from_name(name: &str) -> MoneyResult<Self> {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("invariant") {
            return Ok(Self::INVARIANT);
        }
        let normalized = name.replace('_', "-");
        if let Some(culture) = Self::BUILT_IN
            .iter()
            .find(|culture| culture.name.eq_ignore_ascii_case(&normalized))
        {
            return Ok(*culture);
        }
        if region::region_of_culture(name).is_none() {
            return Err(MoneyError::InvalidArgument(format!(
                "culture '{name}' is neutral, a specific culture is required"
            )));
        }
        Err(MoneyError::InvalidArgument(format!(
            "culture '{name}' is not supported"
        )))
    }

    /// Culture name, empty for the invariant culture.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Character between the integer and fractional digits.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Character between groups of three integer digits.
    #[must_use]
    pub const fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Where the currency symbol goes.
    #[must_use]
    pub const fn symbol_placement(&self) -> SymbolPlacement {
        self.symbol_placement
    }

    /// ISO-3166 alpha-2 home region, `None` for the invariant culture.
    #[must_use]
    pub const fn region(&self) -> Option<&'static str> {
        self.region
    }

    /// Formats the magnitude of `amount` with grouping and this culture's
    /// separators. `None` digits keep the amount's own scale.
    #[must_use]
    pub fn format_magnitude(&self, amount: Decimal, digits: Option<u32>) -> String {
        let magnitude = amount.abs();
        let text = match digits {
            Some(digits) => {
                let rounded =
                    magnitude.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
                format!("{rounded:.precision$}", precision = digits as usize)
            }
            None => magnitude.to_string(),
        };
        let (integer, fraction) = text
            .split_once('.')
            .map_or((text.as_str(), None), |(integer, fraction)| {
                (integer, Some(fraction))
            });

        let mut out = group_digits(integer, self.group_separator);
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    /// Formats a plain decimal with this culture's decimal separator and no
    /// grouping.
    #[must_use]
    pub fn format_plain(&self, value: Decimal) -> String {
        value.to_string().replace('.', &self.decimal_separator.to_string())
    }

    /// Parses a number written in this culture. Group separators are only
    /// allowed before the decimal separator.
    #[must_use]
    pub fn parse_decimal(&self, text: &str) -> Option<Decimal> {
        let text = text.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let mut normalized = String::with_capacity(unsigned.len());
        let mut seen_decimal = false;
        let mut seen_digit = false;
        for ch in unsigned.chars() {
            if ch.is_ascii_digit() {
                seen_digit = true;
                normalized.push(ch);
            } else if ch == self.decimal_separator && !seen_decimal {
                seen_decimal = true;
                normalized.push('.');
            } else if !self.is_group_separator(ch) || seen_decimal || !seen_digit {
                return None;
            }
        }
        if !seen_digit {
            return None;
        }

        let value = Decimal::from_str(&normalized).ok()?;
        Some(if negative { -value } else { value })
    }

    fn is_group_separator(&self, ch: char) -> bool {
        ch == self.group_separator || (self.group_separator.is_whitespace() && ch.is_whitespace())
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            f.write_str("invariant")
        } else {
            f.write_str(self.name)
        }
    }
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
