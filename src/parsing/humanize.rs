//! Scanner for humanized coordinate tokens.
//!
//! A token is a run of digits, optionally grouped with `,` every three digits,
//! optionally followed by a case-insensitive unit suffix:
//!
//! | Suffix      | Multiplier      |
//! |-------------|-----------------|
//! | (none)      | 1               |
//! | `k`, `kb`   | 1,000           |
//! | `M`, `Mb`   | 1,000,000       |
//! | `G`, `Gb`   | 1,000,000,000   |
//!
//! Grouping and a suffix may be combined (`1,000kb`). A decimal fraction is
//! accepted only together with a suffix, and only if the scaled value is a
//! whole number of bases (`1.5kb` is 1500, `1.0005kb` is rejected).

use thiserror::Error;

const GROUP_SEPARATOR: char = ',';
const DECIMAL_POINT: char = '.';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("no digits")]
    Empty,

    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),

    #[error("digits must be grouped in threes between commas")]
    BadGrouping,

    #[error("unknown unit suffix '{0}'")]
    UnknownUnit(String),

    #[error("a decimal fraction requires a unit suffix")]
    FractionWithoutUnit,

    #[error("fraction is finer than one base at unit '{0}'")]
    FractionTooPrecise(Unit),

    #[error("value does not fit in a 64-bit coordinate")]
    Overflow,
}

/// Unit suffix of a humanized number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Base,
    Kilo,
    Mega,
    Giga,
}

impl Unit {
    /// Parse a unit suffix, ignoring case. The empty suffix is [`Unit::Base`].
    #[must_use]
    pub fn parse(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "" => Some(Self::Base),
            "k" | "kb" => Some(Self::Kilo),
            "m" | "mb" => Some(Self::Mega),
            "g" | "gb" => Some(Self::Giga),
            _ => None,
        }
    }

    /// Power of ten this unit scales by
    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Base => 0,
            Self::Kilo => 3,
            Self::Mega => 6,
            Self::Giga => 9,
        }
    }

    #[must_use]
    pub const fn multiplier(self) -> u64 {
        10u64.pow(self.exponent())
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "b"),
            Self::Kilo => write!(f, "kb"),
            Self::Mega => write!(f, "Mb"),
            Self::Giga => write!(f, "Gb"),
        }
    }
}

/// Parse a humanized number such as `1,000`, `2M` or `1.5kb`.
///
/// # Examples
///
/// ```
/// use region_parser::parsing::humanize::parse_humanized;
///
/// assert_eq!(parse_humanized("1,000").unwrap(), 1000);
/// assert_eq!(parse_humanized("2M").unwrap(), 2_000_000);
/// assert_eq!(parse_humanized("1.5kb").unwrap(), 1500);
/// assert!(parse_humanized("10,00").is_err());
/// ```
///
/// # Errors
///
/// Returns a `NumberError` describing the first problem found in the token.
pub fn parse_humanized(token: &str) -> Result<u64, NumberError> {
    let numeric_len = token
        .find(|c: char| !(c.is_ascii_digit() || c == GROUP_SEPARATOR || c == DECIMAL_POINT))
        .unwrap_or(token.len());
    let (numeric, suffix) = token.split_at(numeric_len);

    if numeric.is_empty() {
        return match suffix.chars().next() {
            Some(c) if !c.is_alphabetic() => Err(NumberError::InvalidCharacter(c)),
            _ => Err(NumberError::Empty),
        };
    }

    let unit = Unit::parse(suffix).ok_or_else(|| match suffix.chars().next() {
        Some(c) if !c.is_alphabetic() => NumberError::InvalidCharacter(c),
        _ => NumberError::UnknownUnit(suffix.to_string()),
    })?;

    let (whole, fraction) = match numeric.split_once(DECIMAL_POINT) {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (numeric, None),
    };

    let whole = strip_grouping(whole)?;
    let mut value = parse_digits(&whole)?
        .checked_mul(unit.multiplier())
        .ok_or(NumberError::Overflow)?;

    if let Some(fraction) = fraction {
        value = value
            .checked_add(scale_fraction(fraction, unit)?)
            .ok_or(NumberError::Overflow)?;
    }

    Ok(value)
}

/// Remove `,` group separators, checking that every group after the first
/// has exactly three digits and the first has one to three.
fn strip_grouping(digits: &str) -> Result<String, NumberError> {
    if digits.is_empty() {
        return Err(NumberError::Empty);
    }

    if !digits.contains(GROUP_SEPARATOR) {
        return Ok(digits.to_string());
    }

    let mut groups = digits.split(GROUP_SEPARATOR);
    let first = groups.next().unwrap_or_default();
    if first.is_empty() || first.len() > 3 {
        return Err(NumberError::BadGrouping);
    }

    let mut stripped = String::with_capacity(digits.len());
    stripped.push_str(first);
    for group in groups {
        if group.len() != 3 {
            return Err(NumberError::BadGrouping);
        }
        stripped.push_str(group);
    }

    Ok(stripped)
}

/// Value in bases of the digits after the decimal point at the given unit.
fn scale_fraction(fraction: &str, unit: Unit) -> Result<u64, NumberError> {
    if unit == Unit::Base {
        return Err(NumberError::FractionWithoutUnit);
    }

    if let Some(c) = fraction
        .chars()
        .find(|&c| c == GROUP_SEPARATOR || c == DECIMAL_POINT)
    {
        return Err(NumberError::InvalidCharacter(c));
    }

    if fraction.is_empty() {
        return Err(NumberError::InvalidCharacter(DECIMAL_POINT));
    }

    let significant = fraction.trim_end_matches('0');
    let places = u32::try_from(significant.len())
        .map_err(|_| NumberError::FractionTooPrecise(unit))?;
    if places > unit.exponent() {
        return Err(NumberError::FractionTooPrecise(unit));
    }

    if significant.is_empty() {
        return Ok(0);
    }

    Ok(parse_digits(significant)? * 10u64.pow(unit.exponent() - places))
}

fn parse_digits(digits: &str) -> Result<u64, NumberError> {
    // Callers only pass non-empty ASCII digit runs, so overflow is the only failure
    digits.parse().map_err(|_| NumberError::Overflow)
}
