//! Locale-aware currency formatting.
//!
//! Amounts are rounded to whole units (no fractional digits) and rendered with the
//! digit grouping and symbol placement of a [`DisplayLocale`]. Currencies the
//! formatter does not know, and non-finite amounts, are rejected by
//! [`try_format_price`]; [`format_price`] turns any such rejection into the plain
//! text `"<currency> <amount>"`.

use crate::domain::error::{Result, TourfinderError};
use std::fmt;
use std::str::FromStr;

/// No-break space used between a currency code and its amount.
const NBSP: char = '\u{a0}';

/// Currencies the formatter can render.
const SUPPORTED_CURRENCIES: &[&str] = &[
    "AED", "AUD", "BDT", "CAD", "CHF", "CNY", "EUR", "GBP", "INR", "JPY", "LKR", "MYR",
    "NPR", "NZD", "PKR", "SAR", "SGD", "THB", "USD",
];

/// Locale that controls digit grouping and symbol placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayLocale {
    /// `$15,000`, `BDT 15,000`
    #[default]
    EnUs,
    /// `US$15,000`, `£15,000`
    EnGb,
    /// Lakh grouping: `₹1,50,000`, `BDT 1,50,000`
    EnIn,
    /// `15.000 €`, `15.000 BDT`
    DeDe,
}

impl DisplayLocale {
    /// Reads the locale from `LC_ALL`, `LC_MONETARY` or `LANG`, in that order.
    ///
    /// Values such as `en_IN.UTF-8` are accepted. Unset or unknown locales give
    /// [`DisplayLocale::EnUs`].
    #[must_use]
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MONETARY", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::DeDe => "de-DE",
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Self::DeDe => '.',
            Self::EnUs | Self::EnGb | Self::EnIn => ',',
        }
    }

    /// Symbol for `currency`, or `None` when the locale writes the ISO code.
    fn symbol(self, currency: &str) -> Option<&'static str> {
        let symbol = match (self, currency) {
            (Self::EnGb, "USD") => "US$",
            (_, "USD") => "$",
            (_, "GBP") => "£",
            (_, "EUR") => "€",
            (_, "CAD") => "CA$",
            (Self::DeDe, "AUD") => "AU$",
            (_, "AUD") => "A$",
            (_, "INR") => "₹",
            (Self::EnUs | Self::DeDe, "JPY") => "¥",
            (_, "JPY") => "JP¥",
            (_, "CNY") => "CN¥",
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DisplayLocale {
    type Err = String;

    /// Accepts `en-US`, `en_US`, `en_US.UTF-8` and similar spellings.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let base = s.split('.').next().unwrap_or(s).replace('_', "-");
        match base.to_ascii_lowercase().as_str() {
            "en-us" | "en" | "c" | "posix" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "en-in" | "bn-bd" | "bn-in" => Ok(Self::EnIn),
            "de-de" | "de" => Ok(Self::DeDe),
            _ => Err(format!("unsupported locale: {s}")),
        }
    }
}

/// Formats `amount` in `currency` for the default locale, never failing.
///
/// # Examples
///
/// ```
/// use tourfinder::locale::format_price;
///
/// assert_eq!(format_price(15000.0, "USD"), "$15,000");
/// assert_eq!(format_price(1000.0, "ZZZ"), "ZZZ 1000");
/// ```
#[must_use]
pub fn format_price(amount: f64, currency: &str) -> String {
    format_price_in(DisplayLocale::default(), amount, currency)
}

/// Formats `amount` in `currency` for `locale`, never failing.
///
/// Falls back to `"<currency> <amount>"` whenever [`try_format_price`] rejects its
/// input.
#[must_use]
pub fn format_price_in(locale: DisplayLocale, amount: f64, currency: &str) -> String {
    try_format_price(locale, amount, currency).unwrap_or_else(|e| {
        tracing::debug!(error = %e, currency = %currency, "price formatting failed, using fallback");
        format!("{currency} {amount}")
    })
}

/// Formats `amount` in `currency` for `locale`.
///
/// # Errors
///
/// Returns [`TourfinderError::Format`] if the currency is not a supported ISO 4217
/// code or the amount is NaN or infinite.
pub fn try_format_price(locale: DisplayLocale, amount: f64, currency: &str) -> Result<String> {
    if !SUPPORTED_CURRENCIES.contains(&currency) {
        return Err(TourfinderError::Format(format!("unsupported currency code: {currency}")));
    }
    if !amount.is_finite() {
        return Err(TourfinderError::Format(format!("amount is not finite: {amount}")));
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, locale);
    let sign = if rounded < 0.0 { "-" } else { "" };

    let formatted = match (locale, locale.symbol(currency)) {
        (DisplayLocale::DeDe, Some(symbol)) => format!("{sign}{grouped}{NBSP}{symbol}"),
        (DisplayLocale::DeDe, None) => format!("{sign}{grouped}{NBSP}{currency}"),
        (_, Some(symbol)) => format!("{sign}{symbol}{grouped}"),
        (_, None) => format!("{sign}{currency}{NBSP}{grouped}"),
    };

    Ok(formatted)
}

/// Inserts group separators into a string of ASCII digits.
fn group_digits(digits: &str, locale: DisplayLocale) -> String {
    let separator = locale.group_separator();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && is_group_boundary(remaining, locale) {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Whether a separator goes before a digit with `remaining` digits left (itself included).
const fn is_group_boundary(remaining: usize, locale: DisplayLocale) -> bool {
    match locale {
        // Thousands first, then every two digits: 12,34,56,789
        DisplayLocale::EnIn => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        DisplayLocale::EnUs | DisplayLocale::EnGb | DisplayLocale::DeDe => remaining % 3 == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_currency_falls_back_to_plain_text() {
        assert_eq!(format_price(1000.0, "ZZZ"), "ZZZ 1000");
        assert_eq!(format_price(1000.0, "usd"), "usd 1000");
        assert_eq!(format_price(12.5, ""), " 12.5");
        assert!(try_format_price(DisplayLocale::EnUs, 1000.0, "ZZZ").is_err());
    }

    #[test]
    fn non_finite_amount_falls_back() {
        assert_eq!(format_price(f64::NAN, "USD"), "USD NaN");
        assert!(try_format_price(DisplayLocale::EnUs, f64::INFINITY, "USD").is_err());
    }

    #[test]
    fn symbol_currencies_in_en_us() {
        assert_eq!(format_price(15000.0, "USD"), "$15,000");
        assert_eq!(format_price(999.0, "GBP"), "£999");
        assert_eq!(format_price(1_234_567.0, "EUR"), "€1,234,567");
        assert_eq!(format_price(0.0, "JPY"), "¥0");
    }

    #[test]
    fn code_currencies_use_no_break_space() {
        assert_eq!(format_price(15000.0, "BDT"), "BDT\u{a0}15,000");
        assert_eq!(format_price(250.0, "AED"), "AED\u{a0}250");
    }

    #[test]
    fn rounds_to_whole_units() {
        assert_eq!(format_price(1499.5, "USD"), "$1,500");
        assert_eq!(format_price(1499.49, "USD"), "$1,499");
        assert_eq!(format_price(-2500.0, "USD"), "-$2,500");
        assert_eq!(format_price(-0.4, "USD"), "$0");
    }

    #[test]
    fn indian_grouping() {
        let fmt = |amount| format_price_in(DisplayLocale::EnIn, amount, "INR");
        assert_eq!(fmt(100.0), "₹100");
        assert_eq!(fmt(1000.0), "₹1,000");
        assert_eq!(fmt(150_000.0), "₹1,50,000");
        assert_eq!(fmt(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_price_in(DisplayLocale::EnIn, 65000.0, "BDT"), "BDT\u{a0}65,000");
    }

    #[test]
    fn german_layout() {
        assert_eq!(format_price_in(DisplayLocale::DeDe, 15000.0, "EUR"), "15.000\u{a0}€");
        assert_eq!(format_price_in(DisplayLocale::DeDe, 15000.0, "BDT"), "15.000\u{a0}BDT");
        assert_eq!(format_price_in(DisplayLocale::DeDe, -5.0, "USD"), "-5\u{a0}$");
    }

    #[test]
    fn british_dollars() {
        assert_eq!(format_price_in(DisplayLocale::EnGb, 20.0, "USD"), "US$20");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("en_IN.UTF-8".parse::<DisplayLocale>(), Ok(DisplayLocale::EnIn));
        assert_eq!("de-DE".parse::<DisplayLocale>(), Ok(DisplayLocale::DeDe));
        assert_eq!("C".parse::<DisplayLocale>(), Ok(DisplayLocale::EnUs));
        assert!("fr-FR".parse::<DisplayLocale>().is_err());
        assert_eq!(DisplayLocale::EnGb.to_string(), "en-GB");
    }
}
