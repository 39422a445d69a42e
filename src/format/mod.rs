//! Display strings for amounts, percentages and goal horizons.

use serde::{Deserialize, Serialize};

use crate::formulas::Horizon;

const NEVER_LABEL: &str = "Never (payment too low)";

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 tag; unknown tags fall back to `en-US` separators.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag {
            "de-DE" | "es-ES" | "it-IT" | "pt-BR" | "nl-NL" => (',', '.'),
            "fr-FR" | "fr-CA" | "sv-SE" => (',', ' '),
            "de-CH" => ('.', '\''),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FormatOptions {
    pub negative_style: NegativeStyle,
    pub screen_reader_mode: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

/// Everything needed to render amounts for one user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatSettings {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub options: FormatOptions,
}

impl FormatSettings {
    pub fn currency(&self, amount: f64) -> String {
        format_currency_value(amount, &self.currency, &self.locale, &self.options)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let mut out = format!("{}{}", sign, group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let unsigned = format!("{}{}", symbol_for(code.as_str()), body);
    let negative = amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    if options.screen_reader_mode {
        return if negative {
            format!("minus {}", unsigned)
        } else {
            unsigned
        };
    }
    match (negative, options.negative_style) {
        (false, _) => unsigned,
        (true, NegativeStyle::Sign) => format!("-{}", unsigned),
        (true, NegativeStyle::Parentheses) => format!("({})", unsigned),
    }
}

/// US dollar amount with default options, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    format_currency_value(
        amount,
        &CurrencyCode::default(),
        &LocaleConfig::default(),
        &FormatOptions::default(),
    )
}

/// `12.5%` style percentage; non-finite values read as zero.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.*}%", decimals, value)
}

/// Human reading of a goal horizon.
///
/// Horizons longer than `never_threshold_months` are reported as never
/// reached, the same as an unreachable one.
pub fn format_horizon(horizon: Horizon, never_threshold_months: u32) -> String {
    let months = match horizon {
        Horizon::Unreachable => return NEVER_LABEL.into(),
        Horizon::Months(0) => return "Complete".into(),
        Horizon::Months(months) if months > never_threshold_months => {
            return NEVER_LABEL.into()
        }
        Horizon::Months(months) => months,
    };
    if months == 1 {
        return "1 month".into();
    }
    if months < 12 {
        return format!("{} months", months);
    }
    let years = months / 12;
    let rest = months % 12;
    match (years, rest) {
        (1, 0) => "1 year".into(),
        (_, 0) => format!("{} years", years),
        _ => format!("{}y {}m", years, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_us_dollars() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-42.0), "-$42.00");
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }

    #[test]
    fn formats_with_locale_and_options() {
        let locale = LocaleConfig::for_tag("fr-FR");
        let options = FormatOptions {
            negative_style: NegativeStyle::Parentheses,
            screen_reader_mode: false,
        };
        let formatted = format_currency_value(-1234567.891, &CurrencyCode::new("eur"), &locale, &options);
        assert_eq!(formatted, "(€1 234 567,89)");
    }

    #[test]
    fn zero_decimal_currency_has_no_fraction() {
        let formatted = format_currency_value(
            1500.4,
            &CurrencyCode::new("JPY"),
            &LocaleConfig::default(),
            &FormatOptions::default(),
        );
        assert_eq!(formatted, "¥1,500");
    }

    #[test]
    fn screen_reader_spells_out_sign() {
        let options = FormatOptions {
            screen_reader_mode: true,
            ..FormatOptions::default()
        };
        let formatted =
            format_currency_value(-5.0, &CurrencyCode::default(), &LocaleConfig::default(), &options);
        assert_eq!(formatted, "minus $5.00");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(12.345, 1), "12.3%");
        assert_eq!(format_percentage(f64::INFINITY, 1), "0.0%");
    }

    #[test]
    fn horizons() {
        assert_eq!(format_horizon(Horizon::Months(0), 1200), "Complete");
        assert_eq!(format_horizon(Horizon::Months(1), 1200), "1 month");
        assert_eq!(format_horizon(Horizon::Months(7), 1200), "7 months");
        assert_eq!(format_horizon(Horizon::Months(12), 1200), "1 year");
        assert_eq!(format_horizon(Horizon::Months(36), 1200), "3 years");
        assert_eq!(format_horizon(Horizon::Months(38), 1200), "3y 2m");
        assert_eq!(format_horizon(Horizon::Months(1201), 1200), NEVER_LABEL);
        assert_eq!(format_horizon(Horizon::Unreachable, 1200), NEVER_LABEL);
    }
}
