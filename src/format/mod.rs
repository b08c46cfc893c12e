//! Display formatting for calculated tables.

use serde::{Deserialize, Serialize};

/// Formats amounts for presentation. Implementations decide locale rules.
pub trait AmountFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, precision: u8) -> String;
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
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

#[derive(Debug, Clone, Default)]
pub struct LocaleFormatter {
    locale: LocaleConfig,
}

impl LocaleFormatter {
    pub fn new(locale: LocaleConfig) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }
}

impl AmountFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64, precision: u8) -> String {
        format_number(&self.locale, amount, precision)
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    // "-0.00" reads oddly in a table
    let sign = if digits.chars().chain(frac_part.unwrap_or("").chars()).all(|c| c == '0') {
        ""
    } else {
        sign
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_default_locale() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&locale, 1200.0, 0), "1,200");
        assert_eq!(format_number(&locale, 23.0, 0), "23");
    }

    #[test]
    fn honours_locale_separators() {
        let locale = LocaleConfig {
            language_tag: "de-DE".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        let formatter = LocaleFormatter::new(locale);
        assert_eq!(formatter.format_amount(923.02, 2), "923,02");
        assert_eq!(formatter.format_amount(-4321.5, 2), "-4.321,50");
    }

    #[test]
    fn drops_sign_of_negative_zero() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, -0.001, 2), "0.00");
        assert_eq!(format_number(&locale, -0.4, 0), "0");
    }
}
