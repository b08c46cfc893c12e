//! Static-rate currency conversion anchored to a single base currency.

pub mod used;

use std::{collections::BTreeMap, fmt, ops::Index, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::SwitcherError, numeric::round};

pub use used::{UsedCurrencies, DEFAULT_USED_CURRENCIES, USED_CURRENCIES_KEY};

/// Currency every rate is expressed against.
pub const BASE_CURRENCY: Currency = Currency::Eur;

/// Supported currency codes. The default is the base currency.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Rub,
    Gbp,
    Rsd,
    Amd,
    Gel,
    Tyr,
    Kzt,
    Thb,
    Aed,
    Sar,
}

impl Currency {
    pub const ALL: &'static [Currency] = &[
        Currency::Eur,
        Currency::Usd,
        Currency::Rub,
        Currency::Gbp,
        Currency::Rsd,
        Currency::Amd,
        Currency::Gel,
        Currency::Tyr,
        Currency::Kzt,
        Currency::Thb,
        Currency::Aed,
        Currency::Sar,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Rub => "RUB",
            Currency::Gbp => "GBP",
            Currency::Rsd => "RSD",
            Currency::Amd => "AMD",
            Currency::Gel => "GEL",
            Currency::Tyr => "TYR",
            Currency::Kzt => "KZT",
            Currency::Thb => "THB",
            Currency::Aed => "AED",
            Currency::Sar => "SAR",
        }
    }

    /// Units of this currency worth one unit of [`BASE_CURRENCY`].
    pub const fn rate(self) -> f64 {
        match self {
            Currency::Eur => 1.0,
            Currency::Usd => 1.086,
            Currency::Rsd => 117.2,
            Currency::Rub => 100.24,
            Currency::Amd => 430.92,
            Currency::Gel => 2.94,
            Currency::Tyr => 34.77,
            Currency::Kzt => 487.24,
            Currency::Aed => 3.99,
            Currency::Sar => 4.07,
            Currency::Thb => 39.40,
            Currency::Gbp => 0.86,
        }
    }

    pub fn is_base(self) -> bool {
        self == BASE_CURRENCY
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = SwitcherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Currency::ALL
            .iter()
            .copied()
            .find(|currency| currency.code().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SwitcherError::UnknownCurrency(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountWithCurrency {
    pub amount: f64,
    pub currency: Currency,
    #[serde(default)]
    pub target_currency: Currency,
}

impl AmountWithCurrency {
    /// Amount to be expressed in the base currency.
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            target_currency: BASE_CURRENCY,
        }
    }

    pub fn to(mut self, target_currency: Currency) -> Self {
        self.target_currency = target_currency;
        self
    }
}

/// Amount per currency, covering every supported currency exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ByCurrency(BTreeMap<Currency, f64>);

impl ByCurrency {
    pub fn get(&self, currency: Currency) -> f64 {
        self[currency]
    }

    /// Entries in [`Currency::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.0.iter().map(|(currency, amount)| (*currency, *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<Currency> for ByCurrency {
    type Output = f64;

    fn index(&self, currency: Currency) -> &f64 {
        &self.0[&currency]
    }
}

/// Converts through the base currency; there are no direct cross rates.
pub fn convert_to_currency(input: AmountWithCurrency) -> f64 {
    let base_amount = input.amount / input.currency.rate();
    if input.target_currency.is_base() {
        base_amount
    } else {
        base_amount * input.target_currency.rate()
    }
}

/// Computes the equivalent of `amount` in every supported currency.
///
/// Converted entries are rounded to two decimals; the source currency keeps
/// the exact input.
pub fn calculate_by_currency(currency: Currency, amount: f64) -> ByCurrency {
    let base_amount = convert_to_currency(AmountWithCurrency::new(amount, currency));

    let mut results: BTreeMap<Currency, f64> = Currency::ALL
        .iter()
        .map(|&target| (target, round(base_amount * target.rate())))
        .collect();
    results.insert(currency, amount);

    tracing::debug!(%currency, amount, base_amount, "calculated amounts by currency");
    ByCurrency(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9 * right.abs().max(1.0)
    }

    #[test]
    fn base_currency_has_unit_rate() {
        assert_eq!(BASE_CURRENCY.rate(), 1.0);
        assert!(Currency::Eur.is_base());
        assert!(!Currency::Usd.is_base());
        assert_eq!(Currency::default(), BASE_CURRENCY);
    }

    #[test]
    fn converts_to_base_by_default() {
        let eur = convert_to_currency(AmountWithCurrency::new(10.86, Currency::Usd));
        assert!(approx_eq(eur, 10.0));
    }

    #[test]
    fn converts_between_non_base_currencies_via_base() {
        let rub = convert_to_currency(AmountWithCurrency::new(10.0, Currency::Usd).to(Currency::Rub));
        assert!(approx_eq(rub, 10.0 / 1.086 * 100.24));
    }

    #[test]
    fn round_trip_through_same_currency_returns_amount() {
        for &currency in Currency::ALL {
            let amount = 1234.56;
            let converted = convert_to_currency(AmountWithCurrency::new(amount, currency).to(currency));
            if currency.is_base() {
                assert_eq!(converted, amount);
            } else {
                assert_eq!(converted, amount / currency.rate() * currency.rate());
            }
            assert!(approx_eq(converted, amount));
        }
    }

    #[test]
    fn usd_amount_spreads_over_currencies() {
        let results = calculate_by_currency(Currency::Usd, 10.0);
        assert_eq!(results[Currency::Usd], 10.0);
        assert_eq!(results[Currency::Eur], 9.21);
        assert_eq!(results[Currency::Rub], 923.02);
        assert_eq!(results.len(), Currency::ALL.len());
    }

    #[test]
    fn source_currency_is_echoed_exactly() {
        for &currency in Currency::ALL {
            for amount in [0.0, -3.333, 0.005, 99.999, 1e7] {
                let results = calculate_by_currency(currency, amount);
                assert_eq!(results[currency], amount);
            }
        }
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("TYR".parse::<Currency>().unwrap(), Currency::Tyr);
        assert!(matches!(
            "JPY".parse::<Currency>(),
            Err(SwitcherError::UnknownCurrency(code)) if code == "JPY"
        ));
    }

    #[test]
    fn serializes_codes_in_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Gel).unwrap(), "\"GEL\"");
        let parsed: AmountWithCurrency =
            serde_json::from_str(r#"{"amount": 5.0, "currency": "USD"}"#).unwrap();
        assert_eq!(parsed.target_currency, BASE_CURRENCY);
    }
}
