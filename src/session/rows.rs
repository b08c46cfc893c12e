use serde::Serialize;

use crate::{
    currency::{ByCurrency, Currency, UsedCurrencies},
    format::AmountFormatter,
    period::{ByPeriod, PeriodKind},
};

/// One option of a switcher table, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitcherRow<K> {
    pub option: K,
    pub label: &'static str,
    pub amount: f64,
    pub formatted: String,
    /// `false` marks a currency the user has hidden.
    pub used: bool,
}

pub fn period_rows<P: PeriodKind>(
    results: &ByPeriod<P>,
    formatter: &dyn AmountFormatter,
    precision: u8,
) -> Vec<SwitcherRow<P>> {
    results
        .iter()
        .map(|(period, amount)| SwitcherRow {
            option: period,
            label: period.as_str(),
            amount,
            formatted: formatter.format_amount(amount, precision),
            used: true,
        })
        .collect()
}

pub fn currency_rows(
    results: &ByCurrency,
    used: &UsedCurrencies,
    formatter: &dyn AmountFormatter,
    precision: u8,
) -> Vec<SwitcherRow<Currency>> {
    results
        .iter()
        .map(|(currency, amount)| SwitcherRow {
            option: currency,
            label: currency.code(),
            amount,
            formatted: formatter.format_amount(amount, precision),
            used: used.contains(currency),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        currency::calculate_by_currency,
        format::LocaleFormatter,
        period::{calculate_by_period, AmountWithPeriod, Period},
    };

    #[test]
    fn period_rows_follow_edition_order() {
        let results = calculate_by_period(AmountWithPeriod::new(100.0, Period::Monthly));
        let rows = period_rows(&results, &LocaleFormatter::default(), 0);

        let labels: Vec<&str> = rows.iter().map(|row| row.label).collect();
        assert_eq!(labels, ["once", "daily", "weekly", "monthly", "yearly"]);
        assert_eq!(rows[4].formatted, "1,200");
        assert!(rows.iter().all(|row| row.used));
    }

    #[test]
    fn currency_rows_flag_hidden_currencies() {
        let results = calculate_by_currency(Currency::Usd, 10.0);
        let used = UsedCurrencies::default();
        let rows = currency_rows(&results, &used, &LocaleFormatter::default(), 2);

        assert_eq!(rows.len(), Currency::ALL.len());
        let rub = rows.iter().find(|row| row.option == Currency::Rub).unwrap();
        assert!(rub.used);
        assert_eq!(rub.formatted, "923.02");
        let gel = rows.iter().find(|row| row.option == Currency::Gel).unwrap();
        assert!(!gel.used);
    }
}
