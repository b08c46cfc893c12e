//! Recalculation flow tying raw form input to both calculators.
//!
//! All mutable UI state lives in [`SessionState`], which is passed into
//! [`recalculate`] and handed back, so the calculators stay pure.

pub mod rows;

use serde::{Deserialize, Serialize};

use crate::{
    currency::{
        calculate_by_currency, convert_to_currency, AmountWithCurrency, ByCurrency, Currency,
        UsedCurrencies,
    },
    errors::{Result, SwitcherError},
    numeric::{amount_or_zero, count_or_one, parse_decimal, round},
    period::{calculate_by_period, AmountWithPeriod, ByPeriod, Period, PeriodKind},
    storage::KeyValueStore,
};

pub use rows::{currency_rows, period_rows, SwitcherRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState<P = Period> {
    pub selected_period: P,
    pub selected_currency: Currency,
    /// Currency the displayed price should be converted from on the next recalculation.
    pub pending_switch_from: Option<Currency>,
    pub used_currencies: UsedCurrencies,
}

impl<P: PeriodKind> SessionState<P> {
    pub fn new(period: P, currency: Currency, used_currencies: UsedCurrencies) -> Self {
        Self {
            selected_period: period,
            selected_currency: currency,
            pending_switch_from: None,
            used_currencies,
        }
    }

    /// Arms a price conversion from the currently selected currency.
    pub fn request_currency_switch(&mut self) {
        self.pending_switch_from = Some(self.selected_currency);
    }

    pub fn toggle_currency(
        &mut self,
        currency: Currency,
        store: &mut dyn KeyValueStore,
    ) -> Result<()> {
        self.used_currencies.toggle(currency, store)
    }
}

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput<P = Period> {
    pub price: String,
    #[serde(default)]
    pub count: String,
    pub period: Option<P>,
    pub currency: Option<Currency>,
}

impl<P: PeriodKind> RawInput<P> {
    /// Builds input from untyped selections, rejecting names outside the enums.
    pub fn parse(
        price: impl Into<String>,
        count: impl Into<String>,
        period: Option<&str>,
        currency: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            price: price.into(),
            count: count.into(),
            period: period.map(str::parse).transpose()?,
            currency: currency.map(str::parse).transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recalculation<P: PeriodKind = Period> {
    /// Price text to show in the input field, rewritten after a currency switch.
    pub price: String,
    pub price_rewritten: bool,
    pub amount: f64,
    pub by_period: ByPeriod<P>,
    pub by_currency: ByCurrency,
}

/// Runs one full recalculation from scratch.
///
/// A pending currency switch converts the typed price into the newly selected
/// currency first, and is cleared whether or not a price was present.
pub fn recalculate<P: PeriodKind>(
    mut state: SessionState<P>,
    input: &RawInput<P>,
) -> Result<(SessionState<P>, Recalculation<P>)> {
    let period = input.period.ok_or(SwitcherError::MissingSelection("period"))?;
    let currency = input
        .currency
        .ok_or(SwitcherError::MissingSelection("currency"))?;

    state.selected_period = period;
    state.selected_currency = currency;

    let mut price = input.price.clone();
    let mut price_rewritten = false;
    if let Some(from) = state.pending_switch_from.take() {
        let parsed = parse_decimal(&price);
        if !price.is_empty() && !parsed.is_nan() {
            let converted =
                round(convert_to_currency(AmountWithCurrency::new(parsed, from).to(currency)));
            tracing::info!(%from, to = %currency, parsed, converted, "converted price to new currency");
            price = converted.to_string();
            price_rewritten = true;
        }
    }

    let count = count_or_one(parse_decimal(&input.count));
    let amount = amount_or_zero(parse_decimal(&price) * count);

    let by_period = calculate_by_period(AmountWithPeriod::new(amount, period));
    let by_currency = calculate_by_currency(currency, amount);

    Ok((
        state,
        Recalculation {
            price,
            price_rewritten,
            amount,
            by_period,
            by_currency,
        },
    ))
}
