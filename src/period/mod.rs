//! Period normalization: annualize an amount and spread it over every period.

pub mod extended;
pub mod standard;

use std::{collections::BTreeMap, fmt, ops::Index, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::SwitcherError;

pub use extended::ExtendedPeriod;
pub use standard::Period;

/// A closed, ordered set of recurring-payment periods with its multiplier table.
pub trait PeriodKind:
    Copy + Ord + fmt::Debug + fmt::Display + FromStr<Err = SwitcherError> + Serialize + 'static
{
    /// Every period of the edition, in display order.
    const ALL: &'static [Self];
    /// The period whose value is the annualized amount itself.
    const YEARLY: Self;
    /// The non-recurring period, when the edition has one.
    const ONCE: Option<Self> = None;

    /// Occurrences of this period per year.
    fn multiplier(self) -> f64;

    fn as_str(self) -> &'static str;

    fn is_once(self) -> bool {
        Self::ONCE == Some(self)
    }
}

pub(crate) fn parse_period<P: PeriodKind>(value: &str) -> Result<P, SwitcherError> {
    let needle = value.trim();
    P::ALL
        .iter()
        .copied()
        .find(|period| period.as_str().eq_ignore_ascii_case(needle))
        .ok_or_else(|| SwitcherError::UnknownPeriod(value.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountWithPeriod<P> {
    pub amount: f64,
    pub period: P,
}

impl<P: PeriodKind> AmountWithPeriod<P> {
    pub fn new(amount: f64, period: P) -> Self {
        Self { amount, period }
    }
}

/// Amount per period, covering every member of the edition exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ByPeriod<P: PeriodKind>(BTreeMap<P, f64>);

impl<P: PeriodKind> ByPeriod<P> {
    fn from_fn(mut value: impl FnMut(P) -> f64) -> Self {
        Self(P::ALL.iter().map(|&period| (period, value(period))).collect())
    }

    fn set(&mut self, period: P, amount: f64) {
        self.0.insert(period, amount);
    }

    pub fn get(&self, period: P) -> f64 {
        self[period]
    }

    /// Entries in edition order.
    pub fn iter(&self) -> impl Iterator<Item = (P, f64)> + '_ {
        self.0.iter().map(|(period, amount)| (*period, *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: PeriodKind> Index<P> for ByPeriod<P> {
    type Output = f64;

    fn index(&self, period: P) -> &f64 {
        &self.0[&period]
    }
}

/// Projects a recurring amount to its yearly total.
pub fn annualize_amount<P: PeriodKind>(input: AmountWithPeriod<P>) -> f64 {
    input.amount * input.period.multiplier()
}

/// Computes the equivalent amount under every period of the edition.
///
/// Derived entries are rounded to whole numbers. The source period, `yearly`
/// and `once` (when the edition has it) hold exact values.
pub fn calculate_by_period<P: PeriodKind>(input: AmountWithPeriod<P>) -> ByPeriod<P> {
    if input.period.is_once() {
        tracing::debug!(amount = input.amount, "one-time amount, skipping annualization");
        return ByPeriod::<P>::from_fn(|_: P| input.amount);
    }

    let annualized = annualize_amount(input);
    let mut results =
        ByPeriod::<P>::from_fn(|period: P| (annualized / period.multiplier()).round());

    results.set(input.period, input.amount);
    if let Some(once) = P::ONCE {
        results.set(once, input.amount);
    }
    results.set(P::YEARLY, annualized);

    tracing::debug!(
        amount = input.amount,
        period = %input.period,
        annualized,
        "calculated amounts by period"
    );
    results
}
