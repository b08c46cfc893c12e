use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{parse_period, PeriodKind};
use crate::errors::SwitcherError;

/// Periods offered by the extended edition. Every entry recurs; there is no `once`.
///
/// The `bi` prefix always reads as twice per period: `Biweekly` is twice a week,
/// `Bimonthly` twice a month and `Biyearly` twice a year. `ALL` runs from the
/// most to the least frequent period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendedPeriod {
    Daily,
    Biweekly,
    Weekly,
    Bimonthly,
    Monthly,
    Quarterly,
    Biyearly,
    Yearly,
}

impl PeriodKind for ExtendedPeriod {
    const ALL: &'static [Self] = &[
        ExtendedPeriod::Daily,
        ExtendedPeriod::Biweekly,
        ExtendedPeriod::Weekly,
        ExtendedPeriod::Bimonthly,
        ExtendedPeriod::Monthly,
        ExtendedPeriod::Quarterly,
        ExtendedPeriod::Biyearly,
        ExtendedPeriod::Yearly,
    ];
    const YEARLY: Self = ExtendedPeriod::Yearly;

    fn multiplier(self) -> f64 {
        match self {
            ExtendedPeriod::Daily => 366.0,
            ExtendedPeriod::Biweekly => 2.0 * 366.0 / 7.0,
            ExtendedPeriod::Weekly => 366.0 / 7.0,
            ExtendedPeriod::Bimonthly => 24.0,
            ExtendedPeriod::Monthly => 12.0,
            ExtendedPeriod::Quarterly => 4.0,
            ExtendedPeriod::Biyearly => 2.0,
            ExtendedPeriod::Yearly => 1.0,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ExtendedPeriod::Daily => "daily",
            ExtendedPeriod::Biweekly => "biweekly",
            ExtendedPeriod::Weekly => "weekly",
            ExtendedPeriod::Bimonthly => "bimonthly",
            ExtendedPeriod::Monthly => "monthly",
            ExtendedPeriod::Quarterly => "quarterly",
            ExtendedPeriod::Biyearly => "biyearly",
            ExtendedPeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ExtendedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtendedPeriod {
    type Err = SwitcherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_period(value)
    }
}
