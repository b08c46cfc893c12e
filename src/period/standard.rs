use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{parse_period, PeriodKind};
use crate::errors::SwitcherError;

/// Periods offered by the standard edition, including the non-recurring `Once`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Once,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl PeriodKind for Period {
    const ALL: &'static [Self] = &[
        Period::Once,
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
    ];
    const YEARLY: Self = Period::Yearly;
    const ONCE: Option<Self> = Some(Period::Once);

    fn multiplier(self) -> f64 {
        match self {
            Period::Once => 1.0,
            Period::Daily => 366.0,
            Period::Weekly => 366.0 / 7.0,
            Period::Monthly => 12.0,
            Period::Yearly => 1.0,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Period::Once => "once",
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = SwitcherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_period(value)
    }
}
