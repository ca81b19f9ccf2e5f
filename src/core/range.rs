use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// User-selectable time span controlling dataset generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeSelection {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl RangeSelection {
    /// Selector order, left to right.
    pub const ALL: [RangeSelection; 6] = [
        RangeSelection::OneDay,
        RangeSelection::OneWeek,
        RangeSelection::OneMonth,
        RangeSelection::ThreeMonths,
        RangeSelection::OneYear,
        RangeSelection::All,
    ];

    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::OneDay => 1,
            Self::OneWeek => 7,
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::OneYear => 365,
            Self::All => 1825,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::OneYear => "1Y",
            Self::All => "ALL",
        }
    }

    /// Position in the selector, `0..6`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::OneDay => 0,
            Self::OneWeek => 1,
            Self::OneMonth => 2,
            Self::ThreeMonths => 3,
            Self::OneYear => 4,
            Self::All => 5,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for RangeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangeSelection {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.label().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ChartError::InvalidData(format!("unknown range selection `{input}`")))
    }
}
