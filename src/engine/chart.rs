//! Portfolio value chart derivation: period windows and series summary.

use crate::domain::{Decimal, PortfolioPoint, TimeMs};
use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::str::FromStr;

/// Chart time window, as selected in the period toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    #[serde(rename = "24H")]
    Day,
    #[serde(rename = "7D")]
    Week,
    #[serde(rename = "30D")]
    Month,
    #[serde(rename = "3M")]
    Quarter,
    #[serde(rename = "1Y")]
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "24H",
            Period::Week => "7D",
            Period::Month => "30D",
            Period::Quarter => "3M",
            Period::Year => "1Y",
        }
    }

    /// Window length in days.
    pub fn days(&self) -> u32 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => 30,
            Period::Quarter => 90,
            Period::Year => 365,
        }
    }

    /// Axis tick label for a point in this window: time of day inside the
    /// 24H window, month + day otherwise. Empty for unrepresentable
    /// timestamps.
    pub fn tick_label(&self, time: TimeMs) -> String {
        let Some(dt) = Utc.timestamp_millis_opt(time.as_ms()).single() else {
            return String::new();
        };
        match self {
            Period::Day => dt.format("%H:%M").to_string(),
            _ => dt.format("%b %-d").to_string(),
        }
    }
}

impl FromStr for Period {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "24H" => Ok(Period::Day),
            "7D" => Ok(Period::Week),
            "30D" => Ok(Period::Month),
            "3M" => Ok(Period::Quarter),
            "1Y" => Ok(Period::Year),
            _ => Err(()),
        }
    }
}

/// Summary header over a value series: latest value plus change since the
/// start of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub latest_value: Decimal,
    pub change: Decimal,
    pub change_pct: Decimal,
}

/// Summarize a history series. An empty series (or one starting at zero,
/// where a percentage is undefined) reports zero change.
pub fn summarize_series(points: &[PortfolioPoint]) -> ChartSummary {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return ChartSummary {
            latest_value: Decimal::ZERO,
            change: Decimal::ZERO,
            change_pct: Decimal::ZERO,
        };
    };

    let change = last.value - first.value;
    let change_pct = change
        .checked_div(first.value)
        .map(|frac| frac * Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO);

    ChartSummary {
        latest_value: last.value,
        change,
        change_pct,
    }
}
