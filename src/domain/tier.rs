//! Portfolio tier table: named brackets of account value driving the rank card.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One bracket of portfolio value.
///
/// `max_value` is an exclusive upper bound; `None` marks the final,
/// unbounded tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub name: String,
    pub min_value: Decimal,
    pub max_value: Option<Decimal>,
    /// Theme accent token the renderer maps to its styling.
    pub accent: String,
}

impl Tier {
    /// True when `min_value <= value < max_value` (unbounded above for the
    /// last tier).
    pub fn contains(&self, value: Decimal) -> bool {
        if value < self.min_value {
            return false;
        }
        match self.max_value {
            Some(max) => value < max,
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierTableError {
    #[error("tier table must not be empty")]
    Empty,
    #[error("first tier must start at 0, got {0}")]
    FirstTierNotZero(Decimal),
    #[error("tier {0} has an empty or inverted range")]
    EmptyRange(String),
    #[error("gap or overlap between tiers {0} and {1}")]
    NotContiguous(String, String),
    #[error("tier {0} is unbounded but is not the last tier")]
    UnboundedNotLast(String),
    #[error("last tier {0} must be unbounded")]
    LastTierBounded(String),
}

/// Ordered tier table covering `[0, inf)`.
///
/// Invariants (checked at construction): the first tier starts at 0, each
/// tier's exclusive upper bound equals the next tier's lower bound, and
/// exactly the last tier is unbounded. Together these guarantee every
/// non-negative value matches exactly one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierTable(Vec<Tier>);

impl TierTable {
    pub fn new(tiers: Vec<Tier>) -> Result<Self, TierTableError> {
        if tiers.is_empty() {
            return Err(TierTableError::Empty);
        }
        let first = &tiers[0];
        if !first.min_value.is_zero() {
            return Err(TierTableError::FirstTierNotZero(first.min_value));
        }
        for (i, tier) in tiers.iter().enumerate() {
            let is_last = i == tiers.len() - 1;
            match tier.max_value {
                None if !is_last => {
                    return Err(TierTableError::UnboundedNotLast(tier.name.clone()));
                }
                None => {}
                Some(max) => {
                    if is_last {
                        return Err(TierTableError::LastTierBounded(tier.name.clone()));
                    }
                    if max <= tier.min_value {
                        return Err(TierTableError::EmptyRange(tier.name.clone()));
                    }
                    let next = &tiers[i + 1];
                    if next.min_value != max {
                        return Err(TierTableError::NotContiguous(
                            tier.name.clone(),
                            next.name.clone(),
                        ));
                    }
                }
            }
        }
        Ok(TierTable(tiers))
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The default six-tier table used by the rank card.
    pub fn standard() -> Self {
        fn tier(name: &str, min: i64, max: Option<i64>, accent: &str) -> Tier {
            Tier {
                name: name.to_string(),
                min_value: Decimal::from_i64(min),
                max_value: max.map(Decimal::from_i64),
                accent: accent.to_string(),
            }
        }
        // Validated by construction; the literals below satisfy the
        // invariants, so this cannot fail.
        TierTable(vec![
            tier("Bronze", 0, Some(1_000), "amber"),
            tier("Silver", 1_000, Some(10_000), "gray"),
            tier("Gold", 10_000, Some(50_000), "yellow"),
            tier("Platinum", 50_000, Some(250_000), "blue"),
            tier("Diamond", 250_000, Some(1_000_000), "purple"),
            tier("Elite", 1_000_000, None, "orange"),
        ])
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Tier>> for TierTable {
    type Error = TierTableError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self, Self::Error> {
        TierTable::new(tiers)
    }
}

impl From<TierTable> for Vec<Tier> {
    fn from(table: TierTable) -> Self {
        table.0
    }
}
