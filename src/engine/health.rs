//! Account health card derivation.

use crate::domain::{AccountSnapshot, Decimal};
use serde::Serialize;

/// Display band for the health indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Healthy,
    Warning,
    Danger,
}

impl HealthBand {
    /// Band thresholds: >= 50% healthy, >= 25% warning, below that danger.
    pub fn from_pct(health_pct: Decimal) -> Self {
        if health_pct >= Decimal::from_i64(50) {
            HealthBand::Healthy
        } else if health_pct >= Decimal::from_i64(25) {
            HealthBand::Warning
        } else {
            HealthBand::Danger
        }
    }
}

/// Health card view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    /// Health ratio scaled to a percentage.
    pub health_pct: Decimal,
    pub band: HealthBand,
    /// Gauge fill, clamped to [0, 100].
    pub bar_fill_pct: Decimal,
    pub leverage: Decimal,
    pub free_collateral: Decimal,
    pub total_collateral: Decimal,
}

/// Derive the health card. A missing account renders the neutral resting
/// state: full health, zero leverage and collateral.
pub fn derive_health(account: Option<&AccountSnapshot>) -> HealthSummary {
    let Some(account) = account else {
        return HealthSummary {
            health_pct: Decimal::ONE_HUNDRED,
            band: HealthBand::Healthy,
            bar_fill_pct: Decimal::ONE_HUNDRED,
            leverage: Decimal::ZERO,
            free_collateral: Decimal::ZERO,
            total_collateral: Decimal::ZERO,
        };
    };

    let health_pct = account.health_ratio * Decimal::ONE_HUNDRED;
    HealthSummary {
        health_pct,
        band: HealthBand::from_pct(health_pct),
        bar_fill_pct: health_pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        leverage: account.leverage,
        free_collateral: account.free_collateral,
        total_collateral: account.assets_value,
    }
}
