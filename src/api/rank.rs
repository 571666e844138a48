use crate::api::{parse_account_param, AppState};
use crate::domain::{Decimal, Tier};
use crate::engine::format::format_currency;
use crate::engine::tiering::classify;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Benefit bullet keys shown under the tier badge; localized client-side.
const TIER_BENEFIT_KEYS: [&str; 3] = [
    "benefit-enhanced-trading",
    "benefit-priority-support",
    "benefit-market-insights",
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankQuery {
    pub account: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub portfolio_value: Decimal,
    pub portfolio_value_display: String,
    /// 1-based position of the current tier.
    pub rank: usize,
    pub tier: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<Tier>,
    /// Progress toward the next tier in [0, 100]; 100 on the last tier.
    pub progress_pct: Decimal,
    pub remaining_to_next: Decimal,
    pub remaining_to_next_display: String,
    pub benefit_keys: Vec<String>,
}

pub async fn get_rank(
    Query(params): Query<RankQuery>,
    State(state): State<AppState>,
) -> Result<Json<RankResponse>, AppError> {
    let account = parse_account_param(&params.account)?;
    let snapshot = state.source.fetch_account(&account).await?;

    // An unloaded account classifies at zero value, i.e. the first tier.
    let portfolio_value = snapshot.map(|s| s.equity).unwrap_or(Decimal::ZERO);
    let status = classify(&state.config.tier_table, portfolio_value);

    Ok(Json(RankResponse {
        portfolio_value,
        portfolio_value_display: format_currency(portfolio_value),
        rank: status.rank,
        tier: status.current,
        next_tier: status.next,
        progress_pct: status.progress_pct.round_dp(1),
        remaining_to_next: status.remaining_to_next,
        remaining_to_next_display: format_currency(status.remaining_to_next),
        benefit_keys: TIER_BENEFIT_KEYS.iter().map(|k| k.to_string()).collect(),
    }))
}
