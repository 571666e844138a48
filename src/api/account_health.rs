use crate::api::{parse_account_param, AppState};
use crate::domain::Decimal;
use crate::engine::format::{format_currency, format_numeric, format_percent};
use crate::engine::health::{derive_health, HealthBand};
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHealthQuery {
    pub account: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHealthResponse {
    pub health_pct: Decimal,
    pub health_display: String,
    pub band: HealthBand,
    pub bar_fill_pct: Decimal,
    pub leverage: Decimal,
    pub leverage_display: String,
    pub free_collateral: Decimal,
    pub free_collateral_display: String,
    pub total_collateral: Decimal,
    pub total_collateral_display: String,
}

pub async fn get_account_health(
    Query(params): Query<AccountHealthQuery>,
    State(state): State<AppState>,
) -> Result<Json<AccountHealthResponse>, AppError> {
    let account = parse_account_param(&params.account)?;
    let snapshot = state.source.fetch_account(&account).await?;

    let summary = match &snapshot {
        Some(snapshot) => state.cache.get_or_derive(snapshot).health.clone(),
        None => derive_health(None),
    };

    Ok(Json(AccountHealthResponse {
        health_pct: summary.health_pct,
        health_display: format_percent(summary.health_pct, 1),
        band: summary.band,
        bar_fill_pct: summary.bar_fill_pct,
        leverage: summary.leverage,
        leverage_display: format!("{}x", format_numeric(summary.leverage, 2)),
        free_collateral: summary.free_collateral,
        free_collateral_display: format_currency(summary.free_collateral),
        total_collateral: summary.total_collateral,
        total_collateral_display: format_currency(summary.total_collateral),
    }))
}
