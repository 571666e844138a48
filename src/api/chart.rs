use crate::api::{parse_account_param, AppState};
use crate::domain::Decimal;
use crate::engine::chart::{summarize_series, Period};
use crate::engine::format::format_currency;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQuery {
    pub account: String,
    /// One of 24H, 7D, 30D, 3M, 1Y. Defaults to 7D like the period toggle.
    pub period: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPointDto {
    pub time_ms: i64,
    pub label: String,
    pub value: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub period: Period,
    pub latest_value: Decimal,
    pub latest_value_display: String,
    pub change: Decimal,
    pub change_display: String,
    pub change_pct: Decimal,
    pub points: Vec<ChartPointDto>,
}

pub async fn get_chart(
    Query(params): Query<ChartQuery>,
    State(state): State<AppState>,
) -> Result<Json<ChartResponse>, AppError> {
    let account = parse_account_param(&params.account)?;
    let period = match params.period.as_deref() {
        None => Period::Week,
        Some(raw) => Period::from_str(raw).map_err(|_| {
            AppError::BadRequest("period must be one of: 24H, 7D, 30D, 3M, 1Y".to_string())
        })?,
    };

    let points = state.source.fetch_history(&account, period).await?;
    let summary = summarize_series(&points);

    let change_display = if summary.change.is_negative() {
        format_currency(summary.change)
    } else {
        format!("+{}", format_currency(summary.change))
    };

    let point_dtos = points
        .into_iter()
        .map(|p| ChartPointDto {
            time_ms: p.time.as_ms(),
            label: period.tick_label(p.time),
            value: p.value,
        })
        .collect();

    Ok(Json(ChartResponse {
        period,
        latest_value: summary.latest_value,
        latest_value_display: format_currency(summary.latest_value),
        change: summary.change,
        change_display,
        change_pct: summary.change_pct.round_dp(2),
        points: point_dtos,
    }))
}
