use crate::api::{parse_account_param, AppState};
use crate::domain::Decimal;
use crate::engine::chart::{summarize_series, Period};
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use futures::future::try_join;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewQuery {
    pub account: String,
}

/// Headline aggregates for the portfolio overview page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub loaded: bool,
    pub portfolio_value: Decimal,
    pub deposits: Decimal,
    pub borrows: Decimal,
    pub health_pct: Decimal,
    /// Equity change over the trailing 24 hours, zero while history is
    /// still empty.
    pub daily_change: Decimal,
    pub daily_change_pct: Decimal,
}

pub async fn get_overview(
    Query(params): Query<OverviewQuery>,
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, AppError> {
    let account = parse_account_param(&params.account)?;

    let (snapshot, day_history) = try_join(
        state.source.fetch_account(&account),
        state.source.fetch_history(&account, Period::Day),
    )
    .await?;
    let day = summarize_series(&day_history);

    let response = match snapshot {
        Some(snapshot) => OverviewResponse {
            loaded: true,
            portfolio_value: snapshot.equity,
            deposits: snapshot.assets_value,
            borrows: snapshot.liabs_value,
            health_pct: snapshot.health_ratio * Decimal::ONE_HUNDRED,
            daily_change: day.change,
            daily_change_pct: day.change_pct.round_dp(2),
        },
        // Not an error: the account just has not loaded yet.
        None => OverviewResponse {
            loaded: false,
            portfolio_value: Decimal::ZERO,
            deposits: Decimal::ZERO,
            borrows: Decimal::ZERO,
            health_pct: Decimal::ONE_HUNDRED,
            daily_change: Decimal::ZERO,
            daily_change_pct: Decimal::ZERO,
        },
    };

    Ok(Json(response))
}
