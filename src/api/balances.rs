use crate::api::{parse_account_param, AppState};
use crate::engine::balances::PositionRow;
use crate::engine::layout::{select_layout, LayoutMode};
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesQuery {
    pub account: String,
    /// Client viewport width in pixels; omitted on first paint.
    pub viewport: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResponse {
    pub layout: LayoutMode,
    pub assets: Vec<PositionRow>,
    pub liabilities: Vec<PositionRow>,
    /// i18n key for the empty state, present only when there is nothing
    /// to render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

pub async fn get_balances(
    Query(params): Query<BalancesQuery>,
    State(state): State<AppState>,
) -> Result<Json<BalancesResponse>, AppError> {
    let account = parse_account_param(&params.account)?;
    let layout = select_layout(params.viewport, state.config.table_breakpoint_px);

    let Some(snapshot) = state.source.fetch_account(&account).await? else {
        return Ok(Json(BalancesResponse {
            layout,
            assets: vec![],
            liabilities: vec![],
            empty_state: Some("connect-wallet".to_string()),
        }));
    };

    let views = state.cache.get_or_derive(&snapshot);
    let sheet = &views.balance_sheet;
    let empty_state = sheet
        .is_empty()
        .then(|| "no-assets-liabilities".to_string());

    Ok(Json(BalancesResponse {
        layout,
        assets: sheet.assets.clone(),
        liabilities: sheet.liabilities.clone(),
        empty_state,
    }))
}
