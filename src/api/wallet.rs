use crate::api::AppState;
use crate::domain::{Decimal, WalletAddress};
use crate::engine::format::{format_currency, format_numeric};
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceQuery {
    pub wallet: String,
}

/// Gas-token balance card. `connected: false` carries only the
/// empty-state key; balances are gated on a connected wallet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResponse {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<WalletBalanceBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceBody {
    pub native_balance: Decimal,
    pub native_balance_display: String,
    pub value_usd: Decimal,
    pub value_usd_display: String,
    pub available_for_deposit: Decimal,
    pub available_for_deposit_display: String,
    pub reserved_for_fees: Decimal,
    pub reserved_for_fees_display: String,
    pub low_balance: bool,
}

pub async fn get_wallet_balance(
    Query(params): Query<WalletBalanceQuery>,
    State(state): State<AppState>,
) -> Result<Json<WalletBalanceResponse>, AppError> {
    let wallet = WalletAddress::from_str(&params.wallet)
        .map_err(|_| AppError::BadRequest("Invalid wallet address".to_string()))?;

    let status = state.source.fetch_wallet(&wallet).await?;
    if !status.connected {
        return Ok(Json(WalletBalanceResponse {
            connected: false,
            empty_state: Some("connect-wallet".to_string()),
            balance: None,
        }));
    }

    let price = status
        .native_price
        .unwrap_or(state.config.native_price_fallback);
    let value_usd = status.native_balance * price;
    let available = status.max_deposit.max(Decimal::ZERO);
    let reserved = state.config.min_gas_balance;
    // Warn well before the fee reserve is actually hit.
    let low_balance = status.native_balance < reserved * Decimal::from_i64(10);

    Ok(Json(WalletBalanceResponse {
        connected: true,
        empty_state: None,
        balance: Some(WalletBalanceBody {
            native_balance: status.native_balance,
            native_balance_display: format_numeric(status.native_balance, 4),
            value_usd,
            value_usd_display: format_currency(value_usd),
            available_for_deposit: available,
            available_for_deposit_display: format_numeric(available, 4),
            reserved_for_fees: reserved,
            reserved_for_fees_display: format_numeric(reserved, 4),
            low_balance,
        }),
    }))
}
