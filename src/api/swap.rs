use crate::api::{parse_account_param, AppState};
use crate::domain::{Decimal, Symbol};
use crate::engine::format::format_currency;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Longest accepted amount input, in significant characters. Mirrors the
/// value limit enforced by the order form.
const MAX_AMOUNT_CHARS: usize = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReduceQuoteQuery {
    pub account: String,
    pub symbol: String,
    pub amount: String,
}

/// Quote for the reduce-position order input: the USD value of the
/// entered amount plus the bounds the input enforces.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReduceQuoteResponse {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<ReduceQuoteBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReduceQuoteBody {
    /// Entered amount truncated to the instrument's display decimals.
    pub amount: Decimal,
    pub value_usd: Decimal,
    pub value_usd_display: String,
    /// Largest reducible amount: the unsigned position balance.
    pub max_amount: Decimal,
    /// Decimal scale the input should enforce.
    pub decimals: u32,
}

pub async fn get_reduce_quote(
    Query(params): Query<ReduceQuoteQuery>,
    State(state): State<AppState>,
) -> Result<Json<ReduceQuoteResponse>, AppError> {
    let account = parse_account_param(&params.account)?;
    let symbol_raw = params.symbol.trim();
    if symbol_raw.is_empty() {
        return Err(AppError::BadRequest("symbol is required".to_string()));
    }
    let symbol = Symbol::new(symbol_raw.to_string());
    let amount = parse_amount(&params.amount)?;

    let Some(snapshot) = state.source.fetch_account(&account).await? else {
        return Ok(Json(ReduceQuoteResponse {
            symbol: symbol.as_str().to_string(),
            empty_state: Some("connect-wallet".to_string()),
            quote: None,
        }));
    };

    // Reduce orders only apply to instruments the account already holds.
    let Some(position) = snapshot.position(&symbol) else {
        return Ok(Json(ReduceQuoteResponse {
            symbol: symbol.as_str().to_string(),
            empty_state: Some("no-position".to_string()),
            quote: None,
        }));
    };

    let amount = Decimal::from(amount.inner().trunc_with_scale(position.decimals));
    let value_usd = position.price * amount;

    Ok(Json(ReduceQuoteResponse {
        symbol: symbol.as_str().to_string(),
        empty_state: None,
        quote: Some(ReduceQuoteBody {
            amount,
            value_usd,
            value_usd_display: format_currency(value_usd),
            max_amount: position.balance.abs(),
            decimals: position.decimals,
        }),
    }))
}

fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    let trimmed = raw.trim();
    let significant = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if significant > MAX_AMOUNT_CHARS {
        return Err(AppError::BadRequest(
            "amount exceeds supported precision".to_string(),
        ));
    }
    let amount = Decimal::parse(trimmed)
        .map_err(|_| AppError::BadRequest("Invalid amount".to_string()))?;
    if amount.is_negative() {
        return Err(AppError::BadRequest(
            "amount must not be negative".to_string(),
        ));
    }
    Ok(amount)
}
