//! HTTP client for the margin SDK gateway.

use super::{AccountSource, SourceError};
use crate::domain::{
    AccountSnapshot, ChatMessage, Decimal, InstrumentPosition, PortfolioPoint, Symbol, TimeMs,
    WalletAddress, WalletStatus,
};
use crate::engine::Period;
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Account source backed by the gateway's REST API.
#[derive(Debug, Clone)]
pub struct GatewaySource {
    client: Client,
    base_url: String,
}

impl GatewaySource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a JSON document, retrying transient failures with exponential
    /// backoff. `Ok(None)` means the resource does not exist (404).
    async fn get_json(&self, path: &str) -> Result<Option<Value>, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(20)),
            ..Default::default()
        };

        retry(backoff, || async {
            let response = self.client.get(&url).send().await.map_err(|e| {
                backoff::Error::transient(SourceError::Network(e.to_string()))
            })?;

            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(backoff::Error::transient(SourceError::RateLimited));
            }
            if status.is_server_error() {
                return Err(backoff::Error::transient(SourceError::Http {
                    status: status.as_u16(),
                    message: "Server error".to_string(),
                }));
            }
            if !status.is_success() {
                return Err(backoff::Error::permanent(SourceError::Http {
                    status: status.as_u16(),
                    message: "Client error".to_string(),
                }));
            }

            response
                .json::<Value>()
                .await
                .map(Some)
                .map_err(|e| backoff::Error::permanent(SourceError::Parse(e.to_string())))
        })
        .await
    }
}

#[async_trait]
impl AccountSource for GatewaySource {
    async fn fetch_account(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<AccountSnapshot>, SourceError> {
        debug!(wallet = %wallet, "fetching account snapshot");
        let path = format!("/v1/accounts/{}", wallet);
        match self.get_json(&path).await? {
            Some(json) => parse_snapshot(&json, wallet).map(Some),
            None => Ok(None),
        }
    }

    async fn fetch_wallet(&self, wallet: &WalletAddress) -> Result<WalletStatus, SourceError> {
        debug!(wallet = %wallet, "fetching wallet status");
        let path = format!("/v1/wallets/{}", wallet);
        match self.get_json(&path).await? {
            Some(json) => parse_wallet(&json),
            // An unknown wallet reads as disconnected.
            None => Ok(WalletStatus::disconnected()),
        }
    }

    async fn fetch_history(
        &self,
        wallet: &WalletAddress,
        period: Period,
    ) -> Result<Vec<PortfolioPoint>, SourceError> {
        debug!(wallet = %wallet, period = period.as_str(), "fetching history");
        let path = format!("/v1/accounts/{}/history?days={}", wallet, period.days());
        let Some(json) = self.get_json(&path).await? else {
            return Ok(Vec::new());
        };
        let entries = json
            .as_array()
            .ok_or_else(|| SourceError::Parse("expected array of history points".to_string()))?;

        let mut points = Vec::with_capacity(entries.len());
        for entry in entries {
            match parse_point(entry) {
                Ok(point) => points.push(point),
                Err(e) => warn!("skipping malformed history point: {}", e),
            }
        }
        Ok(points)
    }

    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, SourceError> {
        let Some(json) = self.get_json("/v1/chat/messages").await? else {
            return Ok(Vec::new());
        };
        let entries = json
            .as_array()
            .ok_or_else(|| SourceError::Parse("expected array of messages".to_string()))?;

        let mut messages = Vec::with_capacity(entries.len());
        for entry in entries {
            match parse_message(entry) {
                Ok(message) => messages.push(message),
                Err(e) => warn!("skipping malformed chat message: {}", e),
            }
        }
        Ok(messages)
    }
}

fn parse_snapshot(json: &Value, wallet: &WalletAddress) -> Result<AccountSnapshot, SourceError> {
    let mut positions = Vec::new();
    if let Some(raw_positions) = json.get("positions").and_then(Value::as_array) {
        for raw in raw_positions {
            match parse_position(raw) {
                Ok(position) => positions.push(position),
                // One bad position must not blank the whole account.
                Err(e) => warn!(wallet = %wallet, "skipping malformed position: {}", e),
            }
        }
    }

    Ok(AccountSnapshot {
        address: wallet.clone(),
        equity: decimal_field(json, "equity")?,
        assets_value: decimal_field(json, "assetsValue")?,
        liabs_value: decimal_field(json, "liabsValue")?,
        health_ratio: decimal_field(json, "healthRatio")?,
        leverage: decimal_field(json, "leverage")?,
        free_collateral: decimal_field(json, "freeCollateral")?,
        positions,
        updated_at: TimeMs::new(int_field(json, "updatedAt")?),
    })
}

fn parse_position(json: &Value) -> Result<InstrumentPosition, SourceError> {
    Ok(InstrumentPosition {
        symbol: Symbol::new(string_field(json, "symbol")?),
        balance: decimal_field(json, "balance")?,
        price: decimal_field(json, "price")?,
        deposit_rate_apy: decimal_field(json, "depositRateApy")?,
        borrow_rate_apy: decimal_field(json, "borrowRateApy")?,
        init_asset_weight: decimal_field(json, "initAssetWeight")?,
        init_liab_weight: decimal_field(json, "initLiabWeight")?,
        decimals: int_field(json, "decimals")? as u32,
    })
}

fn parse_wallet(json: &Value) -> Result<WalletStatus, SourceError> {
    let connected = json
        .get("connected")
        .and_then(Value::as_bool)
        .ok_or_else(|| SourceError::Parse("missing field connected".to_string()))?;
    let native_price = match json.get("nativePrice") {
        None | Some(Value::Null) => None,
        Some(value) => Some(decimal_value(value, "nativePrice")?),
    };
    Ok(WalletStatus {
        connected,
        native_balance: decimal_field(json, "nativeBalance")?,
        max_deposit: decimal_field(json, "maxDeposit")?,
        native_price,
    })
}

fn parse_point(json: &Value) -> Result<PortfolioPoint, SourceError> {
    Ok(PortfolioPoint {
        time: TimeMs::new(int_field(json, "time")?),
        value: decimal_field(json, "value")?,
    })
}

fn parse_message(json: &Value) -> Result<ChatMessage, SourceError> {
    Ok(ChatMessage {
        text: string_field(json, "text")?,
        timestamp: TimeMs::new(int_field(json, "timestamp")?),
        user: string_field(json, "user")?,
        wallet: WalletAddress::new(string_field(json, "wallet")?),
    })
}

fn string_field(json: &Value, name: &str) -> Result<String, SourceError> {
    json.get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SourceError::Parse(format!("missing field {}", name)))
}

fn int_field(json: &Value, name: &str) -> Result<i64, SourceError> {
    json.get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| SourceError::Parse(format!("missing field {}", name)))
}

fn decimal_field(json: &Value, name: &str) -> Result<Decimal, SourceError> {
    let value = json
        .get(name)
        .ok_or_else(|| SourceError::Parse(format!("missing field {}", name)))?;
    decimal_value(value, name)
}

/// Accepts both JSON numbers and decimal strings; the gateway emits
/// strings for high-precision amounts.
fn decimal_value(value: &Value, name: &str) -> Result<Decimal, SourceError> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => {
            return Err(SourceError::Parse(format!(
                "field {} is not a number or string",
                name
            )))
        }
    };
    Decimal::parse(&text)
        .or_else(|_| rust_decimal::Decimal::from_scientific(&text).map(Decimal::from))
        .map_err(|_| SourceError::Parse(format!("field {} is not a valid decimal", name)))
}
