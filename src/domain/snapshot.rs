//! Upstream account state as read from the margin SDK gateway.
//!
//! Everything here is a read-only snapshot. The SDK owns the financial
//! math (equity, health, leverage, weights); this service only projects
//! the pre-computed fields into view models.

use crate::domain::{Decimal, Symbol, TimeMs, WalletAddress};
use serde::{Deserialize, Serialize};

/// One active instrument position as the SDK reports it.
///
/// `balance` keeps the SDK's sign convention: positive = deposit,
/// negative = borrow. The projection layer takes the absolute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentPosition {
    pub symbol: Symbol,
    pub balance: Decimal,
    /// Oracle price in quote currency per unit.
    pub price: Decimal,
    pub deposit_rate_apy: Decimal,
    pub borrow_rate_apy: Decimal,
    /// Scaled initial asset weight, as a fraction in [0, 1].
    pub init_asset_weight: Decimal,
    /// Scaled initial liability weight, as a fraction (>= 1 for borrows).
    pub init_liab_weight: Decimal,
    /// Display decimals for amount inputs.
    pub decimals: u32,
}

/// Margin account snapshot with pre-computed aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub address: WalletAddress,
    /// Net account value (assets minus liabilities) in quote currency.
    pub equity: Decimal,
    pub assets_value: Decimal,
    pub liabs_value: Decimal,
    /// Normalized solvency ratio in [0, 1]; higher is safer.
    pub health_ratio: Decimal,
    pub leverage: Decimal,
    pub free_collateral: Decimal,
    /// Active positions in the order the SDK presents them.
    pub positions: Vec<InstrumentPosition>,
    /// Identity stamp for this snapshot; bumped by the upstream on every
    /// committed state change. Keys the derivation cache.
    pub updated_at: TimeMs,
}

impl AccountSnapshot {
    pub fn position(&self, symbol: &Symbol) -> Option<&InstrumentPosition> {
        self.positions.iter().find(|p| &p.symbol == symbol)
    }
}

/// Connected-wallet state for the gas-token balance card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatus {
    pub connected: bool,
    /// Native (gas) token balance in the wallet, outside the margin account.
    pub native_balance: Decimal,
    /// Maximum depositable amount after fee reserves; may be negative
    /// upstream when the balance is below the reserve.
    pub max_deposit: Decimal,
    /// Native token price in quote currency, when the gateway has one.
    pub native_price: Option<Decimal>,
}

impl WalletStatus {
    /// A disconnected wallet with zeroed balances.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            native_balance: Decimal::ZERO,
            max_deposit: Decimal::ZERO,
            native_price: None,
        }
    }
}

/// One point of the portfolio value history series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPoint {
    pub time: TimeMs,
    pub value: Decimal,
}

/// A chat message as stored by the upstream feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub timestamp: TimeMs,
    pub user: String,
    pub wallet: WalletAddress,
}

impl ChatMessage {
    /// Stable list key: wallet + timestamp.
    pub fn key(&self) -> String {
        format!("{}{}", self.wallet, self.timestamp.as_ms())
    }
}
