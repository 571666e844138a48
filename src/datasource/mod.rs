//! Access to the external account/group SDK that owns all financial state.
//!
//! The service never computes margin math itself; it reads pre-computed
//! snapshots through [`AccountSource`] and projects them. Implementations
//! must treat "account not found yet" as a normal `Ok(None)`, not an
//! error, so the view layer can render its empty state.

use crate::domain::{AccountSnapshot, ChatMessage, PortfolioPoint, WalletAddress, WalletStatus};
use crate::engine::Period;
use async_trait::async_trait;
use std::fmt;

pub mod gateway;
pub mod mock;

pub use gateway::GatewaySource;
pub use mock::MockSource;

/// Read-side view of the upstream margin SDK.
#[async_trait]
pub trait AccountSource: Send + Sync + fmt::Debug {
    /// Fetch the margin account snapshot for a wallet.
    ///
    /// Returns `Ok(None)` while the account is not yet loaded upstream or
    /// simply does not exist; both render as the empty state.
    async fn fetch_account(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<AccountSnapshot>, SourceError>;

    /// Fetch wallet connectivity and native-token balances.
    async fn fetch_wallet(&self, wallet: &WalletAddress) -> Result<WalletStatus, SourceError>;

    /// Fetch the portfolio value series covering the requested window,
    /// oldest point first.
    async fn fetch_history(
        &self,
        wallet: &WalletAddress,
        period: Period,
    ) -> Result<Vec<PortfolioPoint>, SourceError>;

    /// Fetch the chat feed. Ordering is not guaranteed upstream; the view
    /// layer sorts.
    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, SourceError>;
}

/// Error type for upstream fetches.
#[derive(Debug, Clone)]
pub enum SourceError {
    /// Network error (connection refused, timeout, DNS failure).
    Network(String),
    /// Non-success HTTP status from the gateway.
    Http { status: u16, message: String },
    /// Response body did not match the expected shape.
    Parse(String),
    /// Rate limit exceeded.
    RateLimited,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Network error: {}", msg),
            SourceError::Http { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            SourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SourceError::RateLimited => write!(f, "Rate limited"),
        }
    }
}

impl std::error::Error for SourceError {}
