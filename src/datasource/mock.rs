//! In-memory account source for tests.

use super::{AccountSource, SourceError};
use crate::domain::{
    AccountSnapshot, ChatMessage, PortfolioPoint, WalletAddress, WalletStatus,
};
use crate::engine::Period;
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock source returning predefined snapshots, built up with the
/// `with_*` methods.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    accounts: HashMap<WalletAddress, AccountSnapshot>,
    wallets: HashMap<WalletAddress, WalletStatus>,
    history: HashMap<WalletAddress, Vec<PortfolioPoint>>,
    messages: Vec<ChatMessage>,
    fail: bool,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: AccountSnapshot) -> Self {
        self.accounts.insert(account.address.clone(), account);
        self
    }

    pub fn with_wallet(mut self, wallet: WalletAddress, status: WalletStatus) -> Self {
        self.wallets.insert(wallet, status);
        self
    }

    pub fn with_history(mut self, wallet: WalletAddress, points: Vec<PortfolioPoint>) -> Self {
        self.history.insert(wallet, points);
        self
    }

    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Make every fetch fail with a network error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn check(&self) -> Result<(), SourceError> {
        if self.fail {
            Err(SourceError::Network("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AccountSource for MockSource {
    async fn fetch_account(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<AccountSnapshot>, SourceError> {
        self.check()?;
        Ok(self.accounts.get(wallet).cloned())
    }

    async fn fetch_wallet(&self, wallet: &WalletAddress) -> Result<WalletStatus, SourceError> {
        self.check()?;
        Ok(self
            .wallets
            .get(wallet)
            .cloned()
            .unwrap_or_else(WalletStatus::disconnected))
    }

    async fn fetch_history(
        &self,
        wallet: &WalletAddress,
        _period: Period,
    ) -> Result<Vec<PortfolioPoint>, SourceError> {
        self.check()?;
        Ok(self.history.get(wallet).cloned().unwrap_or_default())
    }

    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, SourceError> {
        self.check()?;
        Ok(self.messages.clone())
    }
}
