//! Domain primitives: TimeMs, WalletAddress, Symbol, BalanceSide.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Time in milliseconds since Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeMs(pub i64);

impl TimeMs {
    pub fn new(ms: i64) -> Self {
        TimeMs(ms)
    }

    pub fn as_ms(&self) -> i64 {
        self.0
    }
}

/// Error returned when a wallet address fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid wallet address: {0}")]
pub struct AddressParseError(pub String);

/// Base58 wallet public key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Construct without validation, for values already trusted upstream.
    pub fn new(addr: String) -> Self {
        WalletAddress(addr)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WalletAddress {
    type Err = AddressParseError;

    /// Accepts base58 strings of plausible public-key length (32-44 chars).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len_ok = (32..=44).contains(&s.len());
        // Base58 alphabet: no 0, O, I, l.
        let charset_ok = s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l'));
        if len_ok && charset_ok {
            Ok(WalletAddress(s.to_string()))
        } else {
            Err(AddressParseError(s.to_string()))
        }
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instrument/token symbol (e.g. "SOL", "USDC").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(symbol: String) -> Self {
        Symbol(symbol)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name with bridge suffixes stripped, e.g. "ETH (Portal)" -> "ETH".
    pub fn display_name(&self) -> String {
        self.0
            .trim()
            .trim_end_matches(" (Portal)")
            .trim_end_matches(" (Wormhole)")
            .to_string()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the balance sheet a projected row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    Asset,
    Liability,
}

impl std::fmt::Display for BalanceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceSide::Asset => write!(f, "asset"),
            BalanceSide::Liability => write!(f, "liability"),
        }
    }
}
