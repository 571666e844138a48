//! Domain types for the portfolio view-model service.
//!
//! This module provides:
//! - Lossless numeric handling via the Decimal wrapper
//! - Domain primitives: TimeMs, WalletAddress, Symbol, BalanceSide
//! - Upstream snapshot types (account, wallet, history, chat)
//! - The validated portfolio tier table

pub mod decimal;
pub mod primitives;
pub mod snapshot;
pub mod tier;

pub use decimal::Decimal;
pub use primitives::{AddressParseError, BalanceSide, Symbol, TimeMs, WalletAddress};
pub use snapshot::{AccountSnapshot, ChatMessage, InstrumentPosition, PortfolioPoint, WalletStatus};
pub use tier::{Tier, TierTable, TierTableError};
