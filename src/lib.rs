pub mod api;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use datasource::{AccountSource, GatewaySource, MockSource, SourceError};
pub use domain::{
    AccountSnapshot, BalanceSide, ChatMessage, Decimal, InstrumentPosition, PortfolioPoint,
    Symbol, Tier, TierTable, TimeMs, WalletAddress, WalletStatus,
};
pub use engine::{BalanceSheet, HealthSummary, LayoutMode, Period, TierStatus, ViewCache};
pub use error::AppError;
