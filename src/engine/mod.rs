//! Pure derivation engine: snapshot in, view models out.
//!
//! Every function here is synchronous, deterministic, and total over its
//! inputs; absence of upstream data maps to an empty or resting view
//! model, never an error.

pub mod balances;
pub mod chart;
pub mod format;
pub mod health;
pub mod layout;
pub mod memo;
pub mod tiering;

pub use balances::{derive_balance_sheet, BalanceSheet, PositionRow};
pub use chart::{summarize_series, ChartSummary, Period};
pub use health::{derive_health, HealthBand, HealthSummary};
pub use layout::{select_layout, LayoutMode};
pub use memo::{DerivedViews, ViewCache};
pub use tiering::{classify, TierStatus};
