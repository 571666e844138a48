//! HTTP surface: one endpoint per dashboard card, each returning the
//! JSON view model its renderer consumes.

pub mod account_health;
pub mod balances;
pub mod chart;
pub mod health;
pub mod messages;
pub mod overview;
pub mod rank;
pub mod swap;
pub mod wallet;

use crate::config::Config;
use crate::datasource::AccountSource;
use crate::domain::WalletAddress;
use crate::engine::ViewCache;
use crate::error::AppError;
use axum::{routing::get, Router};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn AccountSource>,
    pub config: Config,
    pub cache: Arc<ViewCache>,
}

impl AppState {
    pub fn new(source: Arc<dyn AccountSource>, config: Config) -> Self {
        Self {
            source,
            config,
            cache: Arc::new(ViewCache::default()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/portfolio/overview", get(overview::get_overview))
        .route("/v1/portfolio/balances", get(balances::get_balances))
        .route("/v1/portfolio/rank", get(rank::get_rank))
        .route("/v1/portfolio/chart", get(chart::get_chart))
        .route("/v1/account/health", get(account_health::get_account_health))
        .route("/v1/wallet/balance", get(wallet::get_wallet_balance))
        .route("/v1/chat/messages", get(messages::get_messages))
        .route("/v1/swap/reduce-quote", get(swap::get_reduce_quote))
        .layer(cors)
        .with_state(state)
}

/// Parse the `account` query parameter shared by the portfolio endpoints.
pub(crate) fn parse_account_param(raw: &str) -> Result<WalletAddress, AppError> {
    WalletAddress::from_str(raw)
        .map_err(|_| AppError::BadRequest("Invalid account address".to_string()))
}
