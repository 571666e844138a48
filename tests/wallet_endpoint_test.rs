use axum::http::StatusCode;
use marginview::api::{self, AppState};
use marginview::datasource::MockSource;
use marginview::{Config, Decimal, TierTable, WalletAddress, WalletStatus};
use std::sync::Arc;
use tower::util::ServiceExt;

const WALLET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

fn d(s: &str) -> Decimal {
    Decimal::parse(s).unwrap()
}

fn test_config() -> Config {
    Config {
        port: 0,
        upstream_api_url: "http://example.invalid".to_string(),
        table_breakpoint_px: 768,
        tier_table: TierTable::standard(),
        min_gas_balance: d("0.04"),
        native_price_fallback: d("100"),
    }
}

fn app(source: MockSource) -> axum::Router {
    api::create_router(AppState::new(Arc::new(source), test_config()))
}

fn wallet() -> WalletAddress {
    WalletAddress::new(WALLET.to_string())
}

fn connected(balance: &str, max_deposit: &str, price: Option<&str>) -> WalletStatus {
    WalletStatus {
        connected: true,
        native_balance: d(balance),
        max_deposit: d(max_deposit),
        native_price: price.map(d),
    }
}

async fn request(app: axum::Router, uri: &str) -> (StatusCode, axum::body::Bytes) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

#[tokio::test]
async fn test_disconnected_wallet_shows_connect_prompt() {
    let app = app(MockSource::new());
    let (status, body) = request(app, &format!("/v1/wallet/balance?wallet={}", WALLET)).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["connected"], false);
    assert_eq!(json["emptyState"], "connect-wallet");
    assert!(json.get("balance").is_none());
}

#[tokio::test]
async fn test_connected_wallet_balances() {
    let source =
        MockSource::new().with_wallet(wallet(), connected("2.5", "2.46", Some("150")));
    let app = app(source);
    let (status, body) = request(app, &format!("/v1/wallet/balance?wallet={}", WALLET)).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["connected"], true);
    let balance = &json["balance"];
    assert_eq!(balance["nativeBalance"].as_f64().unwrap(), 2.5);
    assert_eq!(balance["nativeBalanceDisplay"], "2.5000");
    assert_eq!(balance["valueUsd"].as_f64().unwrap(), 375.0);
    assert_eq!(balance["valueUsdDisplay"], "$375.00");
    assert_eq!(balance["availableForDeposit"].as_f64().unwrap(), 2.46);
    assert_eq!(balance["reservedForFees"].as_f64().unwrap(), 0.04);
    assert_eq!(balance["lowBalance"], false);
}

#[tokio::test]
async fn test_price_fallback_when_feed_is_stale() {
    let source = MockSource::new().with_wallet(wallet(), connected("2", "1.96", None));
    let app = app(source);
    let (_, body) = request(app, &format!("/v1/wallet/balance?wallet={}", WALLET)).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // 2 * fallback price of 100.
    assert_eq!(json["balance"]["valueUsd"].as_f64().unwrap(), 200.0);
}

#[tokio::test]
async fn test_low_balance_warning_threshold() {
    // 0.3 is below 10x the 0.04 fee reserve.
    let source = MockSource::new().with_wallet(wallet(), connected("0.3", "0.26", Some("100")));
    let app = app(source);
    let (_, body) = request(app, &format!("/v1/wallet/balance?wallet={}", WALLET)).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["balance"]["lowBalance"], true);
}

#[tokio::test]
async fn test_available_for_deposit_clamped_at_zero() {
    let source = MockSource::new().with_wallet(wallet(), connected("0.01", "-0.03", Some("100")));
    let app = app(source);
    let (_, body) = request(app, &format!("/v1/wallet/balance?wallet={}", WALLET)).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["balance"]["availableForDeposit"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_invalid_wallet_rejected() {
    let app = app(MockSource::new());
    let (status, _) = request(app, "/v1/wallet/balance?wallet=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
