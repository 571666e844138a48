use axum::http::StatusCode;
use marginview::api::{self, AppState};
use marginview::datasource::MockSource;
use marginview::{AccountSnapshot, Config, Decimal, TierTable, TimeMs, WalletAddress};
use std::sync::Arc;
use tower::util::ServiceExt;

const ACCOUNT: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

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

fn snapshot(health_ratio: &str) -> AccountSnapshot {
    AccountSnapshot {
        address: WalletAddress::new(ACCOUNT.to_string()),
        equity: d("5000"),
        assets_value: d("8000"),
        liabs_value: d("3000"),
        health_ratio: d(health_ratio),
        leverage: d("1.6"),
        free_collateral: d("2500"),
        positions: vec![],
        updated_at: TimeMs::new(1),
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
async fn test_health_card_for_loaded_account() {
    let app = app(MockSource::new().with_account(snapshot("0.62")));
    let (status, body) = request(app, &format!("/v1/account/health?account={}", ACCOUNT)).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["healthPct"].as_f64().unwrap(), 62.0);
    assert_eq!(json["healthDisplay"], "62.0%");
    assert_eq!(json["band"], "healthy");
    assert_eq!(json["barFillPct"].as_f64().unwrap(), 62.0);
    assert_eq!(json["leverageDisplay"], "1.60x");
    assert_eq!(json["freeCollateralDisplay"], "$2,500.00");
    assert_eq!(json["totalCollateralDisplay"], "$8,000.00");
}

#[tokio::test]
async fn test_health_bands() {
    let cases = [("0.49", "warning"), ("0.25", "warning"), ("0.1", "danger")];
    for (ratio, band) in cases {
        let app = app(MockSource::new().with_account(snapshot(ratio)));
        let (_, body) = request(app, &format!("/v1/account/health?account={}", ACCOUNT)).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["band"], band, "ratio {}", ratio);
    }
}

#[tokio::test]
async fn test_health_card_resting_state() {
    let app = app(MockSource::new());
    let (status, body) = request(app, &format!("/v1/account/health?account={}", ACCOUNT)).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["healthPct"].as_f64().unwrap(), 100.0);
    assert_eq!(json["band"], "healthy");
    assert_eq!(json["leverage"].as_f64().unwrap(), 0.0);
    assert_eq!(json["freeCollateral"].as_f64().unwrap(), 0.0);
    assert_eq!(json["totalCollateral"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_health_bar_fill_clamped_above_hundred() {
    let app = app(MockSource::new().with_account(snapshot("1.2")));
    let (_, body) = request(app, &format!("/v1/account/health?account={}", ACCOUNT)).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["healthPct"].as_f64().unwrap(), 120.0);
    assert_eq!(json["barFillPct"].as_f64().unwrap(), 100.0);
}
