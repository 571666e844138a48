use crate::domain::{Decimal, TierTable};
use std::collections::HashMap;
use thiserror::Error;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the margin SDK gateway.
    pub upstream_api_url: String,
    /// Viewport width above which the balances view renders as a table.
    pub table_breakpoint_px: u32,
    /// Tier table for the rank card; the standard six tiers unless
    /// overridden by file.
    pub tier_table: TierTable,
    /// Native-token amount to keep unspent for transaction fees.
    pub min_gas_balance: Decimal,
    /// Quote price assumed for the native token when the gateway has no
    /// fresh price.
    pub native_price_fallback: Decimal,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let upstream_api_url = env_map
            .get("UPSTREAM_API_URL")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("UPSTREAM_API_URL".to_string()))?;

        let table_breakpoint_px = env_map
            .get("TABLE_BREAKPOINT_PX")
            .map(|s| s.as_str())
            .unwrap_or("768")
            .parse::<u32>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "TABLE_BREAKPOINT_PX".to_string(),
                    "must be a valid u32".to_string(),
                )
            })?;

        let tier_table = load_tier_table_from_map(&env_map)?;

        let min_gas_balance = decimal_env(&env_map, "MIN_GAS_BALANCE", "0.04")?;
        let native_price_fallback = decimal_env(&env_map, "NATIVE_PRICE_FALLBACK", "100")?;

        Ok(Config {
            port,
            upstream_api_url,
            table_breakpoint_px,
            tier_table,
            min_gas_balance,
            native_price_fallback,
        })
    }
}

fn decimal_env(
    env_map: &HashMap<String, String>,
    key: &str,
    default: &str,
) -> Result<Decimal, ConfigError> {
    let raw = env_map.get(key).map(|s| s.as_str()).unwrap_or(default);
    Decimal::parse(raw).map_err(|_| {
        ConfigError::InvalidValue(key.to_string(), "must be a valid decimal".to_string())
    })
}

/// Read the tier table from TIER_TABLE_FILE (a JSON array of tiers) when
/// set, falling back to the built-in table. The file goes through the
/// same contiguity validation as the default.
fn load_tier_table_from_map(
    env_map: &HashMap<String, String>,
) -> Result<TierTable, ConfigError> {
    let Some(file_path) = env_map.get("TIER_TABLE_FILE") else {
        return Ok(TierTable::standard());
    };
    let content = std::fs::read_to_string(file_path).map_err(|_| {
        ConfigError::InvalidValue(
            "TIER_TABLE_FILE".to_string(),
            "file not found or unreadable".to_string(),
        )
    })?;
    serde_json::from_str::<TierTable>(&content).map_err(|e| {
        ConfigError::InvalidValue("TIER_TABLE_FILE".to_string(), e.to_string())
    })
}
