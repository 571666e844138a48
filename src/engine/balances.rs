//! Projection of account positions into the assets/liabilities table.

use crate::domain::{AccountSnapshot, BalanceSide, Decimal, InstrumentPosition};
use serde::Serialize;

/// One row of the assets/liabilities table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRow {
    pub symbol: String,
    /// Unsigned balance; the side carries the sign information.
    pub balance: Decimal,
    pub value_usd: Decimal,
    pub deposit_rate_apy: Decimal,
    pub borrow_rate_apy: Decimal,
    pub side: BalanceSide,
    /// Scaled initial weight as a percentage.
    pub weight_pct: Decimal,
    /// The SDK does not expose a liquidation price for these positions
    /// yet; the table renders a placeholder until it does.
    pub liquidation_price: Option<Decimal>,
}

/// Assets and liabilities in upstream encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub assets: Vec<PositionRow>,
    pub liabilities: Vec<PositionRow>,
}

impl BalanceSheet {
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.liabilities.is_empty()
    }
}

/// Project active positions into table rows.
///
/// Positive balances become assets, negative balances liabilities, and
/// exactly-zero balances are dropped. Rows keep the order the upstream
/// presents positions in; no resorting. A missing account yields two
/// empty lists, never an error.
pub fn derive_balance_sheet(account: Option<&AccountSnapshot>) -> BalanceSheet {
    let Some(account) = account else {
        return BalanceSheet::default();
    };

    let mut sheet = BalanceSheet::default();
    for position in &account.positions {
        if position.balance.is_zero() {
            continue;
        }
        let side = if position.balance.is_positive() {
            BalanceSide::Asset
        } else {
            BalanceSide::Liability
        };
        let row = project_row(position, side);
        match side {
            BalanceSide::Asset => sheet.assets.push(row),
            BalanceSide::Liability => sheet.liabilities.push(row),
        }
    }
    sheet
}

fn project_row(position: &InstrumentPosition, side: BalanceSide) -> PositionRow {
    let weight = match side {
        BalanceSide::Asset => position.init_asset_weight,
        BalanceSide::Liability => position.init_liab_weight,
    };
    PositionRow {
        symbol: position.symbol.display_name(),
        balance: position.balance.abs(),
        value_usd: position.balance.abs() * position.price,
        deposit_rate_apy: position.deposit_rate_apy,
        borrow_rate_apy: position.borrow_rate_apy,
        side,
        weight_pct: weight * Decimal::ONE_HUNDRED,
        liquidation_price: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Symbol, TimeMs, WalletAddress};

    fn d(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    fn position(symbol: &str, balance: &str, price: &str) -> InstrumentPosition {
        InstrumentPosition {
            symbol: Symbol::new(symbol.to_string()),
            balance: d(balance),
            price: d(price),
            deposit_rate_apy: d("2.5"),
            borrow_rate_apy: d("4.1"),
            init_asset_weight: d("0.8"),
            init_liab_weight: d("1.2"),
            decimals: 6,
        }
    }

    fn account(positions: Vec<InstrumentPosition>) -> AccountSnapshot {
        AccountSnapshot {
            address: WalletAddress::new("wallet".to_string()),
            equity: d("100"),
            assets_value: d("100"),
            liabs_value: Decimal::ZERO,
            health_ratio: d("1"),
            leverage: Decimal::ZERO,
            free_collateral: d("100"),
            positions,
            updated_at: TimeMs::new(1),
        }
    }

    #[test]
    fn test_missing_account_yields_empty_sheet() {
        let sheet = derive_balance_sheet(None);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_partition_by_balance_sign() {
        let snapshot = account(vec![
            position("SOL", "10", "100"),
            position("USDC", "-250", "1"),
            position("BONK", "0", "0.00002"),
        ]);
        let sheet = derive_balance_sheet(Some(&snapshot));

        assert_eq!(sheet.assets.len(), 1);
        assert_eq!(sheet.assets[0].symbol, "SOL");
        assert_eq!(sheet.assets[0].side, BalanceSide::Asset);

        assert_eq!(sheet.liabilities.len(), 1);
        assert_eq!(sheet.liabilities[0].symbol, "USDC");
        assert_eq!(sheet.liabilities[0].side, BalanceSide::Liability);
    }

    #[test]
    fn test_liability_balance_is_unsigned() {
        let snapshot = account(vec![position("USDC", "-250", "1")]);
        let sheet = derive_balance_sheet(Some(&snapshot));
        assert_eq!(sheet.liabilities[0].balance, d("250"));
        assert_eq!(sheet.liabilities[0].value_usd, d("250"));
    }

    #[test]
    fn test_value_is_abs_balance_times_price() {
        let snapshot = account(vec![position("SOL", "2.5", "98.4")]);
        let sheet = derive_balance_sheet(Some(&snapshot));
        assert_eq!(sheet.assets[0].value_usd, d("246"));
    }

    #[test]
    fn test_weight_follows_side() {
        let snapshot = account(vec![
            position("SOL", "1", "100"),
            position("USDC", "-1", "1"),
        ]);
        let sheet = derive_balance_sheet(Some(&snapshot));
        assert_eq!(sheet.assets[0].weight_pct, d("80"));
        assert_eq!(sheet.liabilities[0].weight_pct, d("120"));
    }

    #[test]
    fn test_encounter_order_preserved() {
        let snapshot = account(vec![
            position("ZETA", "1", "1"),
            position("ALPHA", "2", "1"),
            position("MID", "-1", "1"),
            position("BETA", "3", "1"),
        ]);
        let sheet = derive_balance_sheet(Some(&snapshot));
        let asset_symbols: Vec<_> = sheet.assets.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(asset_symbols, vec!["ZETA", "ALPHA", "BETA"]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let snapshot = account(vec![
            position("SOL", "10", "100"),
            position("USDC", "-250", "1"),
        ]);
        let first = derive_balance_sheet(Some(&snapshot));
        let second = derive_balance_sheet(Some(&snapshot));
        assert_eq!(first, second);
    }

    #[test]
    fn test_liquidation_price_not_derived() {
        let snapshot = account(vec![position("SOL", "10", "100")]);
        let sheet = derive_balance_sheet(Some(&snapshot));
        assert!(sheet.assets[0].liquidation_price.is_none());
    }
}
