//! Tier classification for the portfolio rank card.

use crate::domain::{Decimal, Tier, TierTable};

/// Classification result for one portfolio value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierStatus {
    pub current: Tier,
    /// 1-based position of the current tier in the table.
    pub rank: usize,
    /// The following tier, absent when the current tier is the last.
    pub next: Option<Tier>,
    /// Progress toward the next tier, clamped to [0, 100]. 100 when there
    /// is no next tier.
    pub progress_pct: Decimal,
    /// Quote-currency amount still needed to reach the next tier. 0 when
    /// there is no next tier.
    pub remaining_to_next: Decimal,
}

/// Classify a portfolio value against an ordered tier table.
///
/// First tier whose range contains the value wins; values below every
/// range (the table starts at 0, so only negatives) fall back to the
/// first tier with zero progress.
pub fn classify(table: &TierTable, value: Decimal) -> TierStatus {
    let tiers = table.tiers();
    let index = tiers
        .iter()
        .position(|tier| tier.contains(value))
        .unwrap_or(0);
    let current = tiers[index].clone();
    let next = tiers.get(index + 1).cloned();

    let (progress_pct, remaining_to_next) = match &next {
        Some(next_tier) => {
            let range = next_tier.min_value - current.min_value;
            let progress = (value - current.min_value)
                .checked_div(range)
                .map(|frac| frac * Decimal::ONE_HUNDRED)
                .unwrap_or(Decimal::ZERO)
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            let remaining = (next_tier.min_value - value).max(Decimal::ZERO);
            (progress, remaining)
        }
        None => (Decimal::ONE_HUNDRED, Decimal::ZERO),
    };

    TierStatus {
        current,
        rank: index + 1,
        next,
        progress_pct,
        remaining_to_next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    fn classify_std(value: &str) -> TierStatus {
        classify(&TierTable::standard(), d(value))
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        assert_eq!(classify_std("999.99").current.name, "Bronze");
        assert_eq!(classify_std("1000").current.name, "Silver");
    }

    #[test]
    fn test_rank_is_one_based() {
        assert_eq!(classify_std("0").rank, 1);
        assert_eq!(classify_std("25000").rank, 3);
        assert_eq!(classify_std("5000000").rank, 6);
    }

    #[test]
    fn test_progress_within_tier() {
        // Silver spans [1000, 10000); 5500 is halfway through the range.
        let status = classify_std("5500");
        assert_eq!(status.progress_pct, d("50"));
        assert_eq!(status.remaining_to_next, d("4500"));
        assert_eq!(status.next.as_ref().unwrap().name, "Gold");
    }

    #[test]
    fn test_progress_resets_at_tier_boundary() {
        let below = classify_std("9999.99");
        let at = classify_std("10000");
        assert!(below.progress_pct > d("99"));
        assert_eq!(at.progress_pct, Decimal::ZERO);
        assert_eq!(at.current.name, "Gold");
    }

    #[test]
    fn test_last_tier_has_no_next() {
        let status = classify_std("2000000");
        assert_eq!(status.current.name, "Elite");
        assert!(status.next.is_none());
        assert_eq!(status.progress_pct, Decimal::ONE_HUNDRED);
        assert_eq!(status.remaining_to_next, Decimal::ZERO);
    }

    #[test]
    fn test_negative_value_falls_back_to_first_tier() {
        let status = classify_std("-5");
        assert_eq!(status.current.name, "Bronze");
        assert_eq!(status.progress_pct, Decimal::ZERO);
        // Remaining reflects the full distance to the next lower bound.
        assert_eq!(status.remaining_to_next, d("1005"));
    }

    #[test]
    fn test_progress_monotonic_within_tier() {
        let values = ["1000", "2500", "4000", "9000", "9999.99"];
        let mut last = Decimal::ZERO;
        for v in values {
            let progress = classify_std(v).progress_pct;
            assert!(progress >= last, "progress decreased at {}", v);
            last = progress;
        }
    }

    #[test]
    fn test_every_value_matches_containing_tier() {
        for v in ["0", "999.99", "1000", "49999", "250000", "1000000"] {
            let status = classify_std(v);
            assert!(status.current.contains(d(v).max(Decimal::ZERO)));
        }
    }
}
