use marginview::engine::tiering::classify;
use marginview::{Decimal, TierTable};

fn d(s: &str) -> Decimal {
    Decimal::parse(s).unwrap()
}

#[test]
fn test_standard_table_covers_non_negative_values() {
    let table = TierTable::standard();
    let samples = [
        "0", "0.01", "999.99", "1000", "9999.99", "10000", "49999.99", "50000", "249999.99",
        "250000", "999999.99", "1000000", "98765432.1",
    ];
    for s in samples {
        let value = d(s);
        let status = classify(&table, value);
        assert!(
            status.current.contains(value),
            "value {} not inside its classified tier {}",
            s,
            status.current.name
        );
        // Exactly one tier matches.
        let matches = table.tiers().iter().filter(|t| t.contains(value)).count();
        assert_eq!(matches, 1, "value {} matched {} tiers", s, matches);
    }
}

#[test]
fn test_boundary_values() {
    let table = TierTable::standard();
    assert_eq!(classify(&table, d("999.99")).current.name, "Bronze");
    assert_eq!(classify(&table, d("1000")).current.name, "Silver");
    assert_eq!(classify(&table, d("9999.99")).current.name, "Silver");
    assert_eq!(classify(&table, d("10000")).current.name, "Gold");
}

#[test]
fn test_last_tier_is_terminal() {
    let table = TierTable::standard();
    let status = classify(&table, d("1000000"));
    assert_eq!(status.current.name, "Elite");
    assert_eq!(status.rank, 6);
    assert!(status.next.is_none());
    assert_eq!(status.progress_pct, Decimal::ONE_HUNDRED);
    assert_eq!(status.remaining_to_next, Decimal::ZERO);
}

#[test]
fn test_progress_monotonic_and_resets_across_boundary() {
    let table = TierTable::standard();
    // Walk Silver in steps; progress must never decrease.
    let mut last = Decimal::ZERO;
    for v in ["1000", "1900", "4000", "7300", "9999"] {
        let progress = classify(&table, d(v)).progress_pct;
        assert!(progress >= last, "progress decreased at {}", v);
        last = progress;
    }
    // First value of Gold starts over at zero.
    assert_eq!(classify(&table, d("10000")).progress_pct, Decimal::ZERO);
}

#[test]
fn test_remaining_plus_value_reaches_next_tier() {
    let table = TierTable::standard();
    for v in ["0", "1500", "12000", "51234.56", "400000"] {
        let value = d(v);
        let status = classify(&table, value);
        let next = status.next.expect("non-terminal sample");
        assert_eq!(value + status.remaining_to_next, next.min_value);
    }
}

#[test]
fn test_custom_table_classification() {
    let json = r#"[
        {"name": "Starter", "minValue": 0, "maxValue": 500, "accent": "gray"},
        {"name": "Pro", "minValue": 500, "maxValue": 2000, "accent": "blue"},
        {"name": "Whale", "minValue": 2000, "maxValue": null, "accent": "gold"}
    ]"#;
    let table: TierTable = serde_json::from_str(json).unwrap();
    let status = classify(&table, d("750"));
    assert_eq!(status.current.name, "Pro");
    assert_eq!(status.rank, 2);
    // 250 into a 1500-wide bracket.
    assert_eq!(status.progress_pct.round_dp(4), d("16.6667"));
    assert_eq!(status.remaining_to_next, d("1250"));
}
