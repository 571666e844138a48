//! Display formatting for numeric view-model fields.
//!
//! Locale handling is out of scope for this service; grouping follows the
//! en-US convention and translated labels stay client-side. These helpers
//! are deterministic so formatted strings can be asserted in tests.

use crate::domain::{Decimal, TimeMs};
use chrono::{TimeZone, Utc};

/// Fixed-decimal string with thousands grouping, e.g. `1,234,567.89`.
pub fn format_numeric(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    let sign = if rounded.is_negative() { "-" } else { "" };
    format!("{}{}", sign, grouped_abs(rounded, dp))
}

/// Currency string with two decimals, e.g. `$1,234.50` / `-$0.25`.
pub fn format_currency(value: Decimal) -> String {
    format_currency_dp(value, 2)
}

/// Currency string with explicit decimal places.
pub fn format_currency_dp(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    let sign = if rounded.is_negative() { "-" } else { "" };
    format!("{}${}", sign, grouped_abs(rounded, dp))
}

/// Percentage string, e.g. `12.3%`.
pub fn format_percent(value: Decimal, dp: u32) -> String {
    format!("{}%", format_numeric(value, dp))
}

/// Wall-clock label for chat timestamps, e.g. `2:05pm`. Empty string for
/// timestamps outside chrono's representable range.
pub fn clock_label(time: TimeMs) -> String {
    match Utc.timestamp_millis_opt(time.as_ms()).single() {
        Some(dt) => dt.format("%-I:%M%P").to_string(),
        None => String::new(),
    }
}

/// Absolute value of `value` rendered with exactly `dp` decimals and
/// comma-grouped integer digits. `value` must already be rounded to `dp`.
fn grouped_abs(value: Decimal, dp: u32) -> String {
    let plain = value.abs().inner().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (plain, String::new()),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if dp == 0 {
        return grouped;
    }
    let mut frac = frac_part;
    frac.truncate(dp as usize);
    while frac.len() < dp as usize {
        frac.push('0');
    }
    format!("{}.{}", grouped, frac)
}
