//! Formatting utilities used for CLI listings.

use chrono::{NaiveDate, NaiveDateTime};

/// "--" for a missing timestamp, storage format otherwise.
pub fn datetime_or_dash(dt: Option<&NaiveDateTime>) -> String {
    dt.map(crate::utils::date::format_datetime)
        .unwrap_or_else(|| "--".to_string())
}

pub fn date_or_dash(d: Option<&NaiveDate>) -> String {
    d.map(crate::utils::date::format_date)
        .unwrap_or_else(|| "--".to_string())
}

/// 135 → "02h 15m"; negative values keep their sign.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Cut `s` to at most `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
