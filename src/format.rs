//! Display helpers for counts, durations and publish dates.

use chrono::{DateTime, NaiveDate};

pub const UNKNOWN_DATE: &str = "Unknown date";

const COUNT_UNITS: &[(u64, &str)] = &[(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")];

/// `950`, `1.2K`, `3.4M`. The unit is picked after rounding to one decimal,
/// so `999_950` reads `1.0M`.
pub fn format_count(n: u64) -> String {
    let Some(mut idx) = COUNT_UNITS.iter().rposition(|(div, _)| n >= *div) else {
        return n.to_string();
    };
    let tenths = |div: u64| (n as u128 * 10 + div as u128 / 2) / div as u128;
    let mut t = tenths(COUNT_UNITS[idx].0);
    if t >= 10_000 && idx + 1 < COUNT_UNITS.len() {
        idx += 1;
        t = tenths(COUNT_UNITS[idx].0);
    }
    format!("{}.{}{}", t / 10, t % 10, COUNT_UNITS[idx].1)
}

/// `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 { format!("{}:{:02}:{:02}", h, m, s) } else { format!("{}:{:02}", m, s) }
}

/// Calendar date of an RFC 3339 timestamp or a plain `YYYY-MM-DD`.
pub fn parse_published(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// `Mar 5, 2024`, or [`UNKNOWN_DATE`] when missing or unparseable.
pub fn format_published(raw: Option<&str>) -> String {
    raw.and_then(parse_published)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}
