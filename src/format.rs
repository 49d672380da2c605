//! Display helpers for counts and publish dates

use chrono::NaiveDate;

/// Compact count: `1234` → `"1.2k"`, `999` → `"999"`
pub fn format_number(n: u64) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// Publish date relative to `today`
///
/// Dates are whole calendar days apart; the same day reads "today".
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days().abs();

    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=7 => format!("{} days ago", days),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}
