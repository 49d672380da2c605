//! Display helpers for counts and publish dates

use chrono::{NaiveDate, NaiveDateTime};

/// Compact count: `1234` → `"1.2k"`
pub fn format_number(n: usize) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// `publish_time` as written by the scraper, date only or with a time
pub fn parse_publish_date(s: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|t| t.date())
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Publish date relative to `today`
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days().abs() {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        days @ 2..=7 => format!("{} days ago", days),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1.2k");
    }

    #[test]
    fn test_relative_publish_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let date = parse_publish_date("2024-03-08 09:30:00").unwrap();
        assert_eq!(format_relative_date(date, today), "2 days ago");
        assert_eq!(parse_publish_date("2024-03-10"), Some(today));
        assert_eq!(parse_publish_date("soon"), None);
    }
}
