//! Format - Display Formatting for Domain Values
//!
//! Every function here is pure and total over valid domain ranges
//! (non-negative amounts, real calendar dates).

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Format a non-negative amount as US dollars, e.g. `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as i64;
    format!("${}.{:02}", format_number(cents / 100), cents % 100)
}

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 && chars[i - 1] != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format a calendar date, e.g. `Mon, Jan 5, 2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Format the local wall-clock time of a timestamp, e.g. `09:30 AM`
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%I:%M %p").to_string()
}

/// Convert a timestamp to the local calendar date
pub fn local_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> NaiveDate {
    dt.with_timezone(&Local).date_naive()
}

/// Format a visit length, e.g. `45 min`, `1 h`, `1 h 30 min`
pub fn format_duration_minutes(minutes: u32) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// Describe `date` relative to `today` within a week, absolute beyond that
pub fn format_relative_day(date: NaiveDate, today: NaiveDate) -> String {
    let days = (date - today).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        2..=6 => format!("In {days} days"),
        -6..=-2 => format!("{} days ago", -days),
        _ => format_date(date),
    }
}

/// Truncate a string to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return s.chars().take(max_chars).collect();
    }
    let head: String = s.chars().take(max_chars - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(50.0), "$50.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.999), "$1,000,001.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(-123456), "-123,456");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2026, 1, 5)), "Mon, Jan 5, 2026");
        assert_eq!(format_date(date(2026, 10, 16)), "Fri, Oct 16, 2026");
    }

    #[test]
    fn test_format_time() {
        let dt = Utc
            .with_ymd_and_hms(2026, 3, 2, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_time(&dt), "09:30 AM");
        let dt = Utc
            .with_ymd_and_hms(2026, 3, 2, 14, 5, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_time(&dt), "02:05 PM");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration_minutes(30), "30 min");
        assert_eq!(format_duration_minutes(60), "1 h");
        assert_eq!(format_duration_minutes(90), "1 h 30 min");
    }

    #[test]
    fn test_format_relative_day() {
        let today = date(2026, 10, 16);
        assert_eq!(format_relative_day(today, today), "Today");
        assert_eq!(format_relative_day(date(2026, 10, 17), today), "Tomorrow");
        assert_eq!(format_relative_day(date(2026, 10, 15), today), "Yesterday");
        assert_eq!(format_relative_day(date(2026, 10, 20), today), "In 4 days");
        assert_eq!(format_relative_day(date(2026, 10, 13), today), "3 days ago");
        assert_eq!(
            format_relative_day(date(2026, 11, 2), today),
            "Mon, Nov 2, 2026"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Amoxicillin trihydrate", 10), "Amoxici...");
        assert_eq!(truncate("résumé", 2), "ré");
    }
}
