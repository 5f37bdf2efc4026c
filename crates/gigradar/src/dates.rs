use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-only formats encountered across the feeds. Naive values are read
/// as UTC midnight.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Best-effort parse of a listing's published/posted field. Formats are
/// tried in order; the first successful parse wins.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%SZ") {
        return Some(naive.and_utc());
    }

    if let Ok(aware) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(aware.with_timezone(&Utc));
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(midnight.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_utc_suffix_timestamp() {
        let parsed = parse_published("2025-11-03T08:30:00Z").expect("parses");
        assert_eq!(parsed.year(), 2025);
        assert_eq!(parsed.hour(), 8);
    }

    #[test]
    fn parses_offset_timestamp_into_utc() {
        let parsed = parse_published("2025-11-03T08:30:00+0200").expect("parses");
        assert_eq!(parsed.hour(), 6);
    }

    #[test]
    fn parses_date_only_as_utc_midnight() {
        let parsed = parse_published("2025-11-03").expect("parses");
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.day(), 3);
    }

    #[test]
    fn parses_locale_date() {
        let parsed = parse_published("11/03/2025").expect("parses");
        assert_eq!(parsed.month(), 11);
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(parse_published("last Tuesday").is_none());
        assert!(parse_published("").is_none());
        assert!(parse_published("   ").is_none());
    }
}
