//! Timestamp and calendar-date parsing
//!
//! All instants are compared as UTC. Timestamps that carry an offset are
//! converted to UTC; timestamps without one are taken as UTC already.
//! Date bounds from the filter panel are calendar dates with no zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Offset-less layouts accepted for `created_ts`, tried in order
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Layouts with a numeric offset but not strict RFC 3339
const OFFSET_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Parse a review's `created_ts` into a UTC instant.
///
/// Returns `None` for blank or unparsable input; callers treat that as
/// "no valid date" rather than an error.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(raw, layout) {
            return Some(dt.naive_utc());
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

/// Parse a date-picker value (`YYYY-MM-DD`); blank means "no bound"
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Inverse of `parse_date_input`: the value to put back in a date picker
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_milli)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        assert_eq!(
            parse_timestamp("2024-03-01T12:00:00+02:00"),
            Some(ymd_hms(2024, 3, 1, 10, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2024-03-01T10:00:00.250Z").map(|t| t.and_utc().timestamp_millis() % 1000),
            Some(250)
        );
    }

    #[test]
    fn test_parse_python_style_timestamps() {
        assert_eq!(
            parse_timestamp("2024-03-01 10:00:00+00:00"),
            Some(ymd_hms(2024, 3, 1, 10, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2024-03-01 10:00:00.123456"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_micro_opt(10, 0, 0, 123_456)
        );
        assert_eq!(
            parse_timestamp("2024-03-01T10:00:00"),
            Some(ymd_hms(2024, 3, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_parse_date_only_timestamp() {
        assert_eq!(parse_timestamp("2024-03-01"), Some(ymd_hms(2024, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn test_unparsable_timestamps() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-45T00:00:00Z"), None);
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_date_input("03/01/2024"), None);

        let date = parse_date_input("2024-12-31");
        assert_eq!(format_date_input(date), "2024-12-31");
        assert_eq!(format_date_input(None), "");
    }

    #[test]
    fn test_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(start_of_day(date), ymd_hms(2024, 3, 1, 0, 0, 0));
        assert_eq!(
            end_of_day(date),
            date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
    }
}
