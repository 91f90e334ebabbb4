use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

/// Interpret a search query as a creation-date window: a full `YYYY-MM-DD`
/// day, a `YYYY-MM` month, or a bare `YYYY` year. Anything else (including
/// out-of-range months) returns `None` and the query falls through to
/// substring matching.
pub fn parse_date_window(query: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if let Ok(day) = NaiveDate::parse_from_str(query, "%Y-%m-%d") {
        let start = day.and_hms_opt(0, 0, 0)?.and_utc();
        let end = day.succ_opt()?.and_hms_opt(0, 0, 0)?.and_utc();
        return Some((start, end));
    }

    let year_month = Regex::new(r"^(\d{4})-(\d{2})$").unwrap();
    if let Some(caps) = year_month.captures(query) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        return month_window(year, month);
    }

    let year_only = Regex::new(r"^\d{4}$").unwrap();
    if year_only.is_match(query) {
        let year: i32 = query.parse().ok()?;
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?.and_utc();
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?
            .and_hms_opt(0, 0, 0)?
            .and_utc();
        return Some((start, end));
    }

    None
}

/// Half-open window covering one calendar month.
pub fn month_window(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((
        start.and_hms_opt(0, 0, 0)?.and_utc(),
        end.and_hms_opt(0, 0, 0)?.and_utc(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_full_date_window() {
        let (start, end) = parse_date_window("2024-03-15").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_year_month_window() {
        let (start, end) = parse_date_window("2024-03").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_year_window() {
        let (start, end) = parse_date_window("2024").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_december_wraps_to_next_year() {
        let (start, end) = month_window(2024, 12).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_malformed_queries_fall_through() {
        assert!(parse_date_window("2024-13").is_none());
        assert!(parse_date_window("2024-00").is_none());
        assert!(parse_date_window("2024-02-30").is_none());
        assert!(parse_date_window("202").is_none());
        assert!(parse_date_window("20245").is_none());
        assert!(parse_date_window("pragmatic").is_none());
    }
}
