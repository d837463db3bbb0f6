//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_DATE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap();
}

/// Naive layouts accepted after RFC 3339 fails, read as UTC
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Normalize a front-matter date value.
///
/// Surrounding quotes are dropped. Values that do not start with
/// `YYYY-MM-DD` are rejected; a bare date gets a midnight UTC time.
///
/// # Examples
/// ```
/// use folio::helpers::normalize_date;
///
/// assert_eq!(normalize_date("'2024-03-05'").as_deref(), Some("2024-03-05T00:00:00Z"));
/// assert_eq!(normalize_date("March 5th"), None);
/// ```
pub fn normalize_date(raw: &str) -> Option<String> {
    let cleaned = raw.trim().trim_matches(['"', '\'']).trim();

    if !LEADING_DATE.is_match(cleaned) {
        return None;
    }

    // The pattern only matches ASCII, so ten bytes is exactly the date part
    if cleaned.len() == 10 {
        Some(format!("{}T00:00:00Z", cleaned))
    } else {
        Some(cleaned.to_string())
    }
}

/// Current time as an ISO 8601 string, e.g. `2024-03-05T10:30:00.000Z`
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a normalized date string into a UTC timestamp
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_date() {
        assert_eq!(
            normalize_date("2024-03-05").as_deref(),
            Some("2024-03-05T00:00:00Z")
        );
        assert_eq!(
            normalize_date("\"2024-03-05\"").as_deref(),
            Some("2024-03-05T00:00:00Z")
        );
    }

    #[test]
    fn test_normalize_keeps_time_component() {
        assert_eq!(
            normalize_date("2024-03-05T08:15:00+02:00").as_deref(),
            Some("2024-03-05T08:15:00+02:00")
        );
        assert_eq!(
            normalize_date("2024-03-05 08:15").as_deref(),
            Some("2024-03-05 08:15")
        );
    }

    #[test]
    fn test_normalize_rejects_other_layouts() {
        assert_eq!(normalize_date("05/03/2024"), None);
        assert_eq!(normalize_date("yesterday"), None);
        assert_eq!(normalize_date(""), None);
    }

    #[test]
    fn test_parse_timestamp() {
        let dt = parse_timestamp("2024-03-05T00:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());

        let dt = parse_timestamp("2024-03-05T08:15:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 6, 15, 0).unwrap());

        let dt = parse_timestamp("2024-03-05 08:15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 8, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("2024-13-45T00:00:00Z").is_none());
        assert!(parse_timestamp("2024-03-05Tnoon").is_none());
    }

    #[test]
    fn test_now_iso_round_trips() {
        let now = now_iso();
        assert!(now.ends_with('Z'));
        assert!(parse_timestamp(&now).is_some());
    }
}
