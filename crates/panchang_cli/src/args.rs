//! Argument parsing helpers.

use chrono::{NaiveDate, NaiveDateTime};
use panchang_time::{Instant, Tz};

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an RFC 3339 timestamp, or a local date-time in `tz`.
pub fn parse_datetime(text: &str, tz: Tz) -> Result<Instant, String> {
    if let Ok(instant) = Instant::parse_rfc3339(text, tz) {
        return Ok(instant);
    }
    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDThh:mm[:ss][offset], got {text:?}"))?;
    Instant::from_local(naive, tz).map_err(|e| e.to_string())
}

pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {text:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_time_in_zone() {
        let i = parse_datetime("2024-01-25T18:00", Tz::Asia__Kolkata).unwrap();
        assert_eq!(i.to_rfc3339(), "2024-01-25T18:00:00+05:30");
        let j = parse_datetime("2024-01-25 18:00:30", Tz::Asia__Kolkata).unwrap();
        assert_eq!(j.to_rfc3339(), "2024-01-25T18:00:30+05:30");
    }

    #[test]
    fn explicit_offset_wins() {
        let i = parse_datetime("2024-01-25T12:30:00Z", Tz::Asia__Kolkata).unwrap();
        assert_eq!(i.to_rfc3339(), "2024-01-25T18:00:00+05:30");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime("yesterday", Tz::UTC).is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert_eq!(
            parse_date("2024-03-12").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );
    }
}
