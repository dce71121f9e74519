//! Civil instants bound to an IANA timezone.
//!
//! An [`Instant`] is the boundary type of the panchang core: every request
//! enters as a civil date/time in some zone, every computed boundary leaves
//! as one. Internally all astronomy runs on the UT Julian Date.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// An immutable point in time with the civil timezone it should be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    inner: DateTime<Tz>,
}

/// Parse an IANA zone name such as `Asia/Kolkata`.
pub fn parse_timezone(name: &str) -> Result<Tz, TimeError> {
    Tz::from_str(name).map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

impl Instant {
    /// Build an instant from civil fields in `tz`.
    ///
    /// Local times inside a DST gap are rejected; times inside a DST fold
    /// resolve to the earlier of the two offsets.
    pub fn from_civil(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        tz: Tz,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(TimeError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        Self::from_local(NaiveDateTime::new(date, time), tz)
    }

    /// Same as [`Instant::from_civil`] with the zone given by name.
    pub fn from_civil_in(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        zone: &str,
    ) -> Result<Self, TimeError> {
        let tz = parse_timezone(zone)?;
        Self::from_civil(year, month, day, hour, minute, second, tz)
    }

    /// Build an instant from a naive local date-time in `tz`.
    pub fn from_local(local: NaiveDateTime, tz: Tz) -> Result<Self, TimeError> {
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Ok(Self { inner: dt }),
            LocalResult::Ambiguous(earlier, _) => Ok(Self { inner: earlier }),
            LocalResult::None => Err(TimeError::NonexistentLocalTime(format!(
                "{local} in {}",
                tz.name()
            ))),
        }
    }

    /// Local midnight at the start of `date` in `tz`.
    ///
    /// When a DST transition skips local midnight, the wall-clock reading is
    /// taken as UTC instead.
    pub fn start_of_day(date: NaiveDate, tz: Tz) -> Self {
        let midnight = date.and_time(NaiveTime::default());
        match tz.from_local_datetime(&midnight) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Self { inner: dt },
            LocalResult::None => {
                let utc = Utc.from_utc_datetime(&midnight);
                Self {
                    inner: utc.with_timezone(&tz),
                }
            }
        }
    }

    /// Wrap a UTC date-time, to be displayed in `tz`.
    pub fn from_utc(utc: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            inner: utc.with_timezone(&tz),
        }
    }

    /// Convert a UT Julian Date to an instant in `tz`.
    ///
    /// Resolution is one millisecond. Dates outside chrono's range saturate.
    pub fn from_julian_day(jd: f64, tz: Tz) -> Self {
        let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round() as i64;
        let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });
        Self::from_utc(utc, tz)
    }

    /// UT Julian Date (leap seconds ignored).
    pub fn julian_day(&self) -> f64 {
        let secs = self.inner.timestamp() as f64
            + f64::from(self.inner.timestamp_subsec_nanos()) * 1e-9;
        UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
    }

    /// The same instant shown in another zone.
    pub fn with_timezone(&self, tz: Tz) -> Self {
        Self {
            inner: self.inner.with_timezone(&tz),
        }
    }

    /// Civil date in this instant's zone.
    pub fn date(&self) -> NaiveDate {
        self.inner.date_naive()
    }

    /// Civil weekday in this instant's zone.
    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// The zone this instant is shown in.
    pub fn timezone(&self) -> Tz {
        self.inner.timezone()
    }

    /// Underlying zoned date-time.
    pub fn datetime(&self) -> DateTime<Tz> {
        self.inner
    }

    /// The instant in UTC.
    pub fn utc(&self) -> DateTime<Utc> {
        self.inner.with_timezone(&Utc)
    }

    /// RFC 3339 text with numeric offset, second precision.
    pub fn to_rfc3339(&self) -> String {
        self.inner.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    }

    /// Parse an RFC 3339 timestamp and display it in `tz`.
    pub fn parse_rfc3339(text: &str, tz: Tz) -> Result<Self, TimeError> {
        let fixed = DateTime::parse_from_rfc3339(text)
            .map_err(|e| TimeError::Parse(format!("{text}: {e}")))?;
        Ok(Self::from_utc(fixed.with_timezone(&Utc), tz))
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Kolkata;
    use chrono_tz::America::New_York;
    use chrono_tz::UTC;

    #[test]
    fn j2000_julian_day() {
        let t = Instant::from_civil(2000, 1, 1, 12, 0, 0, UTC).unwrap();
        assert!((t.julian_day() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn kolkata_offset_applied() {
        // 05:30 IST = 00:00 UTC
        let t = Instant::from_civil(2024, 1, 15, 5, 30, 0, Kolkata).unwrap();
        assert!((t.julian_day() - 2_460_324.5).abs() < 1e-9);
        assert_eq!(t.to_rfc3339(), "2024-01-15T05:30:00+05:30");
    }

    #[test]
    fn julian_day_round_trip() {
        let t = Instant::from_civil(2024, 3, 20, 8, 45, 30, Kolkata).unwrap();
        let back = Instant::from_julian_day(t.julian_day(), Kolkata);
        assert_eq!(back, t);
    }

    #[test]
    fn invalid_fields_rejected() {
        assert!(matches!(
            Instant::from_civil(2023, 2, 29, 0, 0, 0, UTC),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(matches!(
            Instant::from_civil(2024, 1, 1, 24, 0, 0, UTC),
            Err(TimeError::InvalidTime { .. })
        ));
    }

    #[test]
    fn unknown_zone_rejected() {
        let err = Instant::from_civil_in(2024, 1, 1, 0, 0, 0, "Mars/Olympus").unwrap_err();
        assert_eq!(err, TimeError::UnknownTimezone("Mars/Olympus".into()));
    }

    #[test]
    fn dst_gap_rejected() {
        // 2024-03-10 02:30 does not exist in New York.
        let err = Instant::from_civil(2024, 3, 10, 2, 30, 0, New_York).unwrap_err();
        assert!(matches!(err, TimeError::NonexistentLocalTime(_)));
    }

    #[test]
    fn dst_fold_takes_earlier_offset() {
        // 2024-11-03 01:30 occurs twice in New York; EDT (-04:00) comes first.
        let t = Instant::from_civil(2024, 11, 3, 1, 30, 0, New_York).unwrap();
        assert_eq!(t.to_rfc3339(), "2024-11-03T01:30:00-04:00");
    }

    #[test]
    fn civil_date_follows_zone() {
        let t = Instant::from_civil(2024, 1, 15, 22, 0, 0, UTC).unwrap();
        let ist = t.with_timezone(Kolkata);
        assert_eq!(ist.date(), NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(ist.weekday(), Weekday::Tue);
    }

    #[test]
    fn serializes_as_rfc3339() {
        let t = Instant::from_civil(2024, 1, 15, 6, 0, 0, Kolkata).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2024-01-15T06:00:00+05:30\"");
    }

    #[test]
    fn parse_rfc3339_reprojects() {
        let t = Instant::parse_rfc3339("2024-01-15T00:00:00Z", Kolkata).unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-15T05:30:00+05:30");
        assert!(Instant::parse_rfc3339("yesterday", Kolkata).is_err());
    }
}
