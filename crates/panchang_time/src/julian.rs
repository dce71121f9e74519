//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Algorithms from Meeus, _Astronomical Algorithms_ (2nd ed.), chapter 7.
//! Valid for the proleptic Gregorian calendar at positive Julian Dates.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day as a fraction (e.g. 1.5 = noon on the
/// first of the month).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` includes the time of day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year() {
        // 2024-01-15 00:00 = JD 2460324.5
        let jd = calendar_to_jd(2024, 1, 15.0);
        assert!((jd - 2_460_324.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn inverse_meeus_example_7c() {
        // JD 2436116.31 = 1957 Oct 4.81
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6, "day = {d}");
    }

    #[test]
    fn inverse_leap_day() {
        let jd = calendar_to_jd(2024, 2, 29.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.25).abs() < 1e-8);
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}
