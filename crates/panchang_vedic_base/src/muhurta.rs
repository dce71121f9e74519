//! Daytime muhurta windows.
//!
//! Rahu Kalam, Yamagandam and Gulika Kalam each occupy one eighth of the
//! sunrise-to-sunset daytime, at a weekday-dependent position. Abhijit is
//! the 8th of 15 equal daytime muhurtas and straddles local noon.

use serde::Serialize;

use panchang_time::Instant;

use crate::riseset_types::SolarDayWindow;
use crate::vaar::Vaar;

/// 1-based eighth of daytime holding Rahu Kalam, Sunday first.
const RAHU_PART: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
/// 1-based eighth of daytime holding Yamagandam, Sunday first.
const YAMA_PART: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];
/// 1-based eighth of daytime holding Gulika Kalam, Sunday first.
const GULIKA_PART: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

const DAY_MUHURTAS: u8 = 15;
const ABHIJIT_MUHURTA: u8 = 8;

/// A half-open interval of civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: Instant,
    pub end: Instant,
}

impl TimeWindow {
    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

/// The four named windows of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuhurtaWindows {
    pub rahu_kalam: TimeWindow,
    pub yamagandam: TimeWindow,
    pub gulika_kalam: TimeWindow,
    pub abhijit: TimeWindow,
}

/// `part` (1-based) of `parts` equal slices of `[start_jd, end_jd)`.
fn slice(start: &Instant, end: &Instant, part: u8, parts: u8) -> TimeWindow {
    let tz = start.timezone();
    let s = start.julian_day();
    let len = (end.julian_day() - s) / f64::from(parts);
    let from = s + f64::from(part - 1) * len;
    TimeWindow {
        start: Instant::from_julian_day(from, tz),
        end: Instant::from_julian_day(from + len, tz),
    }
}

/// Muhurta windows for a day ruled by `vaar`.
///
/// Returns `None` for polar days and nights, which have no sunrise to
/// divide from.
pub fn muhurta_windows(window: &SolarDayWindow, vaar: Vaar) -> Option<MuhurtaWindows> {
    let SolarDayWindow::Regular { sunrise, sunset, .. } = window else {
        return None;
    };
    let day = usize::from(vaar.index());
    Some(MuhurtaWindows {
        rahu_kalam: slice(sunrise, sunset, RAHU_PART[day], 8),
        yamagandam: slice(sunrise, sunset, YAMA_PART[day], 8),
        gulika_kalam: slice(sunrise, sunset, GULIKA_PART[day], 8),
        abhijit: slice(sunrise, sunset, ABHIJIT_MUHURTA, DAY_MUHURTAS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use panchang_time::Tz;

    fn six_to_six() -> SolarDayWindow {
        let tz = Tz::Asia__Kolkata;
        let at = |h| Instant::from_civil(2024, 1, 14, h, 0, 0, tz).unwrap();
        SolarDayWindow::Regular {
            sunrise: at(6),
            solar_noon: at(12),
            sunset: at(18),
        }
    }

    fn hour_of(i: &Instant) -> f64 {
        f64::from(i.datetime().num_seconds_from_midnight()) / 3600.0
    }

    #[test]
    fn sunday_rahu_is_last_eighth() {
        // 2024-01-14 is a Sunday; 12 h daytime gives 1.5 h eighths
        let w = muhurta_windows(&six_to_six(), Vaar::Ravivaar).unwrap();
        assert!((hour_of(&w.rahu_kalam.start) - 16.5).abs() < 1e-6);
        assert!((hour_of(&w.rahu_kalam.end) - 18.0).abs() < 1e-6);
        assert!((hour_of(&w.yamagandam.start) - 12.0).abs() < 1e-6);
        assert!((hour_of(&w.gulika_kalam.start) - 15.0).abs() < 1e-6);
    }

    #[test]
    fn monday_rahu_second_eighth() {
        let w = muhurta_windows(&six_to_six(), Vaar::Somvaar).unwrap();
        assert!((hour_of(&w.rahu_kalam.start) - 7.5).abs() < 1e-6);
    }

    #[test]
    fn abhijit_straddles_noon() {
        let day = six_to_six();
        let w = muhurta_windows(&day, Vaar::Budhvaar).unwrap();
        assert!(w.abhijit.contains(&day.solar_noon()));
        // 48 minutes for a 12 hour day
        let mins = (w.abhijit.end.julian_day() - w.abhijit.start.julian_day()) * 1440.0;
        assert!((mins - 48.0).abs() < 0.01);
    }

    #[test]
    fn windows_stay_inside_daytime() {
        let day = six_to_six();
        for &v in &crate::vaar::ALL_VAARS {
            let w = muhurta_windows(&day, v).unwrap();
            for win in [w.rahu_kalam, w.yamagandam, w.gulika_kalam] {
                assert!(win.start >= day.sunrise().unwrap());
                assert!(win.end <= day.sunset().unwrap());
            }
        }
    }

    #[test]
    fn polar_day_has_no_windows() {
        let noon = six_to_six().solar_noon();
        assert!(muhurta_windows(&SolarDayWindow::PolarDay { solar_noon: noon }, Vaar::Somvaar).is_none());
    }
}
