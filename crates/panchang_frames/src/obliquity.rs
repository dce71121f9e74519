//! Obliquity of the ecliptic.
//!
//! Mean obliquity from Meeus eq. 22.2 (IAU 1980 polynomial), good to 0.01″
//! over several centuries around J2000. True obliquity adds Δε.

use panchang_time::jd_to_centuries;

use crate::nutation::nutation;

/// Mean obliquity in degrees at a Julian Date.
///
/// ε₀ = 23°26′21.448″ − 46.8150″T − 0.00059″T² + 0.001813″T³
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity (mean + nutation in obliquity) in degrees.
pub fn true_obliquity_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    mean_obliquity_deg(jd) + nutation(t).deps_arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        let eps = mean_obliquity_deg(2_451_545.0);
        assert!((eps - 23.439_291).abs() < 1e-6, "eps = {eps}");
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10: ε₀ = 23°26′27.407″, ε = 23°26′36.850″
        let jd = 2_446_895.5;
        let eps0 = mean_obliquity_deg(jd);
        assert!((eps0 - 23.440_946).abs() < 1e-5, "eps0 = {eps0}");
        let eps = true_obliquity_deg(jd);
        assert!((eps - 23.443_569).abs() < 5e-5, "eps = {eps}");
    }

    #[test]
    fn secular_decrease() {
        assert!(mean_obliquity_deg(2_451_545.0 + 36_525.0) < mean_obliquity_deg(2_451_545.0));
    }
}
