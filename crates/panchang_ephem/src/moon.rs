//! Lunar theory after Meeus, _Astronomical Algorithms_ ch. 47.
//!
//! The full 60-term periodic table for longitude and distance is kept
//! (ELP-2000/82 truncated by Chapront), together with the 20 largest
//! latitude terms. Apparent longitude adds nutation in longitude from
//! [`panchang_frames::nutation`].

use panchang_frames::nutation;
use panchang_time::{jd_to_centuries, normalize_360};

use crate::body::{Body, BodyPosition};

/// Worst-case error of [`moon_longitude`] in degrees.
pub const MOON_LONGITUDE_ERROR_DEG: f64 = 0.05;

/// Worst-case error of the lunar latitude in degrees.
pub const MOON_LATITUDE_ERROR_DEG: f64 = 0.02;

/// Mean sidereal motion of the Moon, degrees per day.
pub const MOON_MEAN_MOTION_DEG_PER_DAY: f64 = 13.176_396;

/// Mean Earth–Moon distance term in km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Longitude and distance terms: multiples of D, M, M', F, then
/// Σl coefficient (1e-6 deg) and Σr coefficient (1e-3 km).
#[rustfmt::skip]
const LON_DIST_TERMS: [(i8, i8, i8, i8, i32, i32); 60] = [
    (0,  0,  1,  0, 6_288_774, -20_905_355),
    (2,  0, -1,  0, 1_274_027,  -3_699_111),
    (2,  0,  0,  0,   658_314,  -2_955_968),
    (0,  0,  2,  0,   213_618,    -569_925),
    (0,  1,  0,  0,  -185_116,      48_888),
    (0,  0,  0,  2,  -114_332,      -3_149),
    (2,  0, -2,  0,    58_793,     246_158),
    (2, -1, -1,  0,    57_066,    -152_138),
    (2,  0,  1,  0,    53_322,    -170_733),
    (2, -1,  0,  0,    45_758,    -204_586),
    (0,  1, -1,  0,   -40_923,    -129_620),
    (1,  0,  0,  0,   -34_720,     108_743),
    (0,  1,  1,  0,   -30_383,     104_755),
    (2,  0,  0, -2,    15_327,      10_321),
    (0,  0,  1,  2,   -12_528,           0),
    (0,  0,  1, -2,    10_980,      79_661),
    (4,  0, -1,  0,    10_675,     -34_782),
    (0,  0,  3,  0,    10_034,     -23_210),
    (4,  0, -2,  0,     8_548,     -21_636),
    (2,  1, -1,  0,    -7_888,      24_208),
    (2,  1,  0,  0,    -6_766,      30_824),
    (1,  0, -1,  0,    -5_163,      -8_379),
    (1,  1,  0,  0,     4_987,     -16_675),
    (2, -1,  1,  0,     4_036,     -12_831),
    (2,  0,  2,  0,     3_994,     -10_445),
    (4,  0,  0,  0,     3_861,     -11_650),
    (2,  0, -3,  0,     3_665,      14_403),
    (0,  1, -2,  0,    -2_689,      -7_003),
    (2,  0, -1,  2,    -2_602,           0),
    (2, -1, -2,  0,     2_390,      10_056),
    (1,  0,  1,  0,    -2_348,       6_322),
    (2, -2,  0,  0,     2_236,      -9_884),
    (0,  1,  2,  0,    -2_120,       5_751),
    (0,  2,  0,  0,    -2_069,           0),
    (2, -2, -1,  0,     2_048,      -4_950),
    (2,  0,  1, -2,    -1_773,       4_130),
    (2,  0,  0,  2,    -1_595,           0),
    (4, -1, -1,  0,     1_215,      -3_958),
    (0,  0,  2,  2,    -1_110,           0),
    (3,  0, -1,  0,      -892,       3_258),
    (2,  1,  1,  0,      -810,       2_616),
    (4, -1, -2,  0,       759,      -1_897),
    (0,  2, -1,  0,      -713,      -2_117),
    (2,  2, -1,  0,      -700,       2_354),
    (2,  1, -2,  0,       691,           0),
    (2, -1,  0, -2,       596,           0),
    (4,  0,  1,  0,       549,      -1_423),
    (0,  0,  4,  0,       537,      -1_117),
    (4, -1,  0,  0,       520,      -1_571),
    (1,  0, -2,  0,      -487,      -1_739),
    (2,  1,  0, -2,      -399,           0),
    (0,  0,  2, -2,      -381,      -4_421),
    (1,  1,  1,  0,       351,           0),
    (3,  0, -2,  0,      -340,           0),
    (4,  0, -3,  0,       330,           0),
    (2, -1,  2,  0,       327,           0),
    (0,  2,  1,  0,      -323,       1_165),
    (1,  1, -1,  0,       299,           0),
    (2,  0,  3,  0,       294,           0),
    (2,  0, -1, -2,         0,       8_752),
];

/// Latitude terms: multiples of D, M, M', F, then Σb coefficient (1e-6 deg).
#[rustfmt::skip]
const LAT_TERMS: [(i8, i8, i8, i8, i32); 20] = [
    (0,  0,  0,  1, 5_128_122),
    (0,  0,  1,  1,   280_602),
    (0,  0,  1, -1,   277_693),
    (2,  0,  0, -1,   173_237),
    (2,  0, -1,  1,    55_413),
    (2,  0, -1, -1,    46_271),
    (2,  0,  0,  1,    32_573),
    (0,  0,  2,  1,    17_198),
    (2,  0,  1, -1,     9_266),
    (0,  0,  2, -1,     8_822),
    (2, -1,  0, -1,     8_216),
    (2,  0, -2, -1,     4_324),
    (2,  0,  1,  1,     4_200),
    (2,  1,  0, -1,    -3_359),
    (2, -1, -1,  1,     2_463),
    (2, -1,  0,  1,     2_211),
    (2, -1, -1, -1,     2_065),
    (0,  1, -1, -1,    -1_870),
    (4,  0, -1, -1,     1_828),
    (0,  1,  0,  1,    -1_794),
];

/// Mean arguments in degrees.
struct MeanArguments {
    /// L', mean longitude referred to the mean equinox of date.
    lp: f64,
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
}

impl MeanArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            lp: 218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
            d: 297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            m: 357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
            mp: 134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
            f: 93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }

    /// Argument of a periodic term, radians.
    fn combine(&self, d: i8, m: i8, mp: i8, f: i8) -> f64 {
        (f64::from(d) * self.d + f64::from(m) * self.m + f64::from(mp) * self.mp + f64::from(f) * self.f)
            .to_radians()
    }
}

/// Eccentricity damping for terms involving the solar anomaly.
fn eccentricity_factor(e: f64, m: i8) -> f64 {
    match m.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    }
}

/// Geometric position (no nutation): longitude, latitude in degrees and
/// distance in km.
fn geometric(t: f64) -> (f64, f64, f64) {
    let a = MeanArguments::at(t);
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let lp = a.lp.to_radians();
    let mp = a.mp.to_radians();
    let f = a.f.to_radians();

    let mut sigma_l = 0.0;
    let mut sigma_r = 0.0;
    for &(d, m, mpk, fk, l_coef, r_coef) in &LON_DIST_TERMS {
        let arg = a.combine(d, m, mpk, fk);
        let ef = eccentricity_factor(e, m);
        sigma_l += f64::from(l_coef) * ef * arg.sin();
        sigma_r += f64::from(r_coef) * ef * arg.cos();
    }

    let mut sigma_b = 0.0;
    for &(d, m, mpk, fk, b_coef) in &LAT_TERMS {
        let arg = a.combine(d, m, mpk, fk);
        sigma_b += f64::from(b_coef) * eccentricity_factor(e, m) * arg.sin();
    }

    // Venus, Jupiter and Earth-flattening perturbations
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sigma_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    (
        a.lp + sigma_l / 1e6,
        sigma_b / 1e6,
        MEAN_DISTANCE_KM + sigma_r / 1000.0,
    )
}

/// Apparent geocentric position of the Moon.
pub fn moon_position(jd: f64) -> BodyPosition {
    let t = jd_to_centuries(jd);
    let (lon, lat, dist) = geometric(t);
    let dpsi_deg = nutation(t).dpsi_arcsec / 3600.0;
    BodyPosition {
        body: Body::Moon,
        lon_deg: normalize_360(lon + dpsi_deg),
        lat_deg: lat,
        distance_km: dist,
    }
}

/// Apparent tropical longitude of the Moon in degrees [0, 360).
pub fn moon_longitude(jd: f64) -> f64 {
    moon_position(jd).lon_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometric_matches_meeus_47a() {
        // 1992 April 12.0 TD
        let t = jd_to_centuries(2_448_724.5);
        let (lon, lat, dist) = geometric(t);
        assert!((normalize_360(lon) - 133.162_655).abs() < 0.005, "lon = {lon}");
        assert!((lat - (-3.229_126)).abs() < MOON_LATITUDE_ERROR_DEG, "lat = {lat}");
        assert!((dist - 368_409.7).abs() < 10.0, "dist = {dist}");
    }

    #[test]
    fn eccentricity_factor_powers() {
        assert_eq!(eccentricity_factor(0.9, 0), 1.0);
        assert_eq!(eccentricity_factor(0.9, -1), 0.9);
        assert!((eccentricity_factor(0.9, 2) - 0.81).abs() < 1e-12);
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for i in 0..60 {
            let p = moon_position(2_460_310.5 + i as f64 * 0.5);
            assert!(p.lat_deg.abs() < 5.35, "lat = {}", p.lat_deg);
            assert!((356_000.0..407_000.0).contains(&p.distance_km));
        }
    }
}
