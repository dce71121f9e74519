//! Truncated lunisolar nutation.
//!
//! Keeps the 13 largest terms of the IAU 2000B series (IERS Conventions
//! 2010, Table 5.3b). The neglected terms sum to well under 0.01″, far
//! below what the closed-form Sun and Moon series can resolve.

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Nutation in longitude and obliquity, arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub dpsi_arcsec: f64,
    /// Δε, nutation in obliquity.
    pub deps_arcsec: f64,
}

/// Delaunay fundamental arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` is Julian centuries since J2000.0. Polynomials from IERS Conventions
/// 2010, Table 5.2e.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Row layout: `[nl, nl', nF, nD, nΩ, S, S', C, C']`, amplitudes in 0.1 µas.
#[rustfmt::skip]
static TERMS: [[i64; 9]; 13] = [
    [ 0,  0,  0,  0,  1, -172064161, -174666, 92052331,  9086],
    [ 0,  0,  2, -2,  2,  -13170906,   -1675,  5730336, -3015],
    [ 0,  0,  2,  0,  2,   -2276413,    -234,   978459,  -485],
    [ 0,  0,  0,  0,  2,    2074554,     207,  -897492,   470],
    [ 0,  1,  0,  0,  0,    1475877,   -3633,    73871,  -184],
    [ 0,  1,  2, -2,  2,    -516821,    1226,   224386,  -677],
    [ 1,  0,  0,  0,  0,     711159,      73,    -6750,     0],
    [ 0,  0,  2,  0,  1,    -387298,    -367,   200728,    18],
    [ 1,  0,  2,  0,  2,    -301461,     -36,   129025,   -63],
    [ 0, -1,  2, -2,  2,     215829,    -494,   -95929,   299],
    [ 0,  0,  2, -2,  1,     128227,     137,   -68982,    -9],
    [-1,  0,  2,  0,  2,     123457,      11,   -53311,    32],
    [-1,  0,  0,  2,  0,     156994,      10,    -1235,     0],
];

/// Nutation at `t` Julian centuries since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let args = fundamental_arguments(t);
    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &TERMS {
        let arg: f64 = (0..5).map(|i| row[i] as f64 * args[i]).sum();
        let (s, c) = arg.sin_cos();
        dpsi += (row[5] as f64 + row[6] as f64 * t) * s;
        deps += (row[7] as f64 + row[8] as f64 * t) * c;
    }
    Nutation {
        dpsi_arcsec: dpsi * 1e-7,
        deps_arcsec: deps * 1e-7,
    }
}
