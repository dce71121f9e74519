//! Scan-and-bisect root finding for wrapped angular functions.

use log::trace;
use serde::{Deserialize, Serialize};

/// Termination bounds for boundary bisection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on bisection steps. Default: 30.
    pub max_iterations: u32,
    /// Stop once the wrapped angle difference is this small. Default: 1e-6°.
    pub angle_epsilon_deg: f64,
    /// Stop once the bracket is this narrow. Default: 1e-7 days (~9 ms).
    pub time_epsilon_days: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 30,
            angle_epsilon_deg: 1e-6,
            time_epsilon_days: 1e-7,
        }
    }
}

/// Outcome of a bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub jd: f64,
    pub iterations: u32,
    /// Whether a tolerance was met before the iteration bound.
    pub converged: bool,
}

/// Values beyond this are treated as the ±180° wrap of a pm180 function,
/// not as a root.
const WRAP_GUARD_DEG: f64 = 90.0;

/// Bisect `f` on `[lo, hi]`, which must bracket a sign change.
///
/// Reaching `max_iterations` is not an error: the midpoint of the last
/// bracket is returned with `converged = false`.
pub fn bisect(f: &dyn Fn(f64) -> f64, mut lo: f64, mut hi: f64, config: &SearchConfig) -> Crossing {
    let mut f_lo = f(lo);
    let mut iterations = 0;
    while iterations < config.max_iterations {
        iterations += 1;
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid.abs() < config.angle_epsilon_deg || (hi - lo).abs() < config.time_epsilon_days {
            return Crossing {
                jd: mid,
                iterations,
                converged: true,
            };
        }
        if (f_lo < 0.0) == (f_mid < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Crossing {
        jd: 0.5 * (lo + hi),
        iterations,
        converged: false,
    }
}

/// Scan from `jd_start` in steps of `step` days (negative scans backward)
/// for a sign change of `f`, then bisect it.
///
/// `f` is expected to be a difference wrapped to (-180, 180]; sign changes
/// across the ±180° seam are skipped. Returns `None` when no crossing lies
/// within `max_steps` steps.
pub fn find_zero_crossing(
    f: &dyn Fn(f64) -> f64,
    jd_start: f64,
    step: f64,
    max_steps: usize,
    config: &SearchConfig,
) -> Option<Crossing> {
    let mut t_prev = jd_start;
    let mut f_prev = f(t_prev);
    for i in 1..=max_steps {
        let t = jd_start + step * i as f64;
        let f_t = f(t);
        let sign_change = (f_prev < 0.0) != (f_t < 0.0);
        if sign_change && f_prev.abs() < WRAP_GUARD_DEG && f_t.abs() < WRAP_GUARD_DEG {
            let (lo, hi) = if step > 0.0 { (t_prev, t) } else { (t, t_prev) };
            let crossing = bisect(f, lo, hi, config);
            trace!(
                "crossing in [{lo:.5}, {hi:.5}] after {i} steps, {} iterations",
                crossing.iterations
            );
            return Some(crossing);
        }
        t_prev = t;
        f_prev = f_t;
    }
    None
}
