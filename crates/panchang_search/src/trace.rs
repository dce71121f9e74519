//! Optional tracing of search and solver steps.
//!
//! Callers pass `Option<&dyn TraceHook>` into the top-level operations; there
//! is no global registry.

use chrono::NaiveDate;
use log::trace;

use panchang_ephem::Body;
use panchang_vedic_base::SolarDayWindow;

use crate::panchang_types::ElementKind;

/// One observable step of a computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceEvent<'a> {
    /// A boundary located by bisection.
    Boundary {
        kind: ElementKind,
        target_deg: f64,
        jd: f64,
        iterations: u32,
        converged: bool,
    },
    /// No sign change within the scan window; the boundary was extrapolated
    /// from mean motion.
    BoundaryExtrapolated {
        kind: ElementKind,
        target_deg: f64,
        jd: f64,
    },
    /// Sunrise window solved for a civil date.
    SolarDay {
        date: NaiveDate,
        window: &'a SolarDayWindow,
    },
    /// Anchor of a day listing; `polar` when local midnight stands in for
    /// sunrise.
    DayAnchor { date: NaiveDate, jd: f64, polar: bool },
    /// The Moon's upper limb crossing the horizon.
    MoonHorizon {
        rising: bool,
        jd: f64,
        iterations: u32,
    },
    /// Elongation reaching a principal phase angle.
    PhaseCrossing {
        target_deg: f64,
        jd: f64,
        iterations: u32,
    },
    /// A body placed in the observer's sky.
    SkyBody {
        body: Body,
        azimuth_deg: f64,
        altitude_deg: f64,
    },
}

/// Receiver for [`TraceEvent`]s.
pub trait TraceHook {
    fn on_event(&self, event: &TraceEvent<'_>);
}

/// Forwards every event to the `log` facade at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl TraceHook for LogTrace {
    fn on_event(&self, event: &TraceEvent<'_>) {
        trace!("{event:?}");
    }
}

pub(crate) fn emit(hook: Option<&dyn TraceHook>, event: TraceEvent<'_>) {
    if let Some(hook) = hook {
        hook.on_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Collect(RefCell<Vec<String>>);

    impl TraceHook for Collect {
        fn on_event(&self, event: &TraceEvent<'_>) {
            self.0.borrow_mut().push(format!("{event:?}"));
        }
    }

    #[test]
    fn emit_reaches_hook_only_when_present() {
        let c = Collect(RefCell::new(Vec::new()));
        let ev = TraceEvent::BoundaryExtrapolated {
            kind: ElementKind::Tithi,
            target_deg: 12.0,
            jd: 2_460_000.0,
        };
        emit(Some(&c), ev);
        emit(None, ev);
        assert_eq!(c.0.borrow().len(), 1);
        assert!(c.0.borrow()[0].contains("Tithi"));
    }
}
