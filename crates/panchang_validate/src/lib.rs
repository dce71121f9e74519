//! Validation of computed output against reference astronomical events.
//!
//! Cases carry an expectation and a tolerance; [`validate`] compares and
//! never fails, and [`ValidationSuite`] summarizes, reports as text and
//! exports JSON.

pub mod case;
pub mod historical;
pub mod validate;

pub use case::{DeviationUnit, Expectation, ValidationCase};
pub use historical::historical_cases;
pub use validate::{ValidationResult, ValidationSuite, validate};
