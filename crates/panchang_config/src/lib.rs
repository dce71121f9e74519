//! Configuration for the panchang workspace.
//!
//! [`PanchangConfig`] is loaded from JSON, overlaid with `PANCHANG_*`
//! environment variables, and resolved through a [`MethodTable`] into the
//! [`panchang_search::PanchangOptions`] every computation takes.

pub mod config;
pub mod error;
pub mod method;

pub use config::{
    ENV_AYANAMSHA, ENV_CALENDAR, ENV_METHOD, ENV_PROJECTION, ENV_REGION, ENV_TIMEZONE,
    PanchangConfig,
};
pub use error::ConfigError;
pub use method::{ALL_METHODS, ALL_REGIONS, Method, MethodTable, Profile, Region};
