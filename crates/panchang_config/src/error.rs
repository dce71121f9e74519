//! Error type for loading and validating configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors from [`crate::PanchangConfig`] loading, overlay and validation.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config text is not valid JSON for [`crate::PanchangConfig`].
    Parse(serde_json::Error),
    /// A setting holds a value outside its domain.
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse(e) => write!(f, "invalid config JSON: {e}"),
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_key_and_value() {
        let e = ConfigError::InvalidValue {
            key: "ayanamsha",
            value: "bogus".into(),
        };
        assert_eq!(e.to_string(), "invalid value for ayanamsha: \"bogus\"");
        assert!(e.source().is_none());
    }

    #[test]
    fn parse_error_keeps_source() {
        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let e = ConfigError::from(json_err);
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("invalid config JSON"));
    }
}
