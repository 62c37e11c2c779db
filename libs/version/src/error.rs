//! Error types for version parsing and validator configuration.

use thiserror::Error;

/// Reasons a candidate string is not a valid version id.
///
/// The boolean predicates collapse all of these into `false`; this type is
/// for callers that want to report why.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The candidate is the empty string.
    #[error("version cannot be empty")]
    Empty,

    /// The candidate contains only whitespace.
    #[error("version cannot be blank")]
    Blank,

    /// The candidate is neither a known version nor matches a fallback pattern.
    #[error("unrecognized version: '{candidate}'")]
    Unrecognized { candidate: String },
}

impl VersionError {
    /// Returns true if the input was empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        matches!(self, VersionError::Empty | VersionError::Blank)
    }

    /// Returns true if the input had content but was not recognized.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, VersionError::Unrecognized { .. })
    }
}

/// Errors building a validator from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A year bound is not a two-digit number.
    #[error("{field} must be a two-digit year (10..=99), got {value}")]
    YearOutOfRange { field: &'static str, value: u8 },

    /// The lower year bound is above the upper one.
    #[error("year window is inverted: min {min} > max {max}")]
    InvertedWindow { min: u8, max: u8 },

    /// An environment variable could not be parsed.
    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_predicates() {
        assert!(VersionError::Empty.is_blank());
        assert!(VersionError::Blank.is_blank());
        assert!(!VersionError::Empty.is_unrecognized());

        let err = VersionError::Unrecognized {
            candidate: "25w46".to_string(),
        };
        assert!(err.is_unrecognized());
        assert!(!err.is_blank());
        assert_eq!(err.to_string(), "unrecognized version: '25w46'");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::YearOutOfRange {
            field: "year_min",
            value: 5,
        };
        assert_eq!(
            err.to_string(),
            "year_min must be a two-digit year (10..=99), got 5"
        );
        let err = ConfigError::InvertedWindow { min: 40, max: 30 };
        assert_eq!(err.to_string(), "year window is inverted: min 40 > max 30");
    }
}
