//! The validation predicate.
//!
//! Order is fixed: blank guard, exact membership in the known set, then the
//! fallback pattern family. The first tier that accepts wins.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, VersionError};
use crate::known;
use crate::pattern::{PatternFamily, YearWindow, DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN};

/// Environment variable overriding the lower year bound.
pub const ENV_YEAR_MIN: &str = "MCVER_YEAR_MIN";

/// Environment variable overriding the upper year bound.
pub const ENV_YEAR_MAX: &str = "MCVER_YEAR_MAX";

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Which tier accepted a version id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Exact member of the known-version set.
    Known,
    /// Not known, but matched a fallback pattern.
    Pattern,
}

/// Validator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Inclusive lower bound for year-based versions.
    pub year_min: u8,

    /// Inclusive upper bound for year-based versions.
    pub year_max: u8,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from `MCVER_YEAR_MIN` / `MCVER_YEAR_MAX`, falling
    /// back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`ValidatorConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            year_min: year_var(&lookup, ENV_YEAR_MIN, defaults.year_min)?,
            year_max: year_var(&lookup, ENV_YEAR_MAX, defaults.year_max)?,
        };
        config.year_window()?;
        Ok(config)
    }

    /// The configured window, validated.
    pub fn year_window(&self) -> Result<YearWindow, ConfigError> {
        YearWindow::new(self.year_min, self.year_max)
    }
}

fn year_var<F>(lookup: &F, var: &'static str, default: u8) -> Result<u8, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        None => Ok(default),
    }
}

/// Known set plus fallback patterns.
#[derive(Debug, Default)]
pub struct Validator {
    patterns: PatternFamily,
}

impl Validator {
    /// Builds a validator from configuration.
    pub fn new(config: &ValidatorConfig) -> Result<Self, ConfigError> {
        let window = config.year_window()?;
        debug!(year_window = %window, "validator configured");
        Ok(Self::with_year_window(window))
    }

    /// Builds a validator with the standard pattern family over `window`.
    #[must_use]
    pub fn with_year_window(window: YearWindow) -> Self {
        Self::with_patterns(PatternFamily::new(window))
    }

    /// Builds a validator with a custom pattern family.
    #[must_use]
    pub fn with_patterns(patterns: PatternFamily) -> Self {
        Self { patterns }
    }

    /// The process-wide validator with the default window.
    pub fn global() -> &'static Validator {
        &DEFAULT_VALIDATOR
    }

    pub fn patterns(&self) -> &PatternFamily {
        &self.patterns
    }

    /// Returns true if `candidate` is a valid version id.
    ///
    /// Total: never panics, never logs.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.classify(candidate).is_some()
    }

    /// Reports which tier accepts `candidate`, or `None` if it is invalid.
    pub fn classify(&self, candidate: &str) -> Option<Source> {
        self.check(candidate).ok()
    }

    /// Like [`Validator::classify`], with a reason on rejection.
    pub fn check(&self, candidate: &str) -> Result<Source, VersionError> {
        if candidate.is_empty() {
            return Err(VersionError::Empty);
        }
        if is_blank(candidate) {
            return Err(VersionError::Blank);
        }
        if known::is_known(candidate) {
            return Ok(Source::Known);
        }
        if self.patterns.matches(candidate) {
            return Ok(Source::Pattern);
        }
        Err(VersionError::Unrecognized {
            candidate: candidate.to_string(),
        })
    }
}

/// Whitespace-only, counting U+FEFF as whitespace.
fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_check_reasons() {
        let v = Validator::global();
        assert_eq!(v.check(""), Err(VersionError::Empty));
        assert_eq!(v.check(" \t\r\n"), Err(VersionError::Blank));
        assert_eq!(v.check("\u{feff}"), Err(VersionError::Blank));
        assert_eq!(v.check("\u{a0}"), Err(VersionError::Blank));
        assert_eq!(v.check("1.21.10"), Ok(Source::Known));
        assert_eq!(v.check("26.1-rc-1"), Ok(Source::Pattern));
        assert!(v.check("1.21.10-beta").unwrap_err().is_unrecognized());
    }

    #[test]
    fn test_known_wins_over_pattern() {
        // 25w14craftmine is data only; 24.12 is pattern only.
        let v = Validator::global();
        assert_eq!(v.classify("25w14craftmine"), Some(Source::Known));
        assert_eq!(v.classify("24.12"), Some(Source::Pattern));
    }

    #[test]
    fn test_known_set_ignores_year_window() {
        let v = Validator::with_patterns(PatternFamily::empty());
        assert!(v.is_valid("1.21.10"));
        assert!(v.is_valid("a1.2.6"));
        assert!(!v.is_valid("26.1"));
    }

    #[test]
    fn test_config_defaults() {
        let config = ValidatorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.year_window().unwrap(), YearWindow::DEFAULT);
    }

    #[test]
    fn test_config_from_env_vars() {
        let vars = [(ENV_YEAR_MIN, "26"), (ENV_YEAR_MAX, " 40 ")];
        let config = ValidatorConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.year_min, 26);
        assert_eq!(config.year_max, 40);

        let v = Validator::new(&config).unwrap();
        assert!(!v.is_valid("25.1"));
        assert!(v.is_valid("40.1"));
        assert!(!v.is_valid("41.1"));
    }

    #[test]
    fn test_config_rejects_garbage() {
        let vars = [(ENV_YEAR_MIN, "twenty")];
        assert_eq!(
            ValidatorConfig::from_lookup(lookup(&vars)),
            Err(ConfigError::InvalidEnv {
                var: ENV_YEAR_MIN,
                value: "twenty".to_string()
            })
        );

        let vars = [(ENV_YEAR_MIN, "50"), (ENV_YEAR_MAX, "30")];
        assert_eq!(
            ValidatorConfig::from_lookup(lookup(&vars)),
            Err(ConfigError::InvertedWindow { min: 50, max: 30 })
        );
    }

    #[test]
    fn test_config_from_process_env() {
        // The only test in this crate that touches MCVER_* variables.
        std::env::set_var(ENV_YEAR_MIN, "21");
        std::env::set_var(ENV_YEAR_MAX, "45");
        let config = ValidatorConfig::from_env();
        std::env::remove_var(ENV_YEAR_MIN);
        std::env::remove_var(ENV_YEAR_MAX);

        let config = config.unwrap();
        assert_eq!(config.year_min, 21);
        assert_eq!(config.year_max, 45);
        assert_eq!(ValidatorConfig::from_env(), Ok(ValidatorConfig::default()));
    }

    #[test]
    fn test_config_json_partial() {
        let config: ValidatorConfig = serde_json::from_str(r#"{"year_max": 35}"#).unwrap();
        assert_eq!(config.year_min, DEFAULT_YEAR_MIN);
        assert_eq!(config.year_max, 35);
    }

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Source::Known).unwrap(),
            "\"known\""
        );
        assert_eq!(
            serde_json::to_string(&Source::Pattern).unwrap(),
            "\"pattern\""
        );
    }
}
