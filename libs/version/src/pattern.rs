//! Fallback patterns for version ids not (yet) in the known set.
//!
//! The family currently holds a single rule for the year-based scheme
//! announced for 2026 onward: `YY.M`, `YY.M.H`, optionally suffixed with
//! `-snapshot-N`, `-pre-N` or `-rc-N`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

/// Default inclusive lower bound for the two-digit year.
pub const DEFAULT_YEAR_MIN: u8 = 20;

/// Default inclusive upper bound for the two-digit year.
pub const DEFAULT_YEAR_MAX: u8 = 59;

/// Year-based version shape. The year is captured and range-checked
/// separately so the window stays configurable.
///
/// `[0-9]` rather than `\d`: the latter is Unicode-aware in `regex`.
pub const YEAR_BASED_PATTERN: &str =
    r"^(?P<year>[0-9]{2})\.[0-9]{1,2}(?:\.[0-9]{1,2})?(?:-(?:snapshot|pre|rc)-[1-9][0-9]{0,2})?$";

static YEAR_BASED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(YEAR_BASED_PATTERN).expect("YEAR_BASED_PATTERN must be a valid regex")
});

/// Inclusive two-digit year bounds for the year-based scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearWindow {
    min: u8,
    max: u8,
}

impl YearWindow {
    /// The default window, `20..=59`.
    pub const DEFAULT: Self = Self {
        min: DEFAULT_YEAR_MIN,
        max: DEFAULT_YEAR_MAX,
    };

    /// Creates a window, rejecting bounds that are not two-digit years or
    /// that are inverted.
    pub fn new(min: u8, max: u8) -> Result<Self, ConfigError> {
        for (field, value) in [("year_min", min), ("year_max", max)] {
            if !(10..=99).contains(&value) {
                return Err(ConfigError::YearOutOfRange { field, value });
            }
        }
        if min > max {
            return Err(ConfigError::InvertedWindow { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u8 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Returns true if `year` lies within the window.
    #[must_use]
    pub const fn contains(&self, year: u8) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for YearWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// A syntactic rule for version ids. Must be total: any string in, a
/// boolean out, no panics.
pub trait VersionPattern: fmt::Debug + Send + Sync {
    /// Short name used when reporting which rule matched.
    fn name(&self) -> &'static str;

    /// Returns true if the whole candidate matches this rule.
    fn matches(&self, candidate: &str) -> bool;
}

/// The year-based scheme (`26.1`, `26.1.1`, `26.1-rc-1`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearBased {
    window: YearWindow,
}

impl YearBased {
    #[must_use]
    pub const fn new(window: YearWindow) -> Self {
        Self { window }
    }

    #[must_use]
    pub const fn window(&self) -> YearWindow {
        self.window
    }
}

impl VersionPattern for YearBased {
    fn name(&self) -> &'static str {
        "year-based"
    }

    fn matches(&self, candidate: &str) -> bool {
        YEAR_BASED_RE
            .captures(candidate)
            .and_then(|caps| caps.name("year"))
            .and_then(|year| year.as_str().parse::<u8>().ok())
            .is_some_and(|year| self.window.contains(year))
    }
}

/// An OR-combination of independent patterns.
#[derive(Debug)]
pub struct PatternFamily {
    patterns: Vec<Box<dyn VersionPattern>>,
}

impl PatternFamily {
    /// The standard family for the given year window.
    #[must_use]
    pub fn new(window: YearWindow) -> Self {
        Self::empty().with_pattern(YearBased::new(window))
    }

    /// A family with no rules; matches nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds a rule to the family.
    #[must_use]
    pub fn with_pattern<P: VersionPattern + 'static>(mut self, pattern: P) -> Self {
        self.patterns.push(Box::new(pattern));
        self
    }

    /// Returns true if any rule matches.
    pub fn matches(&self, candidate: &str) -> bool {
        self.matching(candidate).is_some()
    }

    /// Name of the first rule that matches, if any.
    pub fn matching(&self, candidate: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|pattern| pattern.matches(candidate))
            .map(|pattern| pattern.name())
    }

    /// Names of all rules, in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|pattern| pattern.name())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternFamily {
    fn default() -> Self {
        Self::new(YearWindow::DEFAULT)
    }
}
