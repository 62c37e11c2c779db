//! # mcver-version
//!
//! Validation of Minecraft version ids.
//!
//! ## How a candidate is judged
//!
//! 1. Empty or whitespace-only input is rejected.
//! 2. An exact, case-sensitive match against the known-version set is
//!    accepted. The set is generated from the launcher version manifest and
//!    covers every historical naming convention as plain data: releases
//!    (`1.21.10`), pre-releases and candidates (`1.21.9-pre4`,
//!    `1.14.2 Pre-Release 4`), weekly snapshots (`25w46a`, `23w13a_or_b`),
//!    one-offs (`25w14craftmine`, `3D Shareware v1.34`) and legacy builds
//!    (`rd-132211`, `c0.30_01c`, `inf-20100618`, `a1.2.6`, `b1.7.3`).
//! 3. Anything else is tried against the fallback pattern family, which
//!    currently accepts the year-based scheme: `26.1`, `26.1.1`,
//!    `26.1-snapshot-1`, `26.1-pre-1`, `26.1-rc-1`.
//!
//! No trimming or case folding happens anywhere.
//!
//! ## Example
//!
//! ```
//! use mcver_version::is_valid_version;
//!
//! assert!(is_valid_version("1.21.10"));
//! assert!(is_valid_version("26.1-rc-1"));
//! assert!(!is_valid_version(" 1.21.10"));
//! assert!(!is_valid_version("26.1-rc0"));
//! ```

mod error;
mod id;
mod known;
mod pattern;
mod validator;
mod version_set;

pub use error::{ConfigError, VersionError};
pub use id::VersionId;
pub use known::{is_known, known_count, known_versions};
pub use pattern::{
    PatternFamily, VersionPattern, YearBased, YearWindow, DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN,
    YEAR_BASED_PATTERN,
};
pub use validator::{Source, Validator, ValidatorConfig, ENV_YEAR_MAX, ENV_YEAR_MIN};

/// Returns true if `candidate` is a valid Minecraft version id.
pub fn is_valid_version(candidate: &str) -> bool {
    Validator::global().is_valid(candidate)
}

/// Like [`is_valid_version`], treating an absent value as invalid.
pub fn is_valid_optional(candidate: Option<&str>) -> bool {
    candidate.is_some_and(is_valid_version)
}

/// Like [`is_valid_version`] for arbitrary JSON input. Anything other than a
/// string (null, numbers, booleans, arrays, objects) is invalid.
pub fn is_valid_value(candidate: &serde_json::Value) -> bool {
    candidate.as_str().is_some_and(is_valid_version)
}
