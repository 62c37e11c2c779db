//! Typed, validated version id.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;
use crate::validator::{Source, Validator};

/// A version id that passed validation.
///
/// Serializes as the plain string; deserialization re-validates against the
/// global validator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionId {
    id: String,
    source: Source,
}

impl VersionId {
    /// Parses and validates with the global validator.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        Self::parse_with(Validator::global(), s)
    }

    /// Parses and validates with a specific validator.
    pub fn parse_with(validator: &Validator, s: &str) -> Result<Self, VersionError> {
        let source = validator.check(s)?;
        Ok(Self {
            id: s.to_string(),
            source,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Which tier accepted this id.
    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    /// Returns true if this id is in the known-version set.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self.source, Source::Known)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.id
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for VersionId {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for VersionId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl serde::Serialize for VersionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.id)
    }
}

impl<'de> serde::Deserialize<'de> for VersionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
