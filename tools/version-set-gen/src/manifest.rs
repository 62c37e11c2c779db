//! Launcher version manifest.
//!
//! Only `id` feeds the generated set. The remaining fields are parsed so a
//! truncated or foreign document fails loudly instead of yielding an empty
//! set.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Top-level manifest document.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub latest: Latest,
    pub versions: Vec<ManifestVersion>,
}

/// Latest release and snapshot ids.
#[derive(Debug, Clone, Deserialize)]
pub struct Latest {
    pub release: String,
    pub snapshot: String,
}

/// One manifest entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestVersion {
    pub id: String,

    /// `release`, `snapshot`, `old_beta` or `old_alpha`.
    #[serde(rename = "type")]
    pub kind: String,

    pub url: String,
    pub time: DateTime<FixedOffset>,
    pub release_time: DateTime<FixedOffset>,

    /// Absent in the v1 manifest.
    #[serde(default)]
    pub sha1: Option<String>,

    #[serde(default)]
    pub compliance_level: Option<u8>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("invalid manifest: {}", path.display()))
    }

    /// Parses and sanity-checks a manifest document.
    pub fn from_json(contents: &str) -> Result<Self> {
        let manifest: Self =
            serde_json::from_str(contents).context("failed to parse JSON")?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            bail!("manifest lists no versions");
        }
        for (pos, v) in self.versions.iter().enumerate() {
            if v.id.trim().is_empty() {
                bail!("manifest entry {pos} has a blank id");
            }
            if v.url.is_empty() {
                bail!("manifest entry {pos} ({}) has no url", v.id);
            }
            if let Some(sha1) = &v.sha1 {
                if sha1.len() != 40 || !sha1.bytes().all(|b| b.is_ascii_hexdigit()) {
                    bail!("manifest entry {pos} ({}) has a malformed sha1", v.id);
                }
            }
        }
        Ok(())
    }

    /// Most recent `time` across all entries, i.e. when the manifest last
    /// changed.
    pub fn last_updated(&self) -> Option<DateTime<FixedOffset>> {
        self.versions.iter().map(|v| v.time).max()
    }

    /// Highest launcher compliance level any entry requires.
    pub fn max_compliance_level(&self) -> Option<u8> {
        self.versions.iter().filter_map(|v| v.compliance_level).max()
    }

    /// Earliest and latest `releaseTime`.
    pub fn release_span(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let first = self.versions.iter().map(|v| v.release_time).min()?;
        let last = self.versions.iter().map(|v| v.release_time).max()?;
        Some((first, last))
    }

    /// Distinct ids in manifest order; later duplicates are dropped.
    pub fn ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.versions
            .iter()
            .map(|v| v.id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Number of entries per version type.
    pub fn type_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for v in &self.versions {
            *counts.entry(v.kind.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn entry(id: &str, kind: &str) -> String {
        format!(
            r#"{{"id": {id:?}, "type": "{kind}", "url": "https://piston-meta.mojang.com/v1/packages/0/{id}.json", "time": "2025-11-12T12:15:56+00:00", "releaseTime": "2025-11-12T12:06:43+00:00", "sha1": "0000000000000000000000000000000000000000", "complianceLevel": 1}}"#
        )
    }

    pub(crate) fn manifest_json(entries: &[(&str, &str)]) -> String {
        let versions: Vec<_> = entries.iter().map(|(id, kind)| entry(id, kind)).collect();
        format!(
            r#"{{"latest": {{"release": "1.21.10", "snapshot": "25w46a"}}, "versions": [{}]}}"#,
            versions.join(", ")
        )
    }

    #[test]
    fn test_parse_manifest() {
        let json = manifest_json(&[("25w46a", "snapshot"), ("1.21.10", "release")]);
        let manifest = Manifest::from_json(&json).unwrap();
        assert_eq!(manifest.latest.release, "1.21.10");
        assert_eq!(manifest.latest.snapshot, "25w46a");
        assert_eq!(manifest.ids(), ["25w46a", "1.21.10"]);
        assert_eq!(manifest.versions[0].compliance_level, Some(1));
        assert_eq!(manifest.max_compliance_level(), Some(1));
    }

    #[test]
    fn test_v1_entries_without_sha1() {
        let json = r#"{"latest": {"release": "1.0", "snapshot": "1.0"}, "versions": [
            {"id": "1.0", "type": "release", "url": "u", "time": "2011-11-17T22:00:00+00:00", "releaseTime": "2011-11-17T22:00:00+00:00"}
        ]}"#;
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.versions[0].sha1, None);
        assert_eq!(manifest.versions[0].compliance_level, None);
    }

    #[test]
    fn test_ids_keep_first_duplicate() {
        let json = manifest_json(&[
            ("1.21.10", "release"),
            ("25w46a", "snapshot"),
            ("1.21.10", "release"),
        ]);
        let manifest = Manifest::from_json(&json).unwrap();
        assert_eq!(manifest.ids(), ["1.21.10", "25w46a"]);
    }

    #[test]
    fn test_ids_preserve_exact_strings() {
        let json = manifest_json(&[
            ("1.14.2 Pre-Release 4", "snapshot"),
            ("3D Shareware v1.34", "snapshot"),
            ("23w13a_or_b", "snapshot"),
        ]);
        let manifest = Manifest::from_json(&json).unwrap();
        assert_eq!(
            manifest.ids(),
            ["1.14.2 Pre-Release 4", "3D Shareware v1.34", "23w13a_or_b"]
        );
    }

    #[test]
    fn test_type_counts() {
        let json = manifest_json(&[
            ("25w46a", "snapshot"),
            ("1.21.10", "release"),
            ("b1.7.3", "old_beta"),
            ("25w45a", "snapshot"),
        ]);
        let manifest = Manifest::from_json(&json).unwrap();
        let counts = manifest.type_counts();
        assert_eq!(counts.get("snapshot"), Some(&2));
        assert_eq!(counts.get("release"), Some(&1));
        assert_eq!(counts.get("old_beta"), Some(&1));
    }

    #[test]
    fn test_rejects_empty_manifest() {
        let err = Manifest::from_json(&manifest_json(&[])).unwrap_err();
        assert!(err.to_string().contains("no versions"));
    }

    #[test]
    fn test_rejects_blank_id() {
        let json = manifest_json(&[("1.21.10", "release"), ("  ", "release")]);
        let err = Manifest::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn test_rejects_bad_sha1() {
        let json = manifest_json(&[("1.21.10", "release")]);
        let json = json.replace(&"0".repeat(40), "xyz");
        let err = Manifest::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("malformed sha1"));
    }

    #[test]
    fn test_release_span() {
        let json = r#"{"latest": {"release": "1.0", "snapshot": "1.0"}, "versions": [
            {"id": "1.0", "type": "release", "url": "u", "time": "2019-06-28T07:06:37+00:00", "releaseTime": "2011-11-17T22:00:00+00:00"},
            {"id": "rd-132211", "type": "old_alpha", "url": "u", "time": "2022-03-10T09:51:38+00:00", "releaseTime": "2009-05-13T20:11:00+00:00"}
        ]}"#;
        let manifest = Manifest::from_json(json).unwrap();
        let (first, last) = manifest.release_span().unwrap();
        assert_eq!(first.to_rfc3339(), "2009-05-13T20:11:00+00:00");
        assert_eq!(last.to_rfc3339(), "2011-11-17T22:00:00+00:00");
        assert_eq!(
            manifest.last_updated().unwrap().to_rfc3339(),
            "2022-03-10T09:51:38+00:00"
        );
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Manifest::from_json("{\"versions\": 3}").is_err());
        assert!(Manifest::from_json("not json").is_err());
    }
}
