//! Rendering and drift checking of the generated version-set source.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::manifest::Latest;

/// Header line carrying the generation time. Ignored by the drift check.
pub const TIMESTAMP_PREFIX: &str = "// Generated at: ";

/// Renders the Rust source for `libs/version/src/version_set.rs`.
///
/// Ids are emitted with debug-string escaping, so any manifest id survives
/// as the exact same string literal.
pub fn render(ids: &[&str], latest: &Latest, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("// @generated by version-set-gen. Do not edit by hand.\n");
    out.push_str(&format!(
        "{TIMESTAMP_PREFIX}{}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    out.push_str(&format!(
        "// Latest release: {}, latest snapshot: {}\n",
        latest.release, latest.snapshot
    ));
    out.push_str(&format!("// Entries: {}\n", ids.len()));
    out.push('\n');
    out.push_str("/// Every version id listed in the launcher version manifest, newest first.\n");
    out.push_str("pub(crate) static KNOWN_VERSIONS: &[&str] = &[\n");
    for id in ids {
        out.push_str(&format!("    {id:?},\n"));
    }
    out.push_str("];\n");
    out
}

/// Drops the timestamp header so two renders of the same manifest compare
/// equal.
pub fn strip_timestamp(source: &str) -> String {
    source
        .lines()
        .filter(|line| !line.starts_with(TIMESTAMP_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Fails if `existing` and `fresh` differ beyond the timestamp line.
pub fn check_drift(existing: &str, fresh: &str, path: &Path) -> Result<()> {
    let existing = strip_timestamp(existing);
    let fresh = strip_timestamp(fresh);
    if existing != fresh {
        bail!(
            "version set is stale: {}\n  checked in: sha256={}\n  manifest:   sha256={}\nrerun version-set-gen to refresh it",
            path.display(),
            sha256_hex(existing.as_bytes()),
            sha256_hex(fresh.as_bytes()),
        );
    }
    Ok(())
}

/// Writes `contents` via a sibling temp file and rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to open {}", temp_path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        file.sync_all()?;
    }

    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn latest() -> Latest {
        Latest {
            release: "1.21.10".to_string(),
            snapshot: "25w46a".to_string(),
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_render_layout() {
        let out = render(&["25w46a", "1.21.10"], &latest(), at(1_763_630_043));
        let expected = "\
// @generated by version-set-gen. Do not edit by hand.
// Generated at: 2025-11-20T09:14:03Z
// Latest release: 1.21.10, latest snapshot: 25w46a
// Entries: 2

/// Every version id listed in the launcher version manifest, newest first.
pub(crate) static KNOWN_VERSIONS: &[&str] = &[
    \"25w46a\",
    \"1.21.10\",
];
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_escapes_literals() {
        let out = render(&["quo\"te", "back\\slash", "3D Shareware v1.34"], &latest(), at(0));
        assert!(out.contains(r#"    "quo\"te","#));
        assert!(out.contains(r#"    "back\\slash","#));
        assert!(out.contains(r#"    "3D Shareware v1.34","#));
    }

    #[test]
    fn test_drift_ignores_timestamp() {
        let path = Path::new("version_set.rs");
        let a = render(&["1.21.10"], &latest(), at(0));
        let b = render(&["1.21.10"], &latest(), at(86_400));
        assert_ne!(a, b);
        check_drift(&a, &b, path).unwrap();
    }

    #[test]
    fn test_drift_detects_new_entries() {
        let path = Path::new("version_set.rs");
        let old = render(&["1.21.10"], &latest(), at(0));
        let new = render(&["25w46a", "1.21.10"], &latest(), at(0));
        let err = check_drift(&old, &new, path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("stale"));
        assert!(msg.contains(&sha256_hex(strip_timestamp(&old).as_bytes())));
    }

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/src/version_set.rs");
        write_atomic(&path, "contents").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "contents");
        assert!(!path.with_extension("tmp").exists());
    }
}
