//! The known-version set.
//!
//! Backed by the generated literal in `version_set.rs`. Regenerate it with
//! `version-set-gen` whenever the launcher manifest is refreshed.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::version_set::KNOWN_VERSIONS;

static KNOWN_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KNOWN_VERSIONS.iter().copied().collect());

/// Returns true if `candidate` is exactly one of the known version ids.
///
/// Case-sensitive, no trimming.
pub fn is_known(candidate: &str) -> bool {
    KNOWN_SET.contains(candidate)
}

/// Iterates the known version ids in manifest order (newest first).
pub fn known_versions() -> impl ExactSizeIterator<Item = &'static str> {
    KNOWN_VERSIONS.iter().copied()
}

/// Number of distinct known version ids.
pub fn known_count() -> usize {
    KNOWN_SET.len()
}
