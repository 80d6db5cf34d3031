//! # Version Handling
//!
//! Small helpers around the version string of a publication: the build
//! system's unset sentinel, the snapshot suffix rule, and an optional strict
//! semver check used by `check --strict`.

use semver::Version;

use crate::error::Result;

/// The reserved "version not set" marker. A version equal to this value must
/// never reach Maven Central; the validator rejects it.
pub const UNSET_VERSION: &str = "unspecified";

/// Suffix marking a non-release build.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Whether the version still holds the unset sentinel.
pub fn is_unset(version: &str) -> bool {
    version == UNSET_VERSION
}

/// Whether the version is a snapshot version.
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with(SNAPSHOT_SUFFIX)
}

/// Apply the snapshot suffix rule at finalization time.
///
/// When `snapshot` is set and the version is not the unset sentinel, returns
/// the version with `-SNAPSHOT` appended. The resolution pipeline applies
/// this exactly once per publication; the suffix is not deduplicated here.
pub fn with_snapshot_suffix(version: &str, snapshot: bool) -> String {
    if snapshot && !is_unset(version) {
        format!("{}{}", version, SNAPSHOT_SUFFIX)
    } else {
        version.to_string()
    }
}

/// Parse a release version as strict semver. Snapshot suffixes are stripped
/// first, since `1.2.3-SNAPSHOT` is a valid semver pre-release but the
/// interesting part is the base version.
pub fn parse_release_version(version: &str) -> Result<Version> {
    let base = version.strip_suffix(SNAPSHOT_SUFFIX).unwrap_or(version);
    Ok(Version::parse(base)?)
}
