//! Schema version and provenance carried by serialized code blocks.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// `major.minor.patch` version of the code block payload layout.
///
/// Readers accept payloads with the same major version and an equal or
/// older minor version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Bumped when existing fields change meaning.
    pub major: u32,
    /// Bumped when fields are added.
    pub minor: u32,
    /// Bumped for fixes that leave the layout alone.
    pub patch: u32,
}

impl SchemaVersion {
    /// Layout written by this version of the crates.
    pub const CURRENT: SchemaVersion = SchemaVersion::new(1, 0, 0);

    /// Builds a version triple.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns true when a reader at `self` can load a payload written at `written`.
    pub fn is_compatible_with(&self, written: &SchemaVersion) -> bool {
        self.major == written.major && self.minor >= written.minor
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Where a code block came from and how to recognise it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// SHA-256 of the generator list the block was built from.
    pub input_hash: String,
    /// Canonical SHA-256 of the verified block, filled on serialization.
    pub code_hash: String,
    /// Seed of a randomized presentation, zero when none was used.
    pub seed: u64,
    /// ISO-8601 creation time, empty when the caller did not record one.
    #[serde(default)]
    pub created_at: String,
    /// Crate name to version for every tool that touched the block.
    #[serde(default)]
    pub tool_versions: BTreeMap<String, String>,
}
