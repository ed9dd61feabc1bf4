//! Record identifiers.
//!
//! Identifiers are opaque, caller-supplied strings following a human-readable
//! prefix convention (`FRU-001`, `CLI-002`, `ORV-001`). The store never
//! generates identifiers and never checks uniqueness; both are the caller's
//! responsibility.

use serde::{Deserialize, Serialize};

/// Opaque record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Format an identifier in the `PREFIX-NNN` convention used by the seed
    /// data (`RecordId::prefixed("FRU", 1)` → `FRU-001`).
    pub fn prefixed(prefix: &str, n: u32) -> Self {
        Self(format!("{prefix}-{n:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
