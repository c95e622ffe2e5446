//! # Asset Tag Newtypes
//!
//! Newtype wrappers for the two tag namespaces used to address bundled
//! assets. These prevent accidental tag confusion — you cannot pass a
//! `LocaleTag` where a `SchemaVersion` is expected.
//!
//! Construction is infallible: a tag is just a label, and a label with no
//! bundled asset behind it surfaces as `NotFound` at resolution time rather
//! than as a constructor error.

use serde::{Deserialize, Serialize};

/// Version tag addressing a bundled schema asset (e.g., `"v1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaVersion(pub String);

/// Language tag addressing a bundled locale catalog (e.g., `"en"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleTag(pub String);

impl SchemaVersion {
    /// Wrap a version tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Access the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl LocaleTag {
    /// Wrap a locale tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Access the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The schema version resolved when callers do not name one.
impl Default for SchemaVersion {
    fn default() -> Self {
        Self("v1".to_string())
    }
}

/// The locale resolved when callers do not name one.
impl Default for LocaleTag {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl From<&str> for SchemaVersion {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl AsRef<str> for SchemaVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
