//! # Error Types
//!
//! The resolver has a single failure mode: the requested tag has no bundled
//! asset behind it. The condition is static and deterministic — the bundle
//! is fixed at compile time — so there is nothing to retry.
//!
//! Malformed asset content is not a resolver error: the decode conveniences
//! on the asset handles return `serde_json::Error` from the collaborating
//! crate directly.

use thiserror::Error;

/// Which namespace of bundled assets a request addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A versioned JSON Schema document.
    Schema,
    /// A localized message catalog.
    Locale,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Schema => write!(f, "schema"),
            AssetKind::Locale => write!(f, "locale"),
        }
    }
}

/// Error resolving a bundled asset.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No asset is registered under the requested tag. No fallback
    /// substitution is performed; fallback policy belongs to the caller.
    #[error("no bundled {kind} asset registered under tag '{tag}'")]
    NotFound {
        /// The namespace that was searched.
        kind: AssetKind,
        /// The tag that had no asset behind it.
        tag: String,
    },
}
