//! # retropak-schema — Bundled Schema & Locale Resolution
//!
//! Typed, versioned access to the bundled Retropak JSON Schema and its
//! localized message catalogs. This crate is the resolution layer only:
//! given a logical request — a schema by version tag, or a catalog by
//! locale tag — it returns the matching embedded content or a typed
//! not-found failure.
//!
//! ## Resolution (`bundle`)
//!
//! The [`bundle`] module holds the process-wide [`ResourceBundle`],
//! assembled lazily from the compile-time resource registry. Key entry
//! points:
//!
//! - [`resolve_schema`] / [`resolve_locale`] — lookup by tag.
//! - [`resolve_default_schema`] / [`resolve_default_locale`] — lookup
//!   under the default tags (`"v1"`, `"en"`).
//!
//! ## Tags (`tag`)
//!
//! [`SchemaVersion`] and [`LocaleTag`] are newtypes per tag namespace.
//! No bare strings for asset addressing.
//!
//! ## What This Crate Does Not Do
//!
//! Schema validation, schema authoring, and message formatting belong to
//! external collaborators (a JSON Schema validator, an i18n layer). The
//! resolver hands them raw text or a decoded JSON value and stops there.
//!
//! ## Crate Policy
//!
//! - Resolution never performs network I/O and never mutates bundled
//!   content.
//! - No fallback substitution: an unsupported tag fails with
//!   [`ResolveError::NotFound`]; fallback policy belongs to the caller.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

mod assets;
pub mod bundle;
pub mod error;
pub mod tag;

// Re-export primary types for ergonomic imports.
pub use bundle::{
    resolve_default_locale, resolve_default_schema, resolve_locale, resolve_schema, LocaleAsset,
    ResourceBundle, SchemaAsset,
};
pub use error::{AssetKind, ResolveError};
pub use tag::{LocaleTag, SchemaVersion};
