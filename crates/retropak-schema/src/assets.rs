//! Compile-time embedded resource registry.
//!
//! All bundled assets are embedded here with `include_str!` and listed in
//! `(tag, content)` tables. The tables are the single source of truth for
//! what the bundle contains; [`crate::bundle`] indexes them into the
//! process-wide asset maps. Adding a schema version or a locale means
//! adding the file under `schemas/<version>/` or `locales/` and one table
//! row here.

/// Retropak manifest schema, version v1.
const SCHEMA_V1: &str = include_str!("../schemas/v1/retropak.schema.json");

/// English message catalog.
const LOCALE_EN: &str = include_str!("../locales/en.json");

/// Bundled schema documents as (version tag, JSON text) pairs.
pub(crate) const BUNDLED_SCHEMAS: &[(&str, &str)] = &[("v1", SCHEMA_V1)];

/// Bundled locale catalogs as (locale tag, JSON text) pairs.
pub(crate) const BUNDLED_LOCALES: &[(&str, &str)] = &[("en", LOCALE_EN)];
