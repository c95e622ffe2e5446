//! # Bundle Resolution
//!
//! The process-wide bundle of embedded assets and the lookups over it.
//!
//! ## Resolution Contract
//!
//! A lookup is a pure function of the tag given the fixed bundle: it either
//! returns the one asset registered under that tag or fails with
//! [`ResolveError::NotFound`]. No fallback substitution is performed —
//! requesting `"fr"` when only `"en"` is bundled fails rather than silently
//! returning English. Callers own fallback policy; [`ResourceBundle::locale_tags`]
//! and [`ResourceBundle::schema_versions`] enumerate what is available.
//!
//! ## Caching
//!
//! The tag→asset maps are assembled at most once per process (`OnceLock`)
//! from the [`crate::assets`] registry tables and never invalidated —
//! bundled assets do not change at runtime. Asset content is `&'static`,
//! so repeated resolution of the same tag is byte-identical by construction.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde_json::Value;
use tracing::{debug, trace};

use crate::assets;
use crate::error::{AssetKind, ResolveError};
use crate::tag::{LocaleTag, SchemaVersion};

/// A bundled JSON Schema document, addressed by version tag.
#[derive(Debug, Clone)]
pub struct SchemaAsset {
    version: SchemaVersion,
    raw: &'static str,
}

impl SchemaAsset {
    /// The version tag this asset is registered under.
    pub fn version(&self) -> &SchemaVersion {
        &self.version
    }

    /// Raw JSON text of the schema document.
    pub fn as_str(&self) -> &'static str {
        self.raw
    }

    /// Raw content as bytes.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.raw.as_bytes()
    }

    /// Logical location of this asset within the fixed bundle layout.
    pub fn bundle_path(&self) -> String {
        format!("schemas/{}/retropak.schema.json", self.version)
    }

    /// Decode the schema document as a JSON value.
    ///
    /// Interpretation of the document is the consuming validator's job;
    /// decode errors surface directly as [`serde_json::Error`].
    pub fn document(&self) -> serde_json::Result<Value> {
        serde_json::from_str(self.raw)
    }
}

/// A bundled message catalog, addressed by locale tag.
#[derive(Debug, Clone)]
pub struct LocaleAsset {
    tag: LocaleTag,
    raw: &'static str,
}

impl LocaleAsset {
    /// The locale tag this asset is registered under.
    pub fn tag(&self) -> &LocaleTag {
        &self.tag
    }

    /// Raw JSON text of the catalog.
    pub fn as_str(&self) -> &'static str {
        self.raw
    }

    /// Raw content as bytes.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.raw.as_bytes()
    }

    /// Logical location of this asset within the fixed bundle layout.
    pub fn bundle_path(&self) -> String {
        format!("locales/{}.json", self.tag)
    }

    /// Decode the catalog as a flat key→string mapping.
    ///
    /// Message formatting and interpolation belong to the consuming i18n
    /// layer; decode errors surface directly as [`serde_json::Error`].
    pub fn catalog(&self) -> serde_json::Result<BTreeMap<String, String>> {
        serde_json::from_str(self.raw)
    }
}

/// The fixed set of assets embedded in this build, indexed by tag.
///
/// ## Thread Safety
///
/// `ResourceBundle` is `Send + Sync` and shared behind a `'static`
/// reference; assembly happens at most once, on first use, and concurrent
/// first callers block on the in-flight assembly.
#[derive(Debug)]
pub struct ResourceBundle {
    schemas: HashMap<SchemaVersion, SchemaAsset>,
    locales: HashMap<LocaleTag, LocaleAsset>,
}

impl ResourceBundle {
    /// The process-wide bundle, assembled lazily on first use.
    pub fn bundled() -> &'static ResourceBundle {
        static BUNDLE: OnceLock<ResourceBundle> = OnceLock::new();
        BUNDLE.get_or_init(ResourceBundle::assemble)
    }

    /// Index the embedded registry tables into tag→asset maps.
    fn assemble() -> Self {
        let schemas: HashMap<SchemaVersion, SchemaAsset> = assets::BUNDLED_SCHEMAS
            .iter()
            .map(|&(tag, raw)| {
                let version = SchemaVersion::new(tag);
                (version.clone(), SchemaAsset { version, raw })
            })
            .collect();

        let locales: HashMap<LocaleTag, LocaleAsset> = assets::BUNDLED_LOCALES
            .iter()
            .map(|&(tag, raw)| {
                let tag = LocaleTag::new(tag);
                (tag.clone(), LocaleAsset { tag, raw })
            })
            .collect();

        debug!(
            schemas = schemas.len(),
            locales = locales.len(),
            "assembled bundled resource set"
        );

        Self { schemas, locales }
    }

    /// Look up the schema asset registered under the given version tag.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no schema is bundled under
    /// that version tag.
    pub fn schema(&self, version: &SchemaVersion) -> Result<&SchemaAsset, ResolveError> {
        trace!(%version, "resolving schema asset");
        self.schemas.get(version).ok_or_else(|| ResolveError::NotFound {
            kind: AssetKind::Schema,
            tag: version.as_str().to_string(),
        })
    }

    /// Look up the locale catalog registered under the given locale tag.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no catalog is bundled under
    /// that locale tag.
    pub fn locale(&self, tag: &LocaleTag) -> Result<&LocaleAsset, ResolveError> {
        trace!(%tag, "resolving locale asset");
        self.locales.get(tag).ok_or_else(|| ResolveError::NotFound {
            kind: AssetKind::Locale,
            tag: tag.as_str().to_string(),
        })
    }

    /// Version tags of all bundled schemas, sorted alphabetically.
    pub fn schema_versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = self.schemas.keys().map(|v| v.as_str()).collect();
        versions.sort_unstable();
        versions
    }

    /// Locale tags of all bundled catalogs, sorted alphabetically.
    pub fn locale_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(|t| t.as_str()).collect();
        tags.sort_unstable();
        tags
    }
}

/// Resolve a schema asset from the process-wide bundle.
pub fn resolve_schema(version: &SchemaVersion) -> Result<&'static SchemaAsset, ResolveError> {
    ResourceBundle::bundled().schema(version)
}

/// Resolve a locale catalog from the process-wide bundle.
pub fn resolve_locale(tag: &LocaleTag) -> Result<&'static LocaleAsset, ResolveError> {
    ResourceBundle::bundled().locale(tag)
}

/// Resolve the default schema version (`"v1"`).
pub fn resolve_default_schema() -> Result<&'static SchemaAsset, ResolveError> {
    resolve_schema(&SchemaVersion::default())
}

/// Resolve the default locale (`"en"`).
pub fn resolve_default_locale() -> Result<&'static LocaleAsset, ResolveError> {
    resolve_locale(&LocaleTag::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bundled_schema_version() {
        let asset = resolve_schema(&SchemaVersion::new("v1")).unwrap();
        assert!(!asset.as_str().is_empty());
        assert_eq!(asset.version().as_str(), "v1");
    }

    #[test]
    fn test_repeated_resolution_is_byte_identical() {
        let first = resolve_schema(&SchemaVersion::new("v1")).unwrap();
        let second = resolve_schema(&SchemaVersion::new("v1")).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
        // Same embedded data, not merely equal copies.
        assert!(std::ptr::eq(first.as_str(), second.as_str()));
    }

    #[test]
    fn test_unbundled_schema_version_not_found() {
        let err = resolve_schema(&SchemaVersion::new("v2")).unwrap_err();
        match err {
            ResolveError::NotFound { kind, tag } => {
                assert_eq!(kind, AssetKind::Schema);
                assert_eq!(tag, "v2");
            }
        }
    }

    #[test]
    fn test_unbundled_locale_not_found_without_fallback() {
        let err = resolve_locale(&LocaleTag::new("xx")).unwrap_err();
        match err {
            ResolveError::NotFound { kind, tag } => {
                assert_eq!(kind, AssetKind::Locale);
                assert_eq!(tag, "xx");
            }
        }
    }

    #[test]
    fn test_default_forms_match_explicit_tags() {
        let by_default = resolve_default_locale().unwrap();
        let explicit = resolve_locale(&LocaleTag::new("en")).unwrap();
        assert_eq!(by_default.as_str(), explicit.as_str());

        let by_default = resolve_default_schema().unwrap();
        let explicit = resolve_schema(&SchemaVersion::new("v1")).unwrap();
        assert_eq!(by_default.as_str(), explicit.as_str());
    }

    #[test]
    fn test_schema_document_decodes() {
        let doc = resolve_default_schema().unwrap().document().unwrap();
        assert_eq!(
            doc["$schema"],
            "https://json-schema.org/draft/2020-12/schema"
        );
        assert_eq!(
            doc["$id"],
            "https://retropak.org/schemas/v1/retropak.schema.json"
        );
        assert_eq!(doc["type"], "object");
    }

    #[test]
    fn test_locale_catalog_is_flat_string_map() {
        let catalog = resolve_default_locale().unwrap().catalog().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains_key("error.manifest.invalid"));
    }

    #[test]
    fn test_bundle_paths_follow_layout() {
        let schema = resolve_default_schema().unwrap();
        assert_eq!(schema.bundle_path(), "schemas/v1/retropak.schema.json");

        let locale = resolve_default_locale().unwrap();
        assert_eq!(locale.bundle_path(), "locales/en.json");
    }

    #[test]
    fn test_enumeration_reports_bundled_tags_sorted() {
        let bundle = ResourceBundle::bundled();
        assert_eq!(bundle.schema_versions(), vec!["v1"]);
        assert_eq!(bundle.locale_tags(), vec!["en"]);
    }
}
