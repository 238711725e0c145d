//! Static content catalog for the Knogin "Values & Behaviours" page.
//!
//! The crate exposes one immutable dataset: the organization's values, the
//! six-level seniority framework with per-dimension expectations, internal
//! role families, and customer-facing operational personas. The data lives in
//! `content/catalog.json`, embedded at compile time; [`catalog`] returns a
//! validated, memoized view of it. All validity checking happens at
//! construction: the document is checked against the JSON Schema in
//! `schema/`, then against the invariants a schema cannot express (id
//! uniqueness, full level and dimension coverage). After that the tree is
//! read-only and may be shared across any number of readers.

use anyhow::Result;
use std::sync::OnceLock;

pub mod catalog;
pub mod schema;

pub use catalog::{
    load_catalog_from_path, validate, violations, CatalogIndex, ContentCatalog, Dimension,
    DimensionId, LevelId, LevelProfile, Link, OperationalRole, OperationalRoleFamily, RoleFamily,
    SchemaViolation, SectionIntro, SiteMeta, ValueItem,
};

/// The catalog document shipped with the crate.
pub const EMBEDDED_CATALOG: &str = include_str!("../content/catalog.json");

static CATALOG: OnceLock<CatalogIndex> = OnceLock::new();

/// Validated view of the embedded catalog.
///
/// The first call runs the full construction pipeline (schema validation,
/// decoding, invariant checks) and caches the result; later calls return the
/// same tree without re-validating. An error here means the embedded content
/// is wrong and must be fixed at the source, not handled at runtime.
pub fn catalog() -> Result<&'static CatalogIndex> {
    if let Some(index) = CATALOG.get() {
        return Ok(index);
    }
    let index = CatalogIndex::load_embedded()?;
    Ok(CATALOG.get_or_init(|| index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_returns_the_same_tree() {
        let first = catalog().unwrap();
        let second = catalog().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.catalog(), second.catalog());
    }
}
