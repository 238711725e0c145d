//! Indexed view of a validated content catalog.
//!
//! The index is the only way to obtain a catalog that is known to satisfy the
//! schema invariants: loading validates the raw document against the shipped
//! JSON Schema, decodes it into typed models, and runs the invariant checks
//! before building id-keyed lookups. It is intentionally strict so consumers
//! cannot render a catalog with missing dimension coverage or duplicate ids.

use crate::catalog::identity::{DimensionId, LevelId};
use crate::catalog::model::{
    ContentCatalog, Dimension, LevelProfile, OperationalRoleFamily, RoleFamily, ValueItem,
};
use crate::catalog::validate::{validate, SchemaViolation};
use crate::schema;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug)]
/// Content catalog plus derived indexes keyed by entity id.
pub struct CatalogIndex {
    catalog: ContentCatalog,
    values_by_id: BTreeMap<String, ValueItem>,
    families_by_id: BTreeMap<String, RoleFamily>,
    operational_by_id: BTreeMap<String, OperationalRoleFamily>,
}

impl CatalogIndex {
    /// Load and validate the catalog embedded in the crate.
    ///
    /// The embedded document is authored alongside the code and checked in
    /// CI, so a failure here means the content itself is wrong and must be
    /// fixed at the source.
    pub fn load_embedded() -> Result<Self> {
        Self::load_from_str(crate::EMBEDDED_CATALOG).context("loading embedded content catalog")
    }

    /// Load and validate a catalog from a JSON string.
    ///
    /// Runs the full construction pipeline: JSON Schema validation on the raw
    /// document, typed decoding, then the invariant checks.
    pub fn load_from_str(data: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(data).context("parsing content catalog JSON")?;
        schema::validate_value(&raw)?;
        let catalog: ContentCatalog =
            serde_json::from_value(raw).context("decoding content catalog")?;
        let index = Self::from_catalog(catalog)?;
        Ok(index)
    }

    /// Load and validate a catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::load_from_str(&data).with_context(|| format!("loading {}", path.display()))
    }

    /// Build an index from an already-decoded catalog.
    ///
    /// This is the construction-time validation gate: the first violated
    /// invariant aborts with a [`SchemaViolation`] naming the offending
    /// entity. Id uniqueness is checked before the maps are built, so the
    /// maps cannot silently drop duplicates.
    pub fn from_catalog(catalog: ContentCatalog) -> Result<Self, SchemaViolation> {
        validate(&catalog)?;
        let values_by_id = catalog
            .values
            .iter()
            .map(|v| (v.id.clone(), v.clone()))
            .collect();
        let families_by_id = catalog
            .knogin_role_families
            .iter()
            .map(|f| (f.id.clone(), f.clone()))
            .collect();
        let operational_by_id = catalog
            .operational_role_families
            .iter()
            .map(|f| (f.id.clone(), f.clone()))
            .collect();
        Ok(Self {
            catalog,
            values_by_id,
            families_by_id,
            operational_by_id,
        })
    }

    /// Access the underlying catalog in source order.
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Resolve a value by id.
    ///
    /// Returns `None` instead of erroring; callers surface missing ids with
    /// whatever context referenced them.
    pub fn value(&self, id: &str) -> Option<&ValueItem> {
        self.values_by_id.get(id)
    }

    /// Resolve an internal role family by id.
    pub fn role_family(&self, id: &str) -> Option<&RoleFamily> {
        self.families_by_id.get(id)
    }

    /// Resolve an operational persona family by id.
    pub fn operational_family(&self, id: &str) -> Option<&OperationalRoleFamily> {
        self.operational_by_id.get(id)
    }

    /// Expectations profile for a level. Present for every [`LevelId`] once
    /// the index exists.
    pub fn level(&self, id: LevelId) -> Option<&LevelProfile> {
        self.catalog.levels.get(&id)
    }

    /// Display metadata for a dimension. Present for every [`DimensionId`]
    /// once the index exists.
    pub fn dimension(&self, id: DimensionId) -> Option<&Dimension> {
        self.catalog.dimensions.iter().find(|d| d.id == id)
    }

    /// Iterate value ids in stable (sorted) order.
    pub fn value_ids(&self) -> impl Iterator<Item = &str> {
        self.values_by_id.keys().map(String::as_str)
    }
}
