//! Deserializable representation of `content/catalog.json`.
//!
//! The types mirror the catalog document so the rendering layer and tests can
//! reason about the content without ad-hoc JSON handling. Field names follow
//! the document exactly (camelCase where the document uses it) so the tree
//! round-trips under serialization without loss. Use `CatalogIndex` for
//! validation and id lookup; use these structs when the full content surface
//! is required.

use crate::catalog::identity::{DimensionId, LevelId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Full content catalog as stored in the document.
pub struct ContentCatalog {
    pub site: SiteMeta,
    pub values: Vec<ValueItem>,
    pub role_expectations: SectionIntro,
    pub dimensions: Vec<Dimension>,
    pub levels: BTreeMap<LevelId, LevelProfile>,
    pub knogin_role_families: Vec<RoleFamily>,
    pub operational_role_families: Vec<OperationalRoleFamily>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Page-level metadata: titles and the three calls to action.
pub struct SiteMeta {
    pub name: String,
    pub portal_name: String,
    pub description: String,
    pub primary_cta_internal: Link,
    pub primary_cta_external: Link,
    pub secondary_cta: Link,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Labelled reference, either an in-page anchor (`#...`) or an external
/// `https://` URL. Structural validity is checked at construction; liveness is
/// out of scope.
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One organizational value with its observable behaviours.
pub struct ValueItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub behaviours: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Heading block for the role-expectations section of the page.
pub struct SectionIntro {
    pub title: String,
    pub subtitle: String,
    pub note: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Display metadata for one evaluation dimension.
///
/// The `dimensions` list enumerates all six [`DimensionId`]s exactly once;
/// the completeness check lives in `validate`.
pub struct Dimension {
    pub id: DimensionId,
    pub title: String,
    pub hint: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Expectations for one seniority level across every dimension.
pub struct LevelProfile {
    pub title: String,
    pub tagline: String,
    pub summary: String,
    pub expectations: BTreeMap<DimensionId, Vec<String>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Internal job-family grouping mapping levels to typical titles.
pub struct RoleFamily {
    pub id: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
    /// Must carry an entry for every level; entries may be empty when a
    /// family has no titles at that level.
    pub typical_titles_by_level: BTreeMap<LevelId, Vec<String>>,
    pub service_lens: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Customer-facing persona grouping, distinct from internal job families.
pub struct OperationalRoleFamily {
    pub id: String,
    pub title: String,
    pub description: String,
    pub disclaimer: String,
    pub roles: Vec<OperationalRole>,
    pub service_lens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_services: Option<Vec<Link>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One persona within an operational family.
///
/// Owned by its family by composition; role ids are only unique within the
/// family that contains them.
pub struct OperationalRole {
    pub id: String,
    pub title: String,
    pub description: String,
    pub accountabilities: Vec<String>,
    pub what_they_need: Vec<String>,
    pub what_knogin_provides: Vec<String>,
}

impl ContentCatalog {
    /// Parse a catalog from a JSON string without invariant validation.
    pub fn from_json_str(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

/// Read and parse a content catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<ContentCatalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog = ContentCatalog::from_json_str(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EMBEDDED_CATALOG;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = ContentCatalog::from_json_str(EMBEDDED_CATALOG).unwrap();
        assert_eq!(catalog.site.name, "Knogin");
        assert_eq!(catalog.site.portal_name, "Values & Behaviours");
        assert_eq!(catalog.values.len(), 6);
        assert_eq!(catalog.dimensions.len(), 6);
        assert_eq!(catalog.levels.len(), 6);
        assert_eq!(catalog.knogin_role_families.len(), 6);
        assert_eq!(catalog.operational_role_families.len(), 6);
    }

    #[test]
    fn camel_case_fields_round_trip() {
        let catalog = ContentCatalog::from_json_str(EMBEDDED_CATALOG).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json.get("knoginRoleFamilies").is_some());
        assert!(json.get("roleExpectations").is_some());
        let family = &json["knoginRoleFamilies"][0];
        assert!(family.get("typicalTitlesByLevel").is_some());
        assert!(family.get("serviceLens").is_some());
        let role = &json["operationalRoleFamilies"][0]["roles"][0];
        assert!(role.get("whatTheyNeed").is_some());
        assert!(role.get("whatKnoginProvides").is_some());
    }

    #[test]
    fn absent_related_services_stays_absent() {
        let family = OperationalRoleFamily {
            id: "sample".into(),
            title: "Sample".into(),
            description: "Sample family".into(),
            disclaimer: "Personas, not org charts.".into(),
            roles: Vec::new(),
            service_lens: vec!["Keep it defensible.".into()],
            related_services: None,
        };
        let json = serde_json::to_value(&family).unwrap();
        assert!(json.get("relatedServices").is_none());
        let back: OperationalRoleFamily = serde_json::from_value(json).unwrap();
        assert_eq!(back, family);
    }

    #[test]
    fn level_expectations_preserve_statement_order() {
        let catalog = ContentCatalog::from_json_str(EMBEDDED_CATALOG).unwrap();
        let l1 = catalog.levels.get(&LevelId::L1).unwrap();
        let impact = l1.expectations.get(&DimensionId::Impact).unwrap();
        assert_eq!(impact[0], "Owns small tasks and follows established patterns.");
    }
}
