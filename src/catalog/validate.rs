//! Construction-time invariant checks for the content catalog.
//!
//! The JSON Schema covers shape and required keys; the checks here cover what
//! a schema cannot express: id uniqueness within each list, full level and
//! dimension coverage in the closed-key mappings, non-empty required lists,
//! and link hrefs. `violations` collects every problem so lint tooling can
//! report them all at once; `validate` is the fail-fast form used when
//! building an index.

use crate::catalog::identity::{DimensionId, LevelId};
use crate::catalog::model::{ContentCatalog, Link};
use std::collections::BTreeSet;
use std::fmt;

/// A catalog that does not satisfy one of the schema invariants.
///
/// Raised only during construction; there is no partial or degraded catalog.
/// Each variant names the offending entity and the invariant it breaks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaViolation {
    DuplicateId { list: String, id: String },
    EmptyId { list: String },
    DuplicateDimension { dimension: DimensionId },
    MissingDimensionEntry { dimension: DimensionId },
    MissingLevel { level: LevelId },
    MissingDimension { level: LevelId, dimension: DimensionId },
    EmptyExpectations { level: LevelId, dimension: DimensionId },
    MissingLevelTitles { family: String, level: LevelId },
    EmptyList { entity: String, field: &'static str },
    MalformedLink { entity: String, label: String, href: String },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::DuplicateId { list, id } => {
                write!(f, "duplicate id '{id}' in {list}")
            }
            SchemaViolation::EmptyId { list } => {
                write!(f, "{list} contains an entry with an empty id")
            }
            SchemaViolation::DuplicateDimension { dimension } => {
                write!(f, "dimensions list repeats '{}'", dimension.as_str())
            }
            SchemaViolation::MissingDimensionEntry { dimension } => {
                write!(f, "dimensions list is missing '{}'", dimension.as_str())
            }
            SchemaViolation::MissingLevel { level } => {
                write!(f, "levels mapping is missing '{}'", level.as_str())
            }
            SchemaViolation::MissingDimension { level, dimension } => {
                write!(
                    f,
                    "level '{}' has no expectations entry for dimension '{}'",
                    level.as_str(),
                    dimension.as_str()
                )
            }
            SchemaViolation::EmptyExpectations { level, dimension } => {
                write!(
                    f,
                    "level '{}' has an empty expectations list for dimension '{}'",
                    level.as_str(),
                    dimension.as_str()
                )
            }
            SchemaViolation::MissingLevelTitles { family, level } => {
                write!(
                    f,
                    "role family '{family}' is missing a typicalTitlesByLevel entry for '{}'",
                    level.as_str()
                )
            }
            SchemaViolation::EmptyList { entity, field } => {
                write!(f, "'{entity}' has an empty {field} list")
            }
            SchemaViolation::MalformedLink { entity, label, href } => {
                write!(
                    f,
                    "link '{label}' on '{entity}' has invalid href '{href}' \
                     (must start with '#' or 'https://')"
                )
            }
        }
    }
}

impl std::error::Error for SchemaViolation {}

/// Validate a catalog, failing on the first violation found.
pub fn validate(catalog: &ContentCatalog) -> Result<(), SchemaViolation> {
    match violations(catalog).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Collect every invariant violation in the catalog.
pub fn violations(catalog: &ContentCatalog) -> Vec<SchemaViolation> {
    let mut out = Vec::new();
    check_dimensions(catalog, &mut out);
    check_levels(catalog, &mut out);
    check_values(catalog, &mut out);
    check_role_families(catalog, &mut out);
    check_operational_families(catalog, &mut out);
    check_site_links(catalog, &mut out);
    out
}

fn check_dimensions(catalog: &ContentCatalog, out: &mut Vec<SchemaViolation>) {
    let mut seen = BTreeSet::new();
    for dimension in &catalog.dimensions {
        if !seen.insert(dimension.id) {
            out.push(SchemaViolation::DuplicateDimension {
                dimension: dimension.id,
            });
        }
    }
    for dimension in DimensionId::ALL {
        if !seen.contains(&dimension) {
            out.push(SchemaViolation::MissingDimensionEntry { dimension });
        }
    }
}

fn check_levels(catalog: &ContentCatalog, out: &mut Vec<SchemaViolation>) {
    for level in LevelId::ALL {
        let Some(profile) = catalog.levels.get(&level) else {
            out.push(SchemaViolation::MissingLevel { level });
            continue;
        };
        for dimension in DimensionId::ALL {
            match profile.expectations.get(&dimension) {
                None => out.push(SchemaViolation::MissingDimension { level, dimension }),
                Some(statements) if statements.is_empty() => {
                    out.push(SchemaViolation::EmptyExpectations { level, dimension });
                }
                Some(_) => {}
            }
        }
    }
}

fn check_values(catalog: &ContentCatalog, out: &mut Vec<SchemaViolation>) {
    check_unique_ids(catalog.values.iter().map(|v| v.id.as_str()), "values", out);
    for value in &catalog.values {
        if value.behaviours.is_empty() {
            out.push(SchemaViolation::EmptyList {
                entity: value.id.clone(),
                field: "behaviours",
            });
        }
    }
}

fn check_role_families(catalog: &ContentCatalog, out: &mut Vec<SchemaViolation>) {
    check_unique_ids(
        catalog.knogin_role_families.iter().map(|f| f.id.as_str()),
        "knoginRoleFamilies",
        out,
    );
    for family in &catalog.knogin_role_families {
        // Entries may be empty lists, but every level key must be present.
        for level in LevelId::ALL {
            if !family.typical_titles_by_level.contains_key(&level) {
                out.push(SchemaViolation::MissingLevelTitles {
                    family: family.id.clone(),
                    level,
                });
            }
        }
        if family.service_lens.is_empty() {
            out.push(SchemaViolation::EmptyList {
                entity: family.id.clone(),
                field: "serviceLens",
            });
        }
    }
}

fn check_operational_families(catalog: &ContentCatalog, out: &mut Vec<SchemaViolation>) {
    check_unique_ids(
        catalog
            .operational_role_families
            .iter()
            .map(|f| f.id.as_str()),
        "operationalRoleFamilies",
        out,
    );
    for family in &catalog.operational_role_families {
        if family.roles.is_empty() {
            out.push(SchemaViolation::EmptyList {
                entity: family.id.clone(),
                field: "roles",
            });
        }
        check_unique_ids(
            family.roles.iter().map(|r| r.id.as_str()),
            &format!("roles of '{}'", family.id),
            out,
        );
        for role in &family.roles {
            let entity = format!("{}/{}", family.id, role.id);
            for (field, list) in [
                ("accountabilities", &role.accountabilities),
                ("whatTheyNeed", &role.what_they_need),
                ("whatKnoginProvides", &role.what_knogin_provides),
            ] {
                if list.is_empty() {
                    out.push(SchemaViolation::EmptyList {
                        entity: entity.clone(),
                        field,
                    });
                }
            }
        }
        if family.service_lens.is_empty() {
            out.push(SchemaViolation::EmptyList {
                entity: family.id.clone(),
                field: "serviceLens",
            });
        }
        if let Some(links) = &family.related_services {
            for link in links {
                check_link(link, &family.id, out);
            }
        }
    }
}

fn check_site_links(catalog: &ContentCatalog, out: &mut Vec<SchemaViolation>) {
    for link in [
        &catalog.site.primary_cta_internal,
        &catalog.site.primary_cta_external,
        &catalog.site.secondary_cta,
    ] {
        check_link(link, "site", out);
    }
}

fn check_link(link: &Link, entity: &str, out: &mut Vec<SchemaViolation>) {
    let anchor = link.href.strip_prefix('#').is_some_and(|rest| !rest.is_empty());
    let https = link
        .href
        .strip_prefix("https://")
        .is_some_and(|rest| !rest.is_empty());
    if !anchor && !https {
        out.push(SchemaViolation::MalformedLink {
            entity: entity.to_string(),
            label: link.label.clone(),
            href: link.href.clone(),
        });
    }
}

fn check_unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    list: &str,
    out: &mut Vec<SchemaViolation>,
) {
    let mut seen = BTreeSet::new();
    for id in ids {
        if id.trim().is_empty() {
            out.push(SchemaViolation::EmptyId {
                list: list.to_string(),
            });
            continue;
        }
        if !seen.insert(id.to_string()) {
            out.push(SchemaViolation::DuplicateId {
                list: list.to_string(),
                id: id.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::ContentCatalog;
    use crate::EMBEDDED_CATALOG;

    fn fixture() -> ContentCatalog {
        ContentCatalog::from_json_str(EMBEDDED_CATALOG).unwrap()
    }

    #[test]
    fn embedded_catalog_has_no_violations() {
        assert_eq!(violations(&fixture()), Vec::new());
        assert!(validate(&fixture()).is_ok());
    }

    #[test]
    fn duplicate_value_id_is_reported() {
        let mut catalog = fixture();
        catalog.values[1].id = catalog.values[0].id.clone();
        let found = violations(&catalog);
        assert!(found.contains(&SchemaViolation::DuplicateId {
            list: "values".to_string(),
            id: catalog.values[0].id.clone(),
        }));
    }

    #[test]
    fn empty_behaviours_is_reported() {
        let mut catalog = fixture();
        catalog.values[2].behaviours.clear();
        let found = violations(&catalog);
        assert!(found.contains(&SchemaViolation::EmptyList {
            entity: catalog.values[2].id.clone(),
            field: "behaviours",
        }));
    }

    #[test]
    fn missing_expectations_name_level_and_dimension() {
        let mut catalog = fixture();
        catalog
            .levels
            .get_mut(&LevelId::L3)
            .unwrap()
            .expectations
            .remove(&DimensionId::Craft);
        let err = validate(&catalog).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::MissingDimension {
                level: LevelId::L3,
                dimension: DimensionId::Craft,
            }
        );
        let message = err.to_string();
        assert!(message.contains("l3"));
        assert!(message.contains("craft"));
    }

    #[test]
    fn empty_expectations_list_is_reported() {
        let mut catalog = fixture();
        catalog
            .levels
            .get_mut(&LevelId::L5)
            .unwrap()
            .expectations
            .insert(DimensionId::Growth, Vec::new());
        let found = violations(&catalog);
        assert!(found.contains(&SchemaViolation::EmptyExpectations {
            level: LevelId::L5,
            dimension: DimensionId::Growth,
        }));
    }

    #[test]
    fn missing_level_titles_name_family_and_level() {
        let mut catalog = fixture();
        catalog.knogin_role_families[0]
            .typical_titles_by_level
            .remove(&LevelId::L6);
        let err = validate(&catalog).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::MissingLevelTitles {
                family: catalog.knogin_role_families[0].id.clone(),
                level: LevelId::L6,
            }
        );
    }

    #[test]
    fn duplicate_role_id_within_family_is_reported() {
        let mut catalog = fixture();
        let family = &mut catalog.operational_role_families[0];
        let first_id = family.roles[0].id.clone();
        family.roles[1].id = first_id.clone();
        let family_id = family.id.clone();
        let found = violations(&catalog);
        assert!(found.contains(&SchemaViolation::DuplicateId {
            list: format!("roles of '{family_id}'"),
            id: first_id,
        }));
    }

    #[test]
    fn insecure_or_bare_hrefs_are_reported() {
        let mut catalog = fixture();
        catalog.site.secondary_cta.href = "http://knogin.com/values".to_string();
        let found = violations(&catalog);
        assert!(matches!(
            found.first(),
            Some(SchemaViolation::MalformedLink { entity, .. }) if entity == "site"
        ));

        let mut catalog = fixture();
        catalog.site.secondary_cta.href = "#".to_string();
        assert!(validate(&catalog).is_err());

        let mut catalog = fixture();
        catalog.site.secondary_cta.href = "https://".to_string();
        assert!(validate(&catalog).is_err());
    }

    #[test]
    fn missing_level_profile_is_reported() {
        let mut catalog = fixture();
        catalog.levels.remove(&LevelId::L2);
        let found = violations(&catalog);
        assert!(found.contains(&SchemaViolation::MissingLevel { level: LevelId::L2 }));
    }

    #[test]
    fn dimension_list_must_cover_all_six() {
        let mut catalog = fixture();
        catalog.dimensions.retain(|d| d.id != DimensionId::Security);
        let found = violations(&catalog);
        assert!(found.contains(&SchemaViolation::MissingDimensionEntry {
            dimension: DimensionId::Security,
        }));
    }
}
