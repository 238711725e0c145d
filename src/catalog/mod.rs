//! Content catalog wiring.
//!
//! This module wraps the JSON document under `content/catalog.json` so the
//! rendering layer can load a validated snapshot and rely on consistent
//! identifiers. Types here mirror the document fields; callers use
//! `CatalogIndex` for validated access and id lookups, and `violations` when
//! every problem in a document should be reported at once.

pub mod identity;
pub mod index;
pub mod model;
pub mod validate;

pub use identity::{DimensionId, LevelId};
pub use index::CatalogIndex;
pub use model::{
    ContentCatalog, Dimension, LevelProfile, Link, OperationalRole, OperationalRoleFamily,
    RoleFamily, SectionIntro, SiteMeta, ValueItem,
};
pub use validate::{validate, violations, SchemaViolation};

pub use model::load_catalog_from_path;
