use serde_json::Value;
use values_catalog::{ContentCatalog, EMBEDDED_CATALOG};

/// The embedded catalog document as raw JSON, for tests that mutate the tree
/// before decoding.
pub fn embedded_value() -> Value {
    serde_json::from_str(EMBEDDED_CATALOG).expect("embedded catalog parses as JSON")
}

pub fn decode(value: Value) -> ContentCatalog {
    serde_json::from_value(value).expect("catalog value decodes")
}

pub fn catalog_fixture() -> ContentCatalog {
    decode(embedded_value())
}
