//! Compiled JSON Schema contract for the catalog document.
//!
//! The schema under `schema/content_catalog.schema.json` is embedded at
//! compile time and compiled once. It enforces shape, required keys (including
//! the closed level and dimension key sets), minimum list lengths, and the
//! href pattern; invariants a schema cannot express live in
//! `catalog::validate`.

use anyhow::{anyhow, bail, Context, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

pub const EMBEDDED_SCHEMA: &str = include_str!("../schema/content_catalog.schema.json");

struct CompiledSchema {
    compiled: JSONSchema,
    // Keeps the schema document alive for as long as the compiled validator.
    _raw: Arc<Value>,
}

fn compiled() -> Result<&'static CompiledSchema> {
    static SCHEMA: OnceLock<CompiledSchema> = OnceLock::new();
    if let Some(schema) = SCHEMA.get() {
        return Ok(schema);
    }

    let raw: Value =
        serde_json::from_str(EMBEDDED_SCHEMA).context("parsing content catalog schema")?;
    let raw = Arc::new(raw);
    let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
    let compiled = JSONSchema::compile(raw_static)
        .map_err(|err| anyhow!("compiling content catalog schema: {err}"))?;
    Ok(SCHEMA.get_or_init(|| CompiledSchema { compiled, _raw: raw }))
}

/// Validate a raw catalog document against the shipped schema.
///
/// Failures list every schema error so authors can fix a document in one
/// pass.
pub fn validate_value(value: &Value) -> Result<()> {
    let schema = compiled()?;
    if let Err(errors) = schema.compiled.validate(value) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("content catalog failed schema validation:\n{details}");
    }
    Ok(())
}
