//! JSON Schema enforcement for resource catalogs.
//!
//! The schema ships inside the crate so catalogs loaded from arbitrary paths
//! are checked against the same contract the built-in catalog follows.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

const CATALOG_SCHEMA: &str = include_str!("../../schema/resource_catalog.schema.json");

/// Bundled schema, parsed and compiled on first use. A failure is kept as its
/// message so every later call reports the same error.
fn compiled_catalog_schema() -> &'static std::result::Result<JSONSchema, String> {
    static COMPILED: OnceLock<std::result::Result<JSONSchema, String>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        let schema: Value = serde_json::from_str(CATALOG_SCHEMA)
            .map_err(|err| format!("parsing bundled catalog schema: {err}"))?;
        JSONSchema::compile(&schema)
            .map_err(|err| format!("compiling bundled catalog schema: {err}"))
    })
}

/// Validate a parsed catalog document, collecting every schema violation
/// into a single error.
pub(crate) fn validate_catalog_value(catalog: &Value) -> Result<()> {
    let compiled = compiled_catalog_schema()
        .as_ref()
        .map_err(|err| anyhow!("{err}"))?;

    if let Err(errors) = compiled.validate(catalog) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("resource catalog failed schema validation:\n{details}");
    }
    Ok(())
}
