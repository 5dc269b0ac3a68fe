//! Environment-driven settings shared by the CLI.
//!
//! Centralizes catalog source resolution and log filter selection so callers
//! resolve both the same way instead of re-reading env vars ad hoc.

use crate::catalog::{ResourceCatalog, builtin_catalog, load_catalog_from_path};
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Env var naming a catalog JSON file to use instead of the built-in one.
pub const CATALOG_ENV: &str = "INFRACHECK_CATALOG";
/// Env var holding a `tracing` filter directive (e.g. `infracheck=debug`).
pub const LOG_ENV: &str = "INFRACHECK_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the env var value when it is set and not blank.
pub fn env_non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Where the catalog should come from: an explicit path wins, then
/// `INFRACHECK_CATALOG`; `None` means the built-in catalog.
pub fn catalog_source(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_non_empty(CATALOG_ENV).map(PathBuf::from))
}

/// Load the catalog named by `catalog_source`, or the built-in one.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<ResourceCatalog> {
    match catalog_source(explicit) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading resource catalog");
            load_catalog_from_path(&path)
        }
        None => Ok(builtin_catalog()),
    }
}

/// Log filter directive from `INFRACHECK_LOG`, defaulting to warnings only.
pub fn log_filter() -> String {
    env_non_empty(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
