//! Infrastructure resource selection validator.
//!
//! Merchants pick providers for file storage, DNS, CDN and e-mail from a
//! declarative catalog and hand over their decrypted provider credentials.
//! This crate answers whether that pick is usable: every id known and
//! supported, every direct dependency selected too, every required
//! credential present. Problems come back as a flat list of messages rather
//! than an error, so a settings page can show all of them at once.
//!
//! All checks take the catalog explicitly. The process-wide `CatalogStore`
//! backs `get_catalog`/`set_catalog` and the `validator` shortcut for callers
//! that do not manage catalogs themselves.

pub mod catalog;
pub mod configuration;
pub mod dependency;
pub mod network_config;
pub mod runtime;
pub mod selection;

pub use catalog::{
    CatalogStore, ResourceCatalog, ResourceDefinition, ResourceId, ResourceType, builtin_catalog,
    get_catalog, lint_catalog, load_catalog_from_path, parse_catalog, reset_catalog, set_catalog,
};
pub use configuration::{is_configured, is_element_configured, missing_config_keys};
pub use dependency::{dependency_errors, has_required_dependencies};
pub use network_config::{NetworkConfig, load_network_config};
pub use selection::{
    ValidationResult, Validator, available_resource_ids, available_resources,
    can_use_resource, can_use_resource_type, selected_types, supported_types,
    validate_selection,
};

/// Validator over a snapshot of the process-wide catalog.
///
/// The snapshot is taken once here; later `set_catalog` calls do not affect
/// the returned validator.
pub fn validator(config: &NetworkConfig) -> Validator<'_> {
    Validator::new(get_catalog(), config)
}
