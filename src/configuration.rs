//! Credential checks for single resources.

use crate::catalog::{ResourceCatalog, ResourceDefinition};
use crate::network_config::NetworkConfig;

/// True when every key `resource` requires is set in `config`.
///
/// A resource that requires nothing is always configured. Adding keys to
/// `config` can never turn a configured resource into an unconfigured one.
pub fn is_element_configured(resource: &ResourceDefinition, config: &NetworkConfig) -> bool {
    resource.requires_config.iter().all(|key| config.is_set(key))
}

/// Required keys of `resource` that `config` does not provide, in catalog order.
pub fn missing_config_keys<'a>(
    resource: &'a ResourceDefinition,
    config: &NetworkConfig,
) -> Vec<&'a str> {
    resource
        .requires_config
        .iter()
        .filter(|key| !config.is_set(key))
        .map(String::as_str)
        .collect()
}

/// Look up `id` and check its credentials.
///
/// Unknown and unsupported resources are never configured, whatever the
/// config holds.
pub fn is_configured(catalog: &ResourceCatalog, config: &NetworkConfig, id: &str) -> bool {
    let Some(resource) = catalog.find(id) else {
        return false;
    };
    if !resource.supported {
        return false;
    }
    let missing = missing_config_keys(resource, config);
    if !missing.is_empty() {
        tracing::debug!(resource = id, missing = ?missing, "resource is missing config keys");
    }
    missing.is_empty()
}
