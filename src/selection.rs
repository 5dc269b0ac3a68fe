//! Selection validation and resource discovery.
//!
//! `validate_selection` checks a merchant's picks in one pass and collects
//! every problem instead of stopping at the first, so a settings page can show
//! the full list at once. The query functions answer the narrower questions
//! shop workflows ask ("can this shop use a CDN right now?").
//!
//! Every function takes the catalog explicitly. `Validator` bundles a catalog
//! snapshot with a config for callers that ask several questions in a row.

use crate::catalog::{ResourceCatalog, ResourceDefinition, ResourceId, ResourceType};
use crate::configuration::{is_configured, is_element_configured};
use crate::dependency::{dependency_errors, has_required_dependencies};
use crate::network_config::NetworkConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Outcome of validating one selection. `success` is true exactly when
/// `errors` is empty.
pub struct ValidationResult {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }
}

/// Validate `selection` against `catalog` and `config`.
///
/// Checks run in a fixed order:
/// 1. ids that are unknown or unsupported are reported together in one
///    message and dropped, so they cannot trigger follow-on errors;
/// 2. missing dependency edges among the remaining ids;
/// 3. remaining ids whose credentials are incomplete, once per id.
pub fn validate_selection<S: AsRef<str>>(
    catalog: &ResourceCatalog,
    config: &NetworkConfig,
    selection: &[S],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut invalid: Vec<&str> = Vec::new();
    let mut valid: Vec<&str> = Vec::new();
    for entry in selection.iter().map(|entry| entry.as_ref()) {
        if catalog.is_selectable(entry) {
            valid.push(entry);
        } else if !invalid.contains(&entry) {
            invalid.push(entry);
        }
    }
    if !invalid.is_empty() {
        errors.push(format!("Invalid resources selected: {}", invalid.join(", ")));
    }

    if !has_required_dependencies(catalog, &valid) {
        errors.extend(dependency_errors(catalog, &valid));
    }

    let mut checked: BTreeSet<&str> = BTreeSet::new();
    for id in &valid {
        if checked.insert(id) && !is_configured(catalog, config, id) {
            errors.push(format!("{id} is not configured"));
        }
    }

    tracing::debug!(
        selected = selection.len(),
        invalid = invalid.len(),
        errors = errors.len(),
        "validated resource selection"
    );
    ValidationResult::from_errors(errors)
}

/// Supported resources whose credentials are complete, in catalog order.
///
/// Each entry is judged on its own flags, so a duplicate id marked
/// unsupported is never listed even when an earlier entry with that id is.
pub fn available_resources<'a>(
    catalog: &'a ResourceCatalog,
    config: &NetworkConfig,
) -> Vec<&'a ResourceDefinition> {
    catalog
        .iter()
        .filter(|resource| resource.supported && is_element_configured(resource, config))
        .collect()
}

/// Ids of `available_resources`.
pub fn available_resource_ids(catalog: &ResourceCatalog, config: &NetworkConfig) -> Vec<ResourceId> {
    available_resources(catalog, config)
        .into_iter()
        .map(|resource| resource.id.clone())
        .collect()
}

/// Types offered by at least one supported, configured resource.
pub fn supported_types(catalog: &ResourceCatalog, config: &NetworkConfig) -> BTreeSet<ResourceType> {
    available_resources(catalog, config)
        .into_iter()
        .map(|resource| resource.resource_type.clone())
        .collect()
}

/// Types of the catalog resources named in `selection`, configured or not.
pub fn selected_types<S: AsRef<str>>(
    catalog: &ResourceCatalog,
    selection: &[S],
) -> BTreeSet<ResourceType> {
    catalog
        .iter()
        .filter(|resource| {
            selection
                .iter()
                .any(|entry| entry.as_ref() == resource.id.as_str())
        })
        .map(|resource| resource.resource_type.clone())
        .collect()
}

/// True when the merchant picked a resource of `resource_type` and some
/// resource of that type is usable.
pub fn can_use_resource_type<S: AsRef<str>>(
    catalog: &ResourceCatalog,
    config: &NetworkConfig,
    selection: &[S],
    resource_type: &ResourceType,
) -> bool {
    selected_types(catalog, selection).contains(resource_type)
        && supported_types(catalog, config).contains(resource_type)
}

/// True when `id` is selected and available.
pub fn can_use_resource<S: AsRef<str>>(
    catalog: &ResourceCatalog,
    config: &NetworkConfig,
    selection: &[S],
    id: &str,
) -> bool {
    selection.iter().any(|entry| entry.as_ref() == id)
        && available_resources(catalog, config)
            .iter()
            .any(|resource| resource.id.as_str() == id)
}

/// A catalog snapshot paired with one merchant's credentials.
pub struct Validator<'c> {
    catalog: Arc<ResourceCatalog>,
    config: &'c NetworkConfig,
}

impl<'c> Validator<'c> {
    pub fn new(catalog: Arc<ResourceCatalog>, config: &'c NetworkConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn is_configured(&self, id: &str) -> bool {
        is_configured(&self.catalog, self.config, id)
    }

    pub fn validate<S: AsRef<str>>(&self, selection: &[S]) -> ValidationResult {
        validate_selection(&self.catalog, self.config, selection)
    }

    pub fn available_resources(&self) -> Vec<&ResourceDefinition> {
        available_resources(&self.catalog, self.config)
    }

    pub fn available_resource_ids(&self) -> Vec<ResourceId> {
        available_resource_ids(&self.catalog, self.config)
    }

    pub fn supported_types(&self) -> BTreeSet<ResourceType> {
        supported_types(&self.catalog, self.config)
    }

    pub fn selected_types<S: AsRef<str>>(&self, selection: &[S]) -> BTreeSet<ResourceType> {
        selected_types(&self.catalog, selection)
    }

    pub fn can_use_resource_type<S: AsRef<str>>(
        &self,
        selection: &[S],
        resource_type: &ResourceType,
    ) -> bool {
        can_use_resource_type(&self.catalog, self.config, selection, resource_type)
    }

    pub fn can_use_resource<S: AsRef<str>>(&self, selection: &[S], id: &str) -> bool {
        can_use_resource(&self.catalog, self.config, selection, id)
    }
}
