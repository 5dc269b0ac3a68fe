//! Deserializable representation of a resource catalog.
//!
//! The types mirror `schema/resource_catalog.schema.json` so the validator can
//! reason about resource metadata without ad-hoc JSON handling. On disk a
//! catalog is either a bare array of definitions or an object wrapping them
//! under `resources`; both load into the same `ResourceCatalog`.

use crate::catalog::identity::{ResourceId, ResourceType};
use crate::catalog::schema::validate_catalog_value;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One provider entry: what it offers, what it needs, and what it depends on.
pub struct ResourceDefinition {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default = "default_supported")]
    pub supported: bool,
    #[serde(default, rename = "requiresConfig")]
    pub requires_config: Vec<String>,
    #[serde(default)]
    pub depends: Vec<ResourceId>,
}

fn default_supported() -> bool {
    true
}

impl ResourceDefinition {
    /// Supported resource with no config keys and no dependencies.
    pub fn new(id: &str, name: &str, resource_type: ResourceType) -> Self {
        Self {
            id: ResourceId::from(id),
            name: name.to_string(),
            resource_type,
            supported: true,
            requires_config: Vec::new(),
            depends: Vec::new(),
        }
    }

    pub fn requires<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires_config.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ResourceId>,
    {
        self.depends.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Mark the entry as documentation-only; it can never be selected.
    pub fn unsupported(mut self) -> Self {
        self.supported = false;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered list of resource definitions. Replaced wholesale, never edited.
pub struct ResourceCatalog {
    resources: Vec<ResourceDefinition>,
}

impl ResourceCatalog {
    pub fn new(resources: Vec<ResourceDefinition>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceDefinition> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resolve a resource by id.
    ///
    /// Duplicate ids are an authoring error that is not rejected here; the
    /// first entry in catalog order wins so lookups stay deterministic.
    pub fn find(&self, id: &str) -> Option<&ResourceDefinition> {
        self.resources.iter().find(|resource| resource.id.as_str() == id)
    }

    /// Known and `supported`: the only ids a selection may contain.
    pub fn is_selectable(&self, id: &str) -> bool {
        self.find(id).is_some_and(|resource| resource.supported)
    }
}

impl Serialize for ResourceCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.resources.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogRepr {
    Bare(Vec<ResourceDefinition>),
    Wrapped { resources: Vec<ResourceDefinition> },
}

impl<'de> Deserialize<'de> for ResourceCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let resources = match CatalogRepr::deserialize(deserializer)? {
            CatalogRepr::Bare(resources) => resources,
            CatalogRepr::Wrapped { resources } => resources,
        };
        Ok(Self { resources })
    }
}

/// Parse a catalog from JSON text, enforcing the bundled catalog schema.
pub fn parse_catalog(data: &str) -> Result<ResourceCatalog> {
    let value: Value = serde_json::from_str(data).context("parsing resource catalog JSON")?;
    validate_catalog_value(&value)?;
    let catalog: ResourceCatalog =
        serde_json::from_value(value).context("decoding resource catalog")?;
    Ok(catalog)
}

/// Read, schema-check and parse a resource catalog from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<ResourceCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&data).with_context(|| format!("loading catalog {}", path.display()))
}
