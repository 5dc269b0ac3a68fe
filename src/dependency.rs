//! Direct dependency checks for a selection.
//!
//! Only the edges a resource declares itself are checked; dependencies of
//! dependencies are not expanded. Catalog authors list the complete direct
//! set for each resource, which keeps this a single pass with no cycle
//! handling.

use crate::catalog::{ResourceCatalog, ResourceDefinition, ResourceId};

/// True when every selected resource has all of its dependencies selected.
///
/// Ids without a catalog entry contribute no edges; the selection validator
/// reports them separately.
pub fn has_required_dependencies<S: AsRef<str>>(catalog: &ResourceCatalog, selection: &[S]) -> bool {
    unsatisfied_edges(catalog, selection).next().is_none()
}

/// One `"<resource name> requires <dependency name>"` message per missing edge.
///
/// Messages follow selection order, then declaration order within `depends`,
/// and are not deduplicated. Unknown dependency ids are named by their raw id.
pub fn dependency_errors<S: AsRef<str>>(catalog: &ResourceCatalog, selection: &[S]) -> Vec<String> {
    unsatisfied_edges(catalog, selection)
        .map(|(resource, dep)| {
            let dep_name = catalog
                .find(dep.as_str())
                .map(|target| target.name.as_str())
                .unwrap_or(dep.as_str());
            format!("{} requires {}", resource.name, dep_name)
        })
        .collect()
}

fn unsatisfied_edges<'a, S: AsRef<str>>(
    catalog: &'a ResourceCatalog,
    selection: &'a [S],
) -> impl Iterator<Item = (&'a ResourceDefinition, &'a ResourceId)> + 'a {
    let selected = move |id: &ResourceId| selection.iter().any(|entry| entry.as_ref() == id.as_str());
    selection
        .iter()
        .filter_map(move |entry| catalog.find(entry.as_ref()))
        .flat_map(move |resource| {
            resource
                .depends
                .iter()
                .filter(move |dep| !selected(*dep))
                .map(move |dep| (resource, dep))
        })
}
