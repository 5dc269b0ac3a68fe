//! Authoring checks for resource catalogs.
//!
//! Catalog integrity belongs to whoever ships the catalog, so nothing here
//! runs implicitly. Callers that load catalogs from outside the crate can run
//! the lint and refuse to install a catalog that reports problems.

use crate::catalog::model::ResourceCatalog;
use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use std::collections::BTreeSet;

/// Return every authoring problem found in `catalog`.
///
/// Problems are collected rather than short-circuited so one pass shows the
/// whole list: duplicate ids, empty config keys, dependency edges pointing at
/// unknown ids, supported resources depending on unsupported ones, and
/// dependency cycles.
pub fn lint_catalog(catalog: &ResourceCatalog) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for resource in catalog.iter() {
        let id = resource.id.as_str();
        if !seen.insert(id) {
            errors.push(format!("duplicate resource id '{id}'"));
        }
        if resource.requires_config.iter().any(|key| key.trim().is_empty()) {
            errors.push(format!("resource '{id}' lists an empty config key"));
        }
        for dep in &resource.depends {
            match catalog.find(dep.as_str()) {
                None => errors.push(format!("resource '{id}' depends on unknown resource '{dep}'")),
                Some(target) if resource.supported && !target.supported => errors.push(format!(
                    "resource '{id}' depends on unsupported resource '{dep}'"
                )),
                Some(_) => {}
            }
        }
    }

    errors.extend(find_cycles(catalog).into_iter().map(|cycle| {
        format!("dependency cycle between {}", cycle.join(", "))
    }));
    errors
}

/// Strongly connected components of the dependency graph that form a cycle,
/// each sorted by id, in id order. Edges to unknown ids are left out; those
/// are reported as dangling instead.
fn find_cycles(catalog: &ResourceCatalog) -> Vec<Vec<&str>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for resource in catalog.iter() {
        let from = resource.id.as_str();
        graph.add_node(from);
        for dep in &resource.depends {
            if catalog.find(dep.as_str()).is_some() {
                graph.add_edge(from, dep.as_str(), ());
            }
        }
    }

    let mut cycles: Vec<Vec<&str>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || graph.contains_edge(component[0], component[0])
        })
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect();
    cycles.sort();
    cycles
}
