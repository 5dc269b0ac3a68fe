//! Resource catalog wiring.
//!
//! A catalog lists every infrastructure resource a merchant could pick, who
//! provides it, which credentials it needs, and which other resources it
//! needs alongside it. `CatalogStore` holds the active snapshot; loaders and
//! the lint are for catalogs supplied from outside the crate.

pub mod builtin;
pub mod identity;
pub mod lint;
pub mod model;
pub(crate) mod schema;
pub mod store;

pub use builtin::builtin_catalog;
pub use identity::{ResourceId, ResourceType};
pub use lint::lint_catalog;
pub use model::{ResourceCatalog, ResourceDefinition, load_catalog_from_path, parse_catalog};
pub use store::{CatalogStore, get_catalog, reset_catalog, set_catalog};
