//! uigen Registry: built-in component catalog
//!
//! Catalog entries are declared in `catalog/components.yaml` and compiled
//! into the crate. Composite kinds (pricing table, contact form) are
//! recognized by the parser but have no catalog entry.
pub mod catalog;

pub use catalog::{CatalogFile, ComponentCatalog};
