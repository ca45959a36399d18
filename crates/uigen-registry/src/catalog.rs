//! Component Catalog
use indexmap::IndexMap;
use serde::Deserialize;
use uigen_core::{Category, ComponentDefinition, ComponentKind, UiGenError};

/// Catalog document shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("../catalog/components.yaml");

/// Top-level catalog file structure
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub version: String,
    pub components: Vec<ComponentDefinition>,
}

/// Read-only set of component definitions keyed by kind, in document order
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    version: String,
    components: IndexMap<ComponentKind, ComponentDefinition>,
}

impl ComponentCatalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, UiGenError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Build a catalog from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, UiGenError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)
            .map_err(|e| UiGenError::Catalog(format!("Failed to parse catalog YAML: {}", e)))?;

        let mut components = IndexMap::with_capacity(file.components.len());
        for definition in file.components {
            let kind = definition.kind;
            if components.insert(kind, definition).is_some() {
                return Err(UiGenError::Catalog(format!(
                    "duplicate definition for component kind \"{}\"",
                    kind
                )));
            }
        }

        Ok(Self {
            version: file.version,
            components,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Definition for a kind. Absence is a normal outcome.
    pub fn find_component(&self, kind: ComponentKind) -> Option<&ComponentDefinition> {
        self.components.get(&kind)
    }

    pub fn all_components(&self) -> Vec<&ComponentDefinition> {
        self.components.values().collect()
    }

    pub fn components_by_category(&self, category: Category) -> Vec<&ComponentDefinition> {
        self.components
            .values()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, keywords, then description.
    /// Each component appears at most once, in catalog order.
    pub fn search_components(&self, query: &str) -> Vec<&ComponentDefinition> {
        let query = query.to_lowercase();
        self.components
            .values()
            .filter(|c| {
                c.name.to_lowercase().contains(&query)
                    || c.keywords.iter().any(|k| k.to_lowercase().contains(&query))
                    || c.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> ComponentCatalog {
        ComponentCatalog::from_yaml(
            r#"
version: "test"
components:
  - kind: button
    name: Button
    category: core
    description: Clickable action
    keywords: [btn]
    frameworks: [react]
    styling: [tailwind]
    variants:
      - name: primary
        description: Solid
        complexity: simple
  - kind: hero
    name: Hero
    category: layout
    description: Landing section with a call to action
    frameworks: [react, vue]
    styling: [css]
    variants: []
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_yaml_keeps_document_order() {
        let catalog = small_catalog();
        assert_eq!(catalog.version(), "test");
        let all = catalog.all_components();
        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Button", "Hero"]);
    }

    #[test]
    fn test_find_and_absence() {
        let catalog = small_catalog();
        assert_eq!(catalog.find_component(ComponentKind::Hero).unwrap().name, "Hero");
        assert!(catalog.find_component(ComponentKind::Modal).is_none());
    }

    #[test]
    fn test_search_counts_each_component_once() {
        let catalog = small_catalog();
        // "action" hits Button's description and Hero's description
        let hits = catalog.search_components("ACTION");
        assert_eq!(hits.len(), 2);
        // "btn" only via keyword
        let hits = catalog.search_components("btn");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, ComponentKind::Button);
    }

    #[test]
    fn test_by_category() {
        let catalog = small_catalog();
        assert_eq!(catalog.components_by_category(Category::Layout).len(), 1);
        assert!(catalog.components_by_category(Category::Composite).is_empty());
    }

    #[test]
    fn test_duplicate_kinds_are_rejected() {
        let err = ComponentCatalog::from_yaml(
            r#"
version: "1"
components:
  - { kind: card, name: A, category: core, description: a, frameworks: [], styling: [], variants: [] }
  - { kind: card, name: B, category: core, description: b, frameworks: [], styling: [], variants: [] }
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate definition"));
    }

    #[test]
    fn test_malformed_yaml_is_a_catalog_error() {
        let err = ComponentCatalog::from_yaml("components: [").unwrap_err();
        assert!(matches!(err, UiGenError::Catalog(_)));
    }
}
