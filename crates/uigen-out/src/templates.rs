//! Template loading for uigen-OUT.
//!
//! Two kinds of templates live here:
//! - Response templates (`templates/responses.yaml`), Handlebars text used to
//!   present results as markdown
//! - Component source templates, base code per (kind, framework) served
//!   through a [`TemplateProvider`]

use indexmap::IndexMap;
use serde::Deserialize;
use uigen_core::{ComponentKind, Framework, UiGenError};

/// Response templates shipped with the crate
const BUILTIN_RESPONSES: &str = include_str!("../templates/responses.yaml");

/// Top-level response templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: IndexMap<String, Template>,
    #[serde(default)]
    pub helpers: IndexMap<String, HelperDef>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

/// Helper documentation entry
#[derive(Debug, Clone, Deserialize)]
pub struct HelperDef {
    pub description: String,
    #[serde(default)]
    pub usage: Option<String>,
}

impl TemplatesFile {
    pub fn builtin() -> Result<Self, UiGenError> {
        Self::from_yaml(BUILTIN_RESPONSES)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, UiGenError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| UiGenError::Render(format!("Failed to parse templates YAML: {}", e)))
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }
}

// ============================================================================
// Component Source Templates
// ============================================================================

/// Source of base component code.
///
/// Implementations are immutable after construction and shared between
/// requests.
pub trait TemplateProvider: Send + Sync {
    /// Short name used in logs
    fn id(&self) -> &str;

    /// Unmodified source for a kind in a framework, if the provider has one
    fn base_code(&self, kind: ComponentKind, framework: Framework) -> Option<&str>;

    /// Plain stylesheet for a kind, used with the `css` styling system
    fn stylesheet(&self, kind: ComponentKind) -> Option<&str>;
}

const BUILTIN_SOURCES: &[(ComponentKind, Framework, &str)] = &[
    (ComponentKind::Button, Framework::React, include_str!("../templates/react/button.tsx")),
    (ComponentKind::Button, Framework::Vue, include_str!("../templates/vue/button.vue")),
    (ComponentKind::Button, Framework::Svelte, include_str!("../templates/svelte/button.svelte")),
    (ComponentKind::Input, Framework::React, include_str!("../templates/react/input.tsx")),
    (ComponentKind::Input, Framework::Vue, include_str!("../templates/vue/input.vue")),
    (ComponentKind::Input, Framework::Svelte, include_str!("../templates/svelte/input.svelte")),
    (ComponentKind::Card, Framework::React, include_str!("../templates/react/card.tsx")),
    (ComponentKind::Modal, Framework::React, include_str!("../templates/react/modal.tsx")),
    (ComponentKind::Alert, Framework::React, include_str!("../templates/react/alert.tsx")),
];

const BUILTIN_STYLESHEETS: &[(ComponentKind, &str)] = &[
    (ComponentKind::Button, include_str!("../templates/css/button.css")),
];

/// Templates compiled into the crate. Card, modal and alert exist for React only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateProvider for BuiltinTemplates {
    fn id(&self) -> &str {
        "builtin"
    }

    fn base_code(&self, kind: ComponentKind, framework: Framework) -> Option<&str> {
        BUILTIN_SOURCES
            .iter()
            .find(|(k, f, _)| *k == kind && *f == framework)
            .map(|(_, _, code)| *code)
    }

    fn stylesheet(&self, kind: ComponentKind) -> Option<&str> {
        BUILTIN_STYLESHEETS
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, css)| *css)
    }
}

/// Provider assembled at runtime, e.g. from project-local template files
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    id: String,
    sources: IndexMap<(ComponentKind, Framework), String>,
    stylesheets: IndexMap<ComponentKind, String>,
}

impl InMemoryTemplates {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_source(
        mut self,
        kind: ComponentKind,
        framework: Framework,
        code: impl Into<String>,
    ) -> Self {
        self.sources.insert((kind, framework), code.into());
        self
    }

    pub fn with_stylesheet(mut self, kind: ComponentKind, css: impl Into<String>) -> Self {
        self.stylesheets.insert(kind, css.into());
        self
    }
}

impl TemplateProvider for InMemoryTemplates {
    fn id(&self) -> &str {
        &self.id
    }

    fn base_code(&self, kind: ComponentKind, framework: Framework) -> Option<&str> {
        self.sources.get(&(kind, framework)).map(String::as_str)
    }

    fn stylesheet(&self, kind: ComponentKind) -> Option<&str> {
        self.stylesheets.get(&kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_responses_parse() {
        let file = TemplatesFile::builtin().unwrap();
        assert_eq!(
            file.list_templates(),
            vec!["component_response", "component_list", "generation_error", "listing_error"]
        );
        assert!(file.helpers.contains_key("join"));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
version: "1.0"
templates:
  greeting:
    description: Simple greeting
    template: "Hello {{name}}!"
"#;
        let file = TemplatesFile::from_yaml(yaml).unwrap();
        assert_eq!(file.get("greeting").unwrap().template, "Hello {{name}}!");
        assert!(file.helpers.is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_missing_templates() {
        let err = TemplatesFile::from_yaml("version: \"1.0\"").unwrap_err();
        assert!(matches!(err, UiGenError::Render(_)));
    }

    #[test]
    fn test_builtin_coverage() {
        let provider = BuiltinTemplates;
        for framework in Framework::ALL {
            assert!(provider.base_code(ComponentKind::Button, *framework).is_some());
            assert!(provider.base_code(ComponentKind::Input, *framework).is_some());
        }
        for kind in [ComponentKind::Card, ComponentKind::Modal, ComponentKind::Alert] {
            assert!(provider.base_code(kind, Framework::React).is_some());
            assert!(provider.base_code(kind, Framework::Vue).is_none());
            assert!(provider.base_code(kind, Framework::Svelte).is_none());
        }
        assert!(provider.base_code(ComponentKind::Hero, Framework::React).is_none());
    }

    #[test]
    fn test_builtin_button_sources() {
        let provider = BuiltinTemplates;
        let react = provider.base_code(ComponentKind::Button, Framework::React).unwrap();
        assert!(react.contains("forwardRef<HTMLButtonElement, ButtonProps>"));
        let vue = provider.base_code(ComponentKind::Button, Framework::Vue).unwrap();
        assert!(vue.starts_with("<template>"));
        let svelte = provider.base_code(ComponentKind::Button, Framework::Svelte).unwrap();
        assert!(svelte.starts_with("<script lang=\"ts\">"));
    }

    #[test]
    fn test_stylesheets() {
        let provider = BuiltinTemplates;
        assert!(provider.stylesheet(ComponentKind::Button).unwrap().contains(".button--primary"));
        assert!(provider.stylesheet(ComponentKind::Card).is_none());
    }

    #[test]
    fn test_in_memory_provider() {
        let provider = InMemoryTemplates::new("project")
            .with_source(ComponentKind::Card, Framework::Vue, "<template><div /></template>")
            .with_stylesheet(ComponentKind::Card, ".card {}");

        assert_eq!(provider.id(), "project");
        assert!(provider.base_code(ComponentKind::Card, Framework::Vue).is_some());
        assert!(provider.base_code(ComponentKind::Card, Framework::React).is_none());
        assert_eq!(provider.stylesheet(ComponentKind::Card), Some(".card {}"));
    }
}
