//! Data Model: intents, catalog definitions, generated responses
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::kinds::{Category, Complexity, ComponentKind, Framework, StylingSystem};

/// Structured reading of a free-text description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub component_kind: ComponentKind,
    pub framework: Framework,
    pub styling: StylingSystem,
    /// Feature tags, duplicates collapsed
    pub features: Vec<String>,
    /// `category:value` directives in scan order (e.g. `color:red`)
    pub constraints: Vec<String>,
    /// Heuristic match score in [0, 1]
    pub confidence: f64,
}

impl ParsedIntent {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Value of the first `key:value` entry for `key`
pub fn constraint_value<'a>(constraints: &'a [String], key: &str) -> Option<&'a str> {
    constraints.iter().find_map(|c| {
        let (k, v) = c.split_once(':')?;
        (k == key).then_some(v)
    })
}

/// Declared prop of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSpec {
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Props keyed by name, in declaration order
pub type PropsSchema = IndexMap<String, PropSpec>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDefinition {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub complexity: Complexity,
}

/// Catalog entry for one component kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub kind: ComponentKind,
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub frameworks: Vec<Framework>,
    pub styling: Vec<StylingSystem>,
    pub variants: Vec<VariantDefinition>,
    #[serde(default)]
    pub props: PropsSchema,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub imports: Vec<String>,
}

impl ComponentDefinition {
    pub fn supports_framework(&self, framework: Framework) -> bool {
        self.frameworks.contains(&framework)
    }

    pub fn supports_styling(&self, styling: StylingSystem) -> bool {
        self.styling.contains(&styling)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

/// Project context a caller may attach to a request. Carried through, not
/// consulted by the current generation policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConstraints {
    #[serde(default)]
    pub project_path: Option<String>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub existing_components: Vec<String>,
}

/// Explicit generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRequest {
    pub description: String,
    pub framework: Framework,
    pub styling: StylingSystem,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub constraints: Option<ProjectConstraints>,
}

impl ComponentRequest {
    pub fn new(description: impl Into<String>, framework: Framework, styling: StylingSystem) -> Self {
        Self {
            description: description.into(),
            framework,
            styling,
            features: None,
            constraints: None,
        }
    }
}

/// One emitted variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentVariant {
    pub name: String,
    pub description: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,
    pub dependencies: Vec<String>,
    pub props: PropsSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    pub component_kind: ComponentKind,
    pub framework: Framework,
    pub styling: StylingSystem,
    pub features: Vec<String>,
    pub accessibility: bool,
    pub responsive: bool,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentResponse {
    pub variants: Vec<ComponentVariant>,
    pub metadata: ComponentMetadata,
    pub integration_instructions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_value_takes_first_match() {
        let constraints = vec![
            "color:red".to_string(),
            "size:large".to_string(),
            "color:blue".to_string(),
        ];
        assert_eq!(constraint_value(&constraints, "color"), Some("red"));
        assert_eq!(constraint_value(&constraints, "size"), Some("large"));
        assert_eq!(constraint_value(&constraints, "style"), None);
    }

    #[test]
    fn test_prop_spec_uses_type_key() {
        let spec: PropSpec = serde_json::from_str(
            r#"{ "type": "boolean", "default": false, "description": "Disabled state" }"#,
        )
        .unwrap();
        assert_eq!(spec.type_tag, "boolean");
        assert!(!spec.required);
        assert_eq!(spec.default, Some(serde_json::Value::Bool(false)));
    }
}
