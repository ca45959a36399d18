//! Template rendering for uigen-OUT.
//!
//! Uses Handlebars with HTML escaping disabled, since the output is markdown
//! carrying source code. Custom helpers:
//! - inc: 1-based numbering from `@index`
//! - join: Join array with separator
//! - capitalize: Uppercase the first character

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::{json, Value};
use tracing::debug;
use uigen_core::{Category, ComponentDefinition, ComponentResponse, UiGenError};

use crate::templates::TemplatesFile;

handlebars_helper!(inc: |n: u64| n + 1);

handlebars_helper!(join: |items: array, sep: str| {
    items
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(sep)
});

handlebars_helper!(capitalize: |s: str| {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
});

/// Compiled renderer with registered helpers
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Result<Self, UiGenError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("inc", Box::new(inc));
        handlebars.register_helper("join", Box::new(join));
        handlebars.register_helper("capitalize", Box::new(capitalize));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| UiGenError::Render(format!("template \"{}\": {}", name, e)))?;
        }

        debug!(
            version = %templates.version,
            templates = ?templates.list_templates(),
            "registered response templates"
        );
        Ok(TemplateRenderer { handlebars })
    }

    /// Renderer over the response templates compiled into the crate
    pub fn builtin() -> Result<Self, UiGenError> {
        Self::new(TemplatesFile::builtin()?)
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, UiGenError> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| UiGenError::Render(format!("Render error: {}", e)))
    }

    /// Markdown presentation of a generation result
    pub fn format_component_response(&self, response: &ComponentResponse) -> Result<String, UiGenError> {
        let metadata = &response.metadata;
        let fence = metadata.framework.code_fence();

        let variants: Vec<Value> = response
            .variants
            .iter()
            .map(|v| {
                json!({
                    "name": v.name,
                    "description": v.description,
                    "code": v.code,
                    "styles": v.styles,
                    "fence": fence,
                })
            })
            .collect();

        let data = json!({
            "kind": metadata.component_kind.as_str(),
            "framework": metadata.framework.as_str(),
            "styling": metadata.styling.as_str(),
            "features": metadata.features,
            "variant_count": variants.len(),
            "variants": variants,
            "instructions": response.integration_instructions,
        });

        self.render("component_response", &data)
    }

    /// Markdown listing grouped by category, categories in first-seen order
    pub fn format_component_list(&self, components: &[&ComponentDefinition]) -> Result<String, UiGenError> {
        let mut order: Vec<Category> = Vec::new();
        for component in components {
            if !order.contains(&component.category) {
                order.push(component.category);
            }
        }

        let categories: Vec<Value> = order
            .iter()
            .map(|category| {
                let entries: Vec<Value> = components
                    .iter()
                    .filter(|c| c.category == *category)
                    .map(|c| {
                        json!({
                            "name": c.name,
                            "description": c.description,
                            "keywords": c.keywords,
                            "frameworks": c.frameworks,
                            "variants": c.variants.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                json!({ "name": category.as_str(), "components": entries })
            })
            .collect();

        self.render("component_list", &json!({ "categories": categories }))
    }

    pub fn format_generation_error(&self, error: &UiGenError) -> Result<String, UiGenError> {
        self.render("generation_error", &json!({ "message": error.to_string() }))
    }

    pub fn format_listing_error(&self, error: &UiGenError) -> Result<String, UiGenError> {
        self.render("listing_error", &json!({ "message": error.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_templates() -> TemplatesFile {
        TemplatesFile::from_yaml(r#"
version: "1.0"
templates:
  greeting:
    description: Simple greeting
    template: "Hello, {{capitalize name}}!"
  numbered:
    description: Numbered list
    template: "{{#each items}}{{inc @index}}:{{this}} {{/each}}"
  list:
    description: List items
    template: "Items: {{join items \", \"}}"
  code:
    description: Raw code
    template: "{{code}}"
"#).unwrap()
    }

    #[test]
    fn test_capitalize_helper() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer.render("greeting", &json!({ "name": "world" })).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_inc_helper() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer.render("numbered", &json!({ "items": ["a", "b"] })).unwrap();
        assert_eq!(result, "1:a 2:b ");
    }

    #[test]
    fn test_join_helper() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer.render("list", &json!({ "items": ["a", "b", "c"] })).unwrap();
        assert_eq!(result, "Items: a, b, c");
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer
            .render("code", &json!({ "code": "<button className=\"x\">&</button>" }))
            .unwrap();
        assert_eq!(result, "<button className=\"x\">&</button>");
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let err = renderer.render("missing", &json!({})).unwrap_err();
        assert!(matches!(err, UiGenError::Render(_)));
    }

    #[test]
    fn test_invalid_template_fails_registration() {
        let templates = TemplatesFile::from_yaml(r#"
version: "1.0"
templates:
  broken:
    description: Unclosed block
    template: "{{#each items}}"
"#).unwrap();
        assert!(TemplateRenderer::new(templates).is_err());
    }

    #[test]
    fn test_builtin_error_templates() {
        let renderer = TemplateRenderer::builtin().unwrap();
        let text = renderer
            .format_generation_error(&UiGenError::ComponentNotFound(
                uigen_core::ComponentKind::PricingTable,
            ))
            .unwrap();
        assert_eq!(
            text,
            "Error generating component: CATALOG/NOT_FOUND: component kind \"pricing-table\" not found"
        );
    }
}
