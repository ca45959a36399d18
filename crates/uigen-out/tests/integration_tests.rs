//! Integration tests for uigen-out with the built-in templates.
//!
//! These render real catalog entries and real base code through the
//! markdown response templates.

use chrono::Utc;
use uigen_core::{
    Category, ComponentKind, ComponentMetadata, ComponentRequest, ComponentResponse,
    ComponentVariant, Framework, StylingSystem,
};
use uigen_out::{generate_code, generate_styles, BuiltinTemplates, TemplateRenderer};
use uigen_registry::ComponentCatalog;

fn response(framework: Framework, features: Vec<String>, styles: Option<String>) -> ComponentResponse {
    ComponentResponse {
        variants: vec![
            ComponentVariant {
                name: "primary".to_string(),
                description: "Primary button with solid background".to_string(),
                code: "<button className=\"a\">Go</button>".to_string(),
                styles,
                dependencies: vec!["react".to_string()],
                props: Default::default(),
            },
            ComponentVariant {
                name: "ghost".to_string(),
                description: "Ghost button with transparent background".to_string(),
                code: "<button />".to_string(),
                styles: None,
                dependencies: vec![],
                props: Default::default(),
            },
        ],
        metadata: ComponentMetadata {
            component_kind: ComponentKind::Button,
            framework,
            styling: StylingSystem::Tailwind,
            features,
            accessibility: true,
            responsive: false,
            generated_at: Utc::now(),
        },
        integration_instructions: vec![
            "Install dependencies: npm install react".to_string(),
            "Customize props as needed for your use case".to_string(),
        ],
    }
}

// =============================================================================
// Component Response
// =============================================================================

#[test]
fn test_component_response_layout() {
    let renderer = TemplateRenderer::builtin().unwrap();
    let text = renderer
        .format_component_response(&response(Framework::React, vec![], None))
        .unwrap();

    assert!(text.starts_with("# 🎨 Generated Button Component"));
    assert!(text.contains("**Framework**: react | **Styling**: tailwind"));
    assert!(text.contains("**Features**: standard"));
    assert!(text.contains("## 🔧 2 Variants Generated:"));
    assert!(text.contains("### 1. primary"));
    assert!(text.contains("*Primary button with solid background*"));
    assert!(text.contains("### 2. ghost"));
    assert!(text.contains("```typescript\n<button className=\"a\">Go</button>\n```"));
    assert!(text.contains("1. Install dependencies: npm install react"));
    assert!(text.contains("2. Customize props as needed for your use case"));
}

#[test]
fn test_component_response_features_and_fences() {
    let renderer = TemplateRenderer::builtin().unwrap();

    let text = renderer
        .format_component_response(&response(
            Framework::Vue,
            vec!["responsive".to_string(), "loading-state".to_string()],
            None,
        ))
        .unwrap();
    assert!(text.contains("**Features**: responsive, loading-state"));
    assert!(text.contains("```vue\n"));

    let text = renderer
        .format_component_response(&response(Framework::Svelte, vec![], None))
        .unwrap();
    assert!(text.contains("```svelte\n"));
}

#[test]
fn test_component_response_includes_stylesheet() {
    let renderer = TemplateRenderer::builtin().unwrap();
    let text = renderer
        .format_component_response(&response(
            Framework::React,
            vec![],
            Some(".button { display: inline-flex; }".to_string()),
        ))
        .unwrap();
    assert!(text.contains("```css\n.button { display: inline-flex; }\n```"));
}

// =============================================================================
// Component List
// =============================================================================

#[test]
fn test_component_list_from_catalog() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let renderer = TemplateRenderer::builtin().unwrap();
    let text = renderer.format_component_list(&catalog.all_components()).unwrap();

    assert!(text.starts_with("# 📚 Available Components"));
    assert_eq!(text.matches("Components\n").count(), 2);
    assert!(text.contains("## 🏗️ Core Components"));
    assert!(text.contains("### Modal"));
    assert!(text.contains("**Frameworks**: react, vue, svelte"));
    assert!(text.contains("**Variants**: primary, secondary, ghost"));
    assert!(text.contains("**Keywords**: modal, dialog, popup, overlay, lightbox"));
}

#[test]
fn test_component_list_filtered_to_empty() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let renderer = TemplateRenderer::builtin().unwrap();
    let text = renderer
        .format_component_list(&catalog.components_by_category(Category::Layout))
        .unwrap();
    assert!(text.starts_with("# 📚 Available Components"));
    assert!(!text.contains("###"));
}

// =============================================================================
// Code Generation against the catalog
// =============================================================================

#[test]
fn test_every_catalog_variant_renders_in_react() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let request = ComponentRequest::new("anything", Framework::React, StylingSystem::Tailwind);

    for definition in catalog.all_components() {
        for variant in &definition.variants {
            let code = generate_code(&BuiltinTemplates, definition, variant, &request, &[]);
            assert!(code.is_ok(), "no react template for {}", definition.name);
        }
    }
}

#[test]
fn test_input_focus_color_in_every_framework() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let input = catalog.find_component(ComponentKind::Input).unwrap();
    let constraints = vec!["color:purple".to_string()];

    for framework in Framework::ALL {
        let request = ComponentRequest::new("an input", *framework, StylingSystem::Tailwind);
        let code = generate_code(&BuiltinTemplates, input, &input.variants[1], &request, &constraints)
            .unwrap();
        assert!(code.contains("focus:border-purple-500"), "{}", framework);
        assert!(code.contains("focus:ring-purple-500"), "{}", framework);
        assert!(!code.contains("focus:border-blue-500"), "{}", framework);
    }
}

#[test]
fn test_button_size_in_every_framework() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let button = catalog.find_component(ComponentKind::Button).unwrap();
    let constraints = vec!["size:small".to_string()];

    let expected = [
        (Framework::React, "size = 'sm'"),
        (Framework::Vue, "size: 'sm'"),
        (Framework::Svelte, "export let size: 'sm' | 'md' | 'lg' = 'sm'"),
    ];
    for (framework, declaration) in expected {
        let request = ComponentRequest::new("a button", framework, StylingSystem::Tailwind);
        let code = generate_code(&BuiltinTemplates, button, &button.variants[0], &request, &constraints)
            .unwrap();
        assert!(code.contains(declaration), "{}", framework);
    }
}

#[test]
fn test_css_styles_for_button() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let button = catalog.find_component(ComponentKind::Button).unwrap();
    let styles = generate_styles(&BuiltinTemplates, button, &button.variants[0], StylingSystem::Css)
        .unwrap();
    assert!(styles.starts_with(".button {"));
    assert!(styles.contains(".button--lg"));
}
