//! Component generator: description in, variants out

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uigen_core::{
    Category, ComponentDefinition, ComponentMetadata, ComponentRequest, ComponentResponse,
    ComponentVariant, Framework, ParsedIntent, StylingSystem, UiGenError,
};
use uigen_out::{generate_code, generate_styles, select_variants, BuiltinTemplates, TemplateProvider};
use uigen_registry::ComponentCatalog;

use crate::instructions::integration_instructions;

/// Feature tag that marks a response as responsive
const RESPONSIVE_FEATURE: &str = "responsive";

/// Sequences parser, catalog, selector and template provider.
///
/// Holds no mutable state; one instance serves any number of requests.
pub struct ComponentGenerator {
    catalog: ComponentCatalog,
    templates: Arc<dyn TemplateProvider>,
}

impl ComponentGenerator {
    pub fn new(catalog: ComponentCatalog, templates: Arc<dyn TemplateProvider>) -> Self {
        ComponentGenerator { catalog, templates }
    }

    /// Built-in catalog with built-in templates
    pub fn builtin() -> Result<Self, UiGenError> {
        Ok(Self::new(ComponentCatalog::builtin()?, Arc::new(BuiltinTemplates)))
    }

    /// Generate with caller-chosen framework and styling.
    ///
    /// The description is parsed again for kind, features and constraints;
    /// framework and styling always come from the request.
    pub async fn generate_component(
        &self,
        request: &ComponentRequest,
    ) -> Result<ComponentResponse, UiGenError> {
        let intent = uigen_in::parse(&request.description);

        info!(
            kind = %intent.component_kind,
            framework = %request.framework,
            styling = %request.styling,
            confidence = intent.confidence,
            catalog = self.catalog.version(),
            "generating component"
        );

        let result = self.assemble(request, &intent);
        if let Err(e) = &result {
            warn!(error = %e, description = %request.description, "component generation failed");
        }
        result
    }

    /// Parse first and use the inferred framework, styling and features
    pub async fn quick_generate(&self, description: &str) -> Result<ComponentResponse, UiGenError> {
        self.quick_generate_with(description, None, None).await
    }

    /// Quick path where explicit framework or styling replace the inferred ones
    pub async fn quick_generate_with(
        &self,
        description: &str,
        framework: Option<Framework>,
        styling: Option<StylingSystem>,
    ) -> Result<ComponentResponse, UiGenError> {
        let intent = uigen_in::parse(description);

        let mut request = ComponentRequest::new(
            description,
            framework.unwrap_or(intent.framework),
            styling.unwrap_or(intent.styling),
        );
        request.features = Some(intent.features);

        self.generate_component(&request).await
    }

    pub fn all_components(&self) -> Vec<&ComponentDefinition> {
        self.catalog.all_components()
    }

    pub fn components_by_category(&self, category: Category) -> Vec<&ComponentDefinition> {
        self.catalog.components_by_category(category)
    }

    fn assemble(
        &self,
        request: &ComponentRequest,
        intent: &ParsedIntent,
    ) -> Result<ComponentResponse, UiGenError> {
        let definition = self
            .catalog
            .find_component(intent.component_kind)
            .ok_or(UiGenError::ComponentNotFound(intent.component_kind))?;

        let variants = self.generate_variants(definition, request, intent)?;

        let metadata = ComponentMetadata {
            component_kind: intent.component_kind,
            framework: request.framework,
            styling: request.styling,
            features: intent.features.clone(),
            accessibility: true,
            responsive: intent.has_feature(RESPONSIVE_FEATURE),
            generated_at: Utc::now(),
        };

        let integration_instructions = integration_instructions(&variants, request);

        Ok(ComponentResponse {
            variants,
            metadata,
            integration_instructions,
        })
    }

    fn generate_variants(
        &self,
        definition: &ComponentDefinition,
        request: &ComponentRequest,
        intent: &ParsedIntent,
    ) -> Result<Vec<ComponentVariant>, UiGenError> {
        let provider = self.templates.as_ref();

        select_variants(definition, request, intent)
            .into_iter()
            .map(|variant| -> Result<ComponentVariant, UiGenError> {
                let code = generate_code(provider, definition, variant, request, &intent.constraints)?;
                let styles = generate_styles(provider, definition, variant, request.styling);

                Ok(ComponentVariant {
                    name: variant.name.clone(),
                    description: variant.description.clone(),
                    code,
                    styles,
                    dependencies: definition.dependencies.clone(),
                    props: definition.props.clone(),
                })
            })
            .collect()
    }
}
