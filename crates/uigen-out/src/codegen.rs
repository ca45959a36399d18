//! Variant selection and per-variant code generation

use tracing::debug;
use uigen_core::{
    ComponentDefinition, ComponentRequest, ParsedIntent, StylingSystem, UiGenError,
    VariantDefinition, MAX_VARIANTS,
};

use crate::constraints::apply_constraints;
use crate::templates::TemplateProvider;

/// The first `MAX_VARIANTS` variants in catalog order. Request and intent
/// are not consulted.
pub fn select_variants<'a>(
    definition: &'a ComponentDefinition,
    _request: &ComponentRequest,
    _intent: &ParsedIntent,
) -> Vec<&'a VariantDefinition> {
    definition.variants.iter().take(MAX_VARIANTS).collect()
}

/// Base code for the request's framework with constraints applied
pub fn generate_code(
    provider: &dyn TemplateProvider,
    definition: &ComponentDefinition,
    variant: &VariantDefinition,
    request: &ComponentRequest,
    constraints: &[String],
) -> Result<String, UiGenError> {
    let base = provider
        .base_code(definition.kind, request.framework)
        .ok_or_else(|| UiGenError::Unimplemented {
            component: definition.name.clone(),
            framework: request.framework,
        })?;

    debug!(
        provider = provider.id(),
        kind = %definition.kind,
        variant = %variant.name,
        "rendering base template"
    );

    Ok(apply_constraints(
        base,
        definition.kind,
        request.framework,
        &variant.name,
        constraints,
    ))
}

/// Separate stylesheet for the variant, when the styling system needs one
pub fn generate_styles(
    provider: &dyn TemplateProvider,
    definition: &ComponentDefinition,
    _variant: &VariantDefinition,
    styling: StylingSystem,
) -> Option<String> {
    match styling {
        StylingSystem::Css => provider.stylesheet(definition.kind).map(str::to_string),
        StylingSystem::Tailwind | StylingSystem::StyledComponents | StylingSystem::Emotion => None,
    }
}
