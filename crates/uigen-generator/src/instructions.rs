//! Integration steps shown after a generated component

use uigen_core::{ComponentRequest, ComponentVariant, Framework, StylingSystem};

/// Ordered setup steps for the generated variants. Numbering is left to the
/// presentation layer.
pub fn integration_instructions(variants: &[ComponentVariant], request: &ComponentRequest) -> Vec<String> {
    let mut steps = Vec::new();

    let packages: Vec<&str> = match variants.first() {
        Some(first) if !first.dependencies.is_empty() => {
            first.dependencies.iter().map(String::as_str).collect()
        }
        _ => request.framework.base_packages().to_vec(),
    };
    steps.push(format!("Install dependencies: npm install {}", packages.join(" ")));

    match request.styling {
        StylingSystem::Tailwind => {
            steps.push("Make sure Tailwind CSS is configured in your project".to_string());
            if request.framework == Framework::React {
                steps.push("Add the cn utility function if not already present".to_string());
            }
        }
        StylingSystem::Css => {
            steps.push("Add the generated stylesheet to your project".to_string());
        }
        StylingSystem::StyledComponents | StylingSystem::Emotion => {}
    }

    steps.push(format!(
        "Import and use the component in your {} application",
        request.framework.display_name()
    ));
    steps.push("Customize props as needed for your use case".to_string());

    steps
}
