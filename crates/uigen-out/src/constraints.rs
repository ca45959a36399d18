//! Constraint rewriting for generated source.
//!
//! Color and size constraints are applied as literal text replacements
//! against the base templates. Rules are keyed by component kind (and, for
//! size, framework), so kinds without rules pass through unchanged.

use uigen_core::{constraint_value, ComponentKind, Framework};

/// Color token present in every base template
pub const DEFAULT_COLOR: &str = "blue";
/// Size token every default-size declaration starts with
pub const DEFAULT_SIZE: &str = "md";

const PALETTE: &[&str] = &["red", "green", "blue", "yellow", "purple", "pink", "gray"];

const SIZES: &[(&str, &str)] = &[
    ("small", "sm"),
    ("medium", "md"),
    ("large", "lg"),
    ("sm", "sm"),
    ("md", "md"),
    ("lg", "lg"),
];

/// Placeholder substituted with the default token (search) or the resolved
/// token (replacement)
const SLOT: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    First,
    All,
}

#[derive(Debug, Clone, Copy)]
pub struct ColorRule {
    pub kind: ComponentKind,
    /// Restrict the rule to one variant
    pub variant: Option<&'static str>,
    pub pattern: &'static str,
    pub occurrence: Occurrence,
}

#[derive(Debug, Clone, Copy)]
pub struct SizeRule {
    pub kind: ComponentKind,
    pub framework: Framework,
    pub pattern: &'static str,
}

pub const COLOR_RULES: &[ColorRule] = &[
    ColorRule {
        kind: ComponentKind::Button,
        variant: Some("primary"),
        pattern: "bg-{}-600 text-white hover:bg-{}-700 active:bg-{}-800",
        occurrence: Occurrence::First,
    },
    ColorRule {
        kind: ComponentKind::Input,
        variant: None,
        pattern: "focus:border-{}-500",
        occurrence: Occurrence::All,
    },
    ColorRule {
        kind: ComponentKind::Input,
        variant: None,
        pattern: "focus:ring-{}-500",
        occurrence: Occurrence::All,
    },
];

pub const SIZE_RULES: &[SizeRule] = &[
    SizeRule {
        kind: ComponentKind::Button,
        framework: Framework::React,
        pattern: "size = '{}'",
    },
    SizeRule {
        kind: ComponentKind::Button,
        framework: Framework::Vue,
        pattern: "size: '{}'",
    },
    SizeRule {
        kind: ComponentKind::Button,
        framework: Framework::Svelte,
        pattern: "export let size: 'sm' | 'md' | 'lg' = '{}'",
    },
    SizeRule {
        kind: ComponentKind::Modal,
        framework: Framework::React,
        pattern: "size = '{}'",
    },
];

/// Palette color for a requested name; unknown names fall back to blue
pub fn resolve_color(name: &str) -> &'static str {
    PALETTE
        .iter()
        .copied()
        .find(|c| *c == name)
        .unwrap_or(DEFAULT_COLOR)
}

/// Size token for a requested size; unknown sizes fall back to md
pub fn resolve_size(name: &str) -> &'static str {
    SIZES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(DEFAULT_SIZE)
}

fn rewrite(code: String, pattern: &str, token: &str, default: &str, occurrence: Occurrence) -> String {
    let from = pattern.replace(SLOT, default);
    let to = pattern.replace(SLOT, token);
    match occurrence {
        Occurrence::First => code.replacen(&from, &to, 1),
        Occurrence::All => code.replace(&from, &to),
    }
}

pub fn apply_color(code: String, kind: ComponentKind, variant: &str, color: &str) -> String {
    let token = resolve_color(color);
    COLOR_RULES
        .iter()
        .filter(|rule| rule.kind == kind)
        .filter(|rule| rule.variant.map_or(true, |v| v == variant))
        .fold(code, |code, rule| {
            rewrite(code, rule.pattern, token, DEFAULT_COLOR, rule.occurrence)
        })
}

pub fn apply_size(code: String, kind: ComponentKind, framework: Framework, size: &str) -> String {
    let token = resolve_size(size);
    SIZE_RULES
        .iter()
        .filter(|rule| rule.kind == kind && rule.framework == framework)
        .fold(code, |code, rule| {
            rewrite(code, rule.pattern, token, DEFAULT_SIZE, Occurrence::First)
        })
}

/// Apply the first color and the first size constraint, if present
pub fn apply_constraints(
    code: &str,
    kind: ComponentKind,
    framework: Framework,
    variant: &str,
    constraints: &[String],
) -> String {
    let mut code = code.to_string();
    if let Some(color) = constraint_value(constraints, "color") {
        code = apply_color(code, kind, variant, color);
    }
    if let Some(size) = constraint_value(constraints, "size") {
        code = apply_size(code, kind, framework, size);
    }
    code
}
