//! Keyword tables for uigen-in.
//!
//! The parser is a small interpreter over these tables. Order is significant:
//! scans walk each table front to back and ties resolve to the earlier entry.

use uigen_core::{ComponentKind as K, Framework, StylingSystem};

/// Keyword → candidate kinds. The first kind is the one adopted on a match.
pub const COMPONENT_KEYWORDS: &[(&str, &[K])] = &[
    ("button", &[K::Button]),
    ("btn", &[K::Button]),
    ("input", &[K::Input]),
    ("form", &[K::Input, K::ContactForm]),
    ("textbox", &[K::Input]),
    ("field", &[K::Input]),
    ("card", &[K::Card]),
    ("panel", &[K::Card]),
    ("modal", &[K::Modal]),
    ("dialog", &[K::Modal]),
    ("popup", &[K::Modal]),
    ("overlay", &[K::Modal]),
    ("alert", &[K::Alert]),
    ("notification", &[K::Alert]),
    ("message", &[K::Alert]),
    ("toast", &[K::Alert]),
    ("pricing", &[K::PricingTable]),
    ("price", &[K::PricingTable]),
    ("subscription", &[K::PricingTable]),
    ("plan", &[K::PricingTable]),
    ("tier", &[K::PricingTable]),
    ("contact", &[K::ContactForm]),
    ("navigation", &[K::Navigation]),
    ("nav", &[K::Navigation]),
    ("navbar", &[K::Navigation]),
    ("menu", &[K::Navigation]),
    ("sidebar", &[K::Navigation]),
    ("hero", &[K::Hero]),
    ("banner", &[K::Hero]),
    ("header", &[K::Hero]),
    ("landing", &[K::Hero]),
    ("table", &[K::DataTable]),
    ("grid", &[K::DataTable]),
    ("list", &[K::DataTable]),
    ("data", &[K::DataTable]),
];

/// Word pairs that force a composite kind when both are present.
/// Checked in order after generic matching; the first satisfied pair wins.
pub const COMPOSITE_OVERRIDES: &[(&str, &str, K)] = &[
    ("pricing", "table", K::PricingTable),
    ("contact", "form", K::ContactForm),
    ("data", "table", K::DataTable),
];

pub const FRAMEWORK_KEYWORDS: &[(&str, Framework)] = &[
    ("react", Framework::React),
    ("vue", Framework::Vue),
    ("svelte", Framework::Svelte),
    ("next", Framework::React),
    ("nuxt", Framework::Vue),
    ("sveltekit", Framework::Svelte),
];

pub const STYLING_KEYWORDS: &[(&str, StylingSystem)] = &[
    ("tailwind", StylingSystem::Tailwind),
    ("css", StylingSystem::Css),
    ("styled-components", StylingSystem::StyledComponents),
    ("styled", StylingSystem::StyledComponents),
    ("emotion", StylingSystem::Emotion),
];

pub const FEATURE_KEYWORDS: &[(&str, &[&str])] = &[
    ("responsive", &["responsive"]),
    ("mobile", &["responsive"]),
    ("accessible", &["accessibility"]),
    ("a11y", &["accessibility"]),
    ("dark", &["dark-mode"]),
    ("theme", &["theming"]),
    ("animated", &["animation"]),
    ("loading", &["loading-state"]),
    ("spinner", &["loading-state"]),
    ("validation", &["form-validation"]),
    ("error", &["error-handling"]),
    ("success", &["success-state"]),
    ("disabled", &["disabled-state"]),
    ("hover", &["hover-effects"]),
    ("focus", &["focus-states"]),
    ("gradient", &["gradient-background"]),
    ("shadow", &["drop-shadow"]),
    ("rounded", &["rounded-corners"]),
    ("border", &["border-styles"]),
];

pub const COLOR_NAMES: &[&str] = &[
    "blue", "red", "green", "yellow", "purple", "pink", "gray", "black", "white",
];

pub const SIZE_NAMES: &[&str] = &["small", "medium", "large", "xl", "xs", "sm", "lg"];

pub const STYLE_NAMES: &[&str] = &["minimal", "modern", "classic", "elegant"];

/// Confidence every parse starts from
pub const BASE_CONFIDENCE: f64 = 0.5;
/// Added per distinct component keyword present in the text
pub const KEYWORD_WEIGHT: f64 = 0.1;
/// Added per extracted feature tag
pub const FEATURE_WEIGHT: f64 = 0.05;
/// Added when a composite override is confirmed by both of its words
pub const COMPOSITE_BONUS: f64 = 0.2;
