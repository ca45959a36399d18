//! uigen-IN: Natural Language to Component Intent
//!
//! This crate reads a short free-text request ("create a blue button with
//! loading state") and derives a structured [`ParsedIntent`]: component kind,
//! framework, styling system, feature tags, constraints and a confidence score.
//!
//! Parsing never fails. Dimensions that no keyword speaks to fall back to
//! defaults (button, React, Tailwind).
//!
//! # Example
//!
//! ```
//! use uigen_in::parse;
//! use uigen_core::{ComponentKind, Framework};
//!
//! let intent = parse("create a red Vue button");
//! assert_eq!(intent.component_kind, ComponentKind::Button);
//! assert_eq!(intent.framework, Framework::Vue);
//! assert!(intent.constraints.contains(&"color:red".to_string()));
//! ```

pub mod keywords;
pub mod normalizer;
pub mod matcher;
pub mod entities;

pub use entities::{extract_comparison, extract_quantity, extract_variant_hint};

use tracing::debug;
use uigen_core::ParsedIntent;

/// Parse a description into a structured intent
pub fn parse(description: &str) -> ParsedIntent {
    let normalized = normalizer::normalize(description);

    let component_kind = matcher::match_component_kind(&normalized);
    let framework = matcher::match_framework(&normalized).unwrap_or_default();
    let styling = matcher::match_styling(&normalized).unwrap_or_default();
    let features = matcher::match_features(&normalized);
    let constraints = matcher::match_constraints(&normalized);
    let confidence = matcher::score_confidence(&normalized, component_kind, features.len());

    debug!(
        kind = %component_kind,
        framework = %framework,
        styling = %styling,
        confidence,
        "parsed component intent"
    );

    ParsedIntent {
        component_kind,
        framework,
        styling,
        features,
        constraints,
        confidence,
    }
}
