//! Intent matching for uigen-in.
//!
//! Each function reads one dimension of the intent out of normalized text by
//! scanning the tables in [`crate::keywords`].

use uigen_core::{ComponentKind, Framework, StylingSystem};

use crate::keywords::{
    BASE_CONFIDENCE, COLOR_NAMES, COMPONENT_KEYWORDS, COMPOSITE_BONUS, COMPOSITE_OVERRIDES,
    FEATURE_KEYWORDS, FEATURE_WEIGHT, FRAMEWORK_KEYWORDS, KEYWORD_WEIGHT, SIZE_NAMES,
    STYLE_NAMES, STYLING_KEYWORDS,
};
use crate::normalizer::{contains_all, occurrences};

/// Kind used when no keyword matches
pub const FALLBACK_KIND: ComponentKind = ComponentKind::Button;

/// Resolve the component kind.
///
/// The keyword with the most occurrences wins (strictly greater count
/// replaces the current best, so ties keep the earlier table entry). Composite
/// overrides are applied afterwards and beat any generic match.
pub fn match_component_kind(text: &str) -> ComponentKind {
    let mut best = FALLBACK_KIND;
    let mut max_hits = 0;

    for (keyword, kinds) in COMPONENT_KEYWORDS {
        let hits = occurrences(text, keyword);
        if hits > max_hits {
            if let Some(first) = kinds.first() {
                max_hits = hits;
                best = *first;
            }
        }
    }

    COMPOSITE_OVERRIDES
        .iter()
        .find(|(a, b, _)| contains_all(text, &[*a, *b]))
        .map(|(_, _, kind)| *kind)
        .unwrap_or(best)
}

/// First framework keyword found, if any
pub fn match_framework(text: &str) -> Option<Framework> {
    FRAMEWORK_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, framework)| *framework)
}

/// First styling keyword found, if any
pub fn match_styling(text: &str) -> Option<StylingSystem> {
    STYLING_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, styling)| *styling)
}

/// Union of the tags of every feature keyword present
pub fn match_features(text: &str) -> Vec<String> {
    let mut features: Vec<String> = Vec::new();
    for (keyword, tags) in FEATURE_KEYWORDS {
        if !text.contains(keyword) {
            continue;
        }
        for tag in *tags {
            if !features.iter().any(|f| f == tag) {
                features.push(tag.to_string());
            }
        }
    }
    features
}

/// Color, size and style directives, each vocabulary in its own scan order
pub fn match_constraints(text: &str) -> Vec<String> {
    let vocabularies: [(&str, &[&str]); 3] = [
        ("color", COLOR_NAMES),
        ("size", SIZE_NAMES),
        ("style", STYLE_NAMES),
    ];

    vocabularies
        .iter()
        .flat_map(|(category, names)| {
            names
                .iter()
                .filter(|name| text.contains(*name))
                .map(move |name| format!("{}:{}", category, name))
        })
        .collect()
}

/// Number of distinct component keywords present anywhere in the text
pub fn count_component_keywords(text: &str) -> usize {
    COMPONENT_KEYWORDS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .count()
}

/// Heuristic confidence, clamped to at most 1.0
pub fn score_confidence(text: &str, kind: ComponentKind, feature_count: usize) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    confidence += count_component_keywords(text) as f64 * KEYWORD_WEIGHT;
    confidence += feature_count as f64 * FEATURE_WEIGHT;

    if kind == ComponentKind::PricingTable && contains_all(text, &["pricing", "table"]) {
        confidence += COMPOSITE_BONUS;
    }
    if kind == ComponentKind::ContactForm && contains_all(text, &["contact", "form"]) {
        confidence += COMPOSITE_BONUS;
    }

    confidence.min(1.0)
}
