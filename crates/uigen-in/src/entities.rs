//! Auxiliary extraction for uigen-in.
//!
//! These run on the description as written, independently of [`crate::parse`]:
//! - Variant hints (basic / advanced / minimal / complete)
//! - Quantities ("3 tiers", "4 columns")
//! - Comparison targets ("like Stripe", "inspired by Linear")

use lazy_static::lazy_static;
use regex::Regex;
use uigen_core::VariantHint;

lazy_static! {
    /// A count followed by a countable component part
    static ref QUANTITY: Regex = Regex::new(r"(\d+)\s*(tier|column|row|item|button)").unwrap();

    /// Comparison phrases, tried in order
    static ref COMPARISONS: Vec<Regex> = vec![
        Regex::new(r"like\s+([a-zA-Z]+)").unwrap(),
        Regex::new(r"similar\s+to\s+([a-zA-Z]+)").unwrap(),
        Regex::new(r"inspired\s+by\s+([a-zA-Z]+)").unwrap(),
        Regex::new(r"based\s+on\s+([a-zA-Z]+)").unwrap(),
    ];
}

/// Hint words, checked in order; the first rule with any word present wins
const VARIANT_HINTS: &[(&[&str], VariantHint)] = &[
    (&["simple", "basic"], VariantHint::Basic),
    (&["advanced", "complex"], VariantHint::Advanced),
    (&["minimal"], VariantHint::Minimal),
    (&["full", "complete"], VariantHint::Complete),
];

pub fn extract_variant_hint(description: &str) -> Option<VariantHint> {
    VARIANT_HINTS
        .iter()
        .find(|(words, _)| words.iter().any(|w| description.contains(w)))
        .map(|(_, hint)| *hint)
}

/// Counts past `u64::MAX` saturate
pub fn extract_quantity(description: &str) -> Option<u64> {
    QUANTITY
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

pub fn extract_comparison(description: &str) -> Option<String> {
    COMPARISONS.iter().find_map(|pattern| {
        pattern
            .captures(description)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
