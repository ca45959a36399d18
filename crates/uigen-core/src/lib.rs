//! uigen Core: shared vocabulary for the component generator
//!
//! Closed enums for component kinds, frameworks and styling systems, the
//! records that flow between parser, catalog and generator, and the unified
//! error type.

pub mod kinds;
pub mod data_model;
pub mod error;

pub use kinds::{Category, Complexity, ComponentKind, Framework, StylingSystem, VariantHint};
pub use data_model::{
    constraint_value, ColorScheme, ComponentDefinition, ComponentMetadata, ComponentRequest, ComponentResponse,
    ComponentVariant, ParsedIntent, ProjectConstraints, PropSpec, PropsSchema, VariantDefinition,
};
pub use error::UiGenError;

/// Engine version reported by the adapters
pub const UIGEN_VERSION: &str = "1.0.0";

/// Hard cap on the number of variants emitted per response
pub const MAX_VARIANTS: usize = 3;
