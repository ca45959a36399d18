//! uigen-OUT: component source and markdown output
//!
//! This crate turns catalog variants into source code and presents results
//! as text:
//! - [`templates`]: base component templates behind [`TemplateProvider`],
//!   plus the response templates file
//! - [`constraints`]: color and size rewriting of base code
//! - [`codegen`]: variant selection, code and stylesheet generation
//! - [`renderer`]: Handlebars rendering of responses and listings
//!
//! # Example
//!
//! ```
//! use uigen_core::{ComponentKind, Framework};
//! use uigen_out::{apply_constraints, BuiltinTemplates, TemplateProvider};
//!
//! let base = BuiltinTemplates.base_code(ComponentKind::Button, Framework::React).unwrap();
//! let code = apply_constraints(
//!     base,
//!     ComponentKind::Button,
//!     Framework::React,
//!     "primary",
//!     &["color:green".to_string()],
//! );
//! assert!(code.contains("bg-green-600"));
//! ```

pub mod templates;
pub mod constraints;
pub mod codegen;
pub mod renderer;

pub use codegen::{generate_code, generate_styles, select_variants};
pub use constraints::{apply_constraints, resolve_color, resolve_size};
pub use renderer::TemplateRenderer;
pub use templates::{BuiltinTemplates, InMemoryTemplates, TemplateProvider, TemplatesFile};
