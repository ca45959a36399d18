//! uigen Generator: Description → Component Response
//!
//! # Pipeline Flow
//!
//! ```text
//! Description → uigen-in → Catalog → Selector → Templates → Response
//!                  ↓          ↓          ↓           ↓
//!               Intent    Definition  Variants   Code + Styles
//! ```
//!
//! # Example
//!
//! ```no_run
//! use uigen_generator::ComponentGenerator;
//!
//! # async fn demo() -> Result<(), uigen_core::UiGenError> {
//! let generator = ComponentGenerator::builtin()?;
//! let response = generator.quick_generate("create a red button with loading state").await?;
//! for variant in &response.variants {
//!     println!("{}: {} bytes", variant.name, variant.code.len());
//! }
//! # Ok(())
//! # }
//! ```

mod generator;
mod instructions;

pub use generator::ComponentGenerator;
pub use instructions::integration_instructions;
