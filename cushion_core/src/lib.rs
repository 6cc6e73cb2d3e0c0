//! # cushion_core - Polyurethane Cushion Casting Calculator
//!
//! `cushion_core` computes how much two-component polyurethane to pour for a
//! pipe-support cushion. All inputs and outputs are JSON-serializable so the
//! same API serves the terminal front-end, scripts, and any other caller.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Typed Units**: Millimetre inputs never leak into metre geometry
//!
//! ## Quick Start
//!
//! ```rust
//! use cushion_core::calculations::{calculate, CushionInput, MoldType};
//!
//! let input = CushionInput {
//!     mold_type: MoldType::Saddle,
//!     ..CushionInput::default()
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Polyol: {} kg, Isocyanate: {} kg", result.polyol_kg, result.isocyanate_kg);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Geometry, mixing, and the cushion pipeline
//! - [`presets`] - Standard cushion sizes and quick-select lists
//! - [`settings`] - Entry defaults (density, starting dimensions)
//! - [`job`] - Batch totals for a casting session
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod job;
pub mod presets;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CushionInput, CushionResult, MoldType};
pub use errors::{CalcError, CalcResult};
pub use job::{CastingJob, JobItem, JobTotals};
pub use presets::{find_preset, presets_for, Preset};
pub use settings::CalculatorSettings;
