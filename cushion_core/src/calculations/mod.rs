//! # Cushion Calculations
//!
//! Every calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`geometry`] - Cross-sectional area formulas per mold shape
//! - [`mixing`] - Process loss and the two-component chemical split
//! - [`cushion`] - Full area → volume → mass → polyol/isocyanate pipeline

pub mod cushion;
pub mod geometry;
pub mod mixing;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// Re-export commonly used types
pub use cushion::{calculate, CushionBreakdown, CushionInput, CushionResult};
pub use mixing::ChemicalSplit;

/// Cross-sectional shape of the mold the cushion is cast in.
///
/// Serializes as `"circular"` / `"saddle"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoldType {
    /// Round mold around a round core: the cushion is an annulus
    #[default]
    Circular,
    /// Square-based U mold around a round core
    Saddle,
}

impl MoldType {
    /// All mold types, in selector order
    pub const ALL: [MoldType; 2] = [MoldType::Circular, MoldType::Saddle];

    /// Get display name (e.g., "Circular")
    pub fn display_name(&self) -> &'static str {
        match self {
            MoldType::Circular => "Circular",
            MoldType::Saddle => "Saddle (U)",
        }
    }
}

impl fmt::Display for MoldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MoldType {
    type Err = CalcError;

    /// Accepts `circular`/`c`/`round` and `saddle`/`s`/`u`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" | "c" | "round" => Ok(MoldType::Circular),
            "saddle" | "s" | "u" => Ok(MoldType::Saddle),
            other => Err(CalcError::invalid_input(
                "mold_type",
                other,
                "Expected 'circular' or 'saddle'",
            )),
        }
    }
}

/// Round `value` to `places` decimal places (half away from zero).
///
/// Values too large to scale have no fractional digits and are returned as is.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
