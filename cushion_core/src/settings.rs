//! # Calculator Settings
//!
//! Defaults used by parameter-entry surfaces. Settings only pick starting
//! values; the process constants live in
//! [`mixing`](crate::calculations::mixing) and are not configurable.
//!
//! ## Example
//!
//! ```rust
//! use cushion_core::settings::CalculatorSettings;
//!
//! let settings = CalculatorSettings {
//!     density_kg_m3: 180.0,
//!     ..Default::default()
//! };
//! let input = settings.default_input();
//! assert_eq!(input.density_kg_m3, 180.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{CushionInput, MoldType};
use crate::errors::CalcResult;

/// Default foam density (kg/m³)
pub const DEFAULT_DENSITY_KG_M3: f64 = 150.0;

/// Density range the foam system is rated for (kg/m³, inclusive)
pub const RECOMMENDED_DENSITY_KG_M3: (f64, f64) = (100.0, 300.0);

/// Whether `density` lies in [`RECOMMENDED_DENSITY_KG_M3`].
pub fn density_in_recommended_range(density: f64) -> bool {
    let (lo, hi) = RECOMMENDED_DENSITY_KG_M3;
    (lo..=hi).contains(&density)
}

/// Entry defaults for new calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Mold selected when the form opens
    pub default_mold: MoldType,

    /// Foam density applied to every calculation (kg/m³)
    pub density_kg_m3: f64,

    /// Starting wall thickness (mm)
    pub thickness_mm: f64,

    /// Starting pipe outer diameter (mm)
    pub outer_diameter_mm: f64,

    /// Starting cushion length (mm)
    pub length_mm: f64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            default_mold: MoldType::Circular,
            density_kg_m3: DEFAULT_DENSITY_KG_M3,
            thickness_mm: 30.0,
            outer_diameter_mm: 42.0,
            length_mm: 200.0,
        }
    }
}

impl CalculatorSettings {
    /// Build the input a fresh form starts with.
    pub fn default_input(&self) -> CushionInput {
        CushionInput {
            mold_type: self.default_mold,
            thickness_mm: self.thickness_mm,
            outer_diameter_mm: self.outer_diameter_mm,
            length_mm: self.length_mm,
            density_kg_m3: self.density_kg_m3,
        }
    }

    /// Reject settings whose defaults would not calculate.
    pub fn validate(&self) -> CalcResult<()> {
        self.default_input().validate()
    }
}
