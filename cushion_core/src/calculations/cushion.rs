//! # Cushion Casting Calculation
//!
//! Computes how much polyol and isocyanate to pour for one polyurethane
//! pipe-support cushion.
//!
//! ## Pipeline
//!
//! 1. Convert thickness, pipe OD and length from mm to m
//! 2. Cross-sectional area for the mold shape (see [`geometry`](super::geometry))
//! 3. Volume = area × length
//! 4. Finished mass = volume × density
//! 5. Required mass = finished × [`PROCESS_LOSS_FACTOR`](super::mixing::PROCESS_LOSS_FACTOR)
//! 6. Polyol / isocyanate split at 1.0 : 1.2
//!
//! Rounding (area 4 dp, volume 5 dp, masses 2 dp) happens once, when the
//! unrounded [`CushionBreakdown`] is turned into a [`CushionResult`].
//!
//! ## Example
//!
//! ```rust
//! use cushion_core::calculations::{calculate, CushionInput, MoldType};
//!
//! let input = CushionInput {
//!     mold_type: MoldType::Circular,
//!     thickness_mm: 30.0,
//!     outer_diameter_mm: 42.0,
//!     length_mm: 200.0,
//!     density_kg_m3: 150.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.area_m2, 0.0068);
//! assert_eq!(result.polyol_kg, 0.07);
//! assert_eq!(result.isocyanate_kg, 0.09);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::geometry::{cross_section_area, outer_size};
use crate::calculations::mixing::{required_mass, ChemicalSplit};
use crate::calculations::{round_to, MoldType};
use crate::errors::{CalcError, CalcResult};
use crate::settings::{self, CalculatorSettings};
use crate::units::{CubicMeters, KgPerCubicMeter, Kilograms, Meters, Millimeters, SquareMeters};

/// Decimal places for area (m²)
pub const AREA_DECIMALS: i32 = 4;
/// Decimal places for volume (m³)
pub const VOLUME_DECIMALS: i32 = 5;
/// Decimal places for all masses (kg)
pub const MASS_DECIMALS: i32 = 2;

/// Input parameters for one cushion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mold_type": "saddle",
///   "thickness_mm": 30.0,
///   "outer_diameter_mm": 42.0,
///   "length_mm": 200.0,
///   "density_kg_m3": 150.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CushionInput {
    /// Mold cross-section shape
    pub mold_type: MoldType,

    /// Cushion wall thickness in mm
    pub thickness_mm: f64,

    /// Outer diameter of the pipe being supported, in mm
    pub outer_diameter_mm: f64,

    /// Cushion length along the pipe in mm
    pub length_mm: f64,

    /// Density of the cured foam in kg/m³
    pub density_kg_m3: f64,
}

impl Default for CushionInput {
    fn default() -> Self {
        CalculatorSettings::default().default_input()
    }
}

impl CushionInput {
    /// Validate input parameters.
    ///
    /// Every dimension and the density must be a finite, strictly positive
    /// number. The first offending field is reported.
    pub fn validate(&self) -> CalcResult<()> {
        check_positive("thickness_mm", self.thickness_mm, "Thickness")?;
        check_positive("outer_diameter_mm", self.outer_diameter_mm, "Outer diameter")?;
        check_positive("length_mm", self.length_mm, "Length")?;
        check_positive("density_kg_m3", self.density_kg_m3, "Density")?;
        Ok(())
    }

    /// Wall thickness in metres
    pub fn thickness(&self) -> Meters {
        Millimeters(self.thickness_mm).into()
    }

    /// Pipe outer diameter in metres
    pub fn outer_diameter(&self) -> Meters {
        Millimeters(self.outer_diameter_mm).into()
    }

    /// Cushion length in metres
    pub fn length(&self) -> Meters {
        Millimeters(self.length_mm).into()
    }

    pub fn density(&self) -> KgPerCubicMeter {
        KgPerCubicMeter(self.density_kg_m3)
    }

    /// Parse and validate an input from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let input: CushionInput = serde_json::from_str(json)?;
        input.validate()?;
        Ok(input)
    }

    /// Copy of this input with a different mold shape
    pub fn with_mold(mut self, mold_type: MoldType) -> Self {
        self.mold_type = mold_type;
        self
    }
}

fn check_positive(field: &str, value: f64, label: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{label} must be a finite number"),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{label} must be positive"),
        ));
    }
    Ok(())
}

/// Unrounded intermediate values of a cushion calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CushionBreakdown {
    pub mold_type: MoldType,
    /// Outer diameter (circular) or square side (saddle), `od + 2t`
    pub outer_size: Meters,
    pub area: SquareMeters,
    pub volume: CubicMeters,
    pub finished_mass: Kilograms,
    pub required_mass: Kilograms,
    pub split: ChemicalSplit,
}

impl CushionBreakdown {
    /// Apply output rounding.
    pub fn rounded(&self) -> CushionResult {
        CushionResult {
            area_m2: round_to(self.area.0, AREA_DECIMALS),
            volume_m3: round_to(self.volume.0, VOLUME_DECIMALS),
            finished_mass_kg: round_to(self.finished_mass.0, MASS_DECIMALS),
            required_mass_kg: round_to(self.required_mass.0, MASS_DECIMALS),
            polyol_kg: round_to(self.split.polyol.0, MASS_DECIMALS),
            isocyanate_kg: round_to(self.split.isocyanate.0, MASS_DECIMALS),
        }
    }
}

/// Results from a cushion calculation, rounded for display.
///
/// The `Default` value is all zeros and means "not computed".
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 0.0068,
///   "volume_m3": 0.00136,
///   "finished_mass_kg": 0.2,
///   "required_mass_kg": 0.16,
///   "polyol_kg": 0.07,
///   "isocyanate_kg": 0.09
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CushionResult {
    /// Cross-sectional area (m², 4 dp)
    pub area_m2: f64,

    /// Cushion volume (m³, 5 dp)
    pub volume_m3: f64,

    /// Mass of the cured cushion (kg, 2 dp)
    pub finished_mass_kg: f64,

    /// Mass of liquid to pour after the process-loss factor (kg, 2 dp)
    pub required_mass_kg: f64,

    /// Polyol share of the pour (kg, 2 dp)
    pub polyol_kg: f64,

    /// Isocyanate share of the pour (kg, 2 dp)
    pub isocyanate_kg: f64,
}

impl CushionResult {
    /// False for the all-zero "not computed" result.
    pub fn is_computed(&self) -> bool {
        *self != CushionResult::default()
    }

    /// Sum of the two rounded components. May differ from
    /// `required_mass_kg` by up to 0.01 kg.
    pub fn component_total_kg(&self) -> f64 {
        round_to(self.polyol_kg + self.isocyanate_kg, MASS_DECIMALS)
    }
}

/// Run the full pipeline and keep every intermediate unrounded.
pub fn analyze(input: &CushionInput) -> CalcResult<CushionBreakdown> {
    input.validate()?;

    if !settings::density_in_recommended_range(input.density_kg_m3) {
        let (lo, hi) = settings::RECOMMENDED_DENSITY_KG_M3;
        warn!(
            density_kg_m3 = input.density_kg_m3,
            "density outside recommended range {lo}-{hi} kg/m³"
        );
    }

    let thickness = input.thickness();
    let outer_diameter = input.outer_diameter();

    let area = cross_section_area(input.mold_type, thickness, outer_diameter);
    let volume = area * input.length();
    let finished_mass = volume * input.density();
    let required = required_mass(finished_mass);
    let split = ChemicalSplit::of(required);

    if !area.0.is_finite() {
        let field = if input.thickness_mm >= input.outer_diameter_mm {
            ("thickness_mm", input.thickness_mm)
        } else {
            ("outer_diameter_mm", input.outer_diameter_mm)
        };
        return Err(CalcError::invalid_input(
            field.0,
            field.1.to_string(),
            "Dimensions too large: cross-section area overflows",
        ));
    }
    if area.0 <= 0.0 {
        return Err(CalcError::invalid_input(
            "thickness_mm",
            input.thickness_mm.to_string(),
            "Thickness too small to give a measurable cross-section",
        ));
    }
    if !volume.0.is_finite() {
        return Err(CalcError::invalid_input(
            "length_mm",
            input.length_mm.to_string(),
            "Length too large: volume overflows",
        ));
    }
    let masses = [finished_mass, required, split.polyol, split.isocyanate];
    if masses.iter().any(|m| !m.0.is_finite()) {
        return Err(CalcError::invalid_input(
            "density_kg_m3",
            input.density_kg_m3.to_string(),
            "Density too large: mass overflows",
        ));
    }

    debug!(
        mold = ?input.mold_type,
        area_m2 = area.0,
        volume_m3 = volume.0,
        required_kg = required.0,
        "cushion calculated"
    );

    Ok(CushionBreakdown {
        mold_type: input.mold_type,
        outer_size: outer_size(thickness, outer_diameter),
        area,
        volume,
        finished_mass,
        required_mass: required,
        split,
    })
}

/// Calculate the pour for one cushion.
///
/// # Returns
///
/// * `Ok(CushionResult)` - Rounded results
/// * `Err(CalcError::InvalidInput)` - A dimension or the density is not a
///   finite positive number, or the inputs are so extreme that area, volume
///   or mass would not be a finite positive number
pub fn calculate(input: &CushionInput) -> CalcResult<CushionResult> {
    analyze(input).map(|b| b.rounded())
}

/// Calculate with the mold forced to [`MoldType::Circular`].
pub fn calculate_circular(input: &CushionInput) -> CalcResult<CushionResult> {
    calculate(&input.with_mold(MoldType::Circular))
}

/// Calculate with the mold forced to [`MoldType::Saddle`].
pub fn calculate_saddle(input: &CushionInput) -> CalcResult<CushionResult> {
    calculate(&input.with_mold(MoldType::Saddle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cushion() -> CushionInput {
        CushionInput {
            mold_type: MoldType::Circular,
            thickness_mm: 30.0,
            outer_diameter_mm: 42.0,
            length_mm: 200.0,
            density_kg_m3: 150.0,
        }
    }

    #[test]
    fn test_circular_reference_values() {
        let r = calculate(&test_cushion()).unwrap();
        assert_eq!(r.area_m2, 0.0068);
        assert_eq!(r.volume_m3, 0.00136);
        assert_eq!(r.finished_mass_kg, 0.20);
        assert_eq!(r.required_mass_kg, 0.16);
        assert_eq!(r.polyol_kg, 0.07);
        assert_eq!(r.isocyanate_kg, 0.09);
    }

    #[test]
    fn test_saddle_reference_values() {
        // A = 0.0079022, V = 0.00158044, m = 0.237066, req = 0.189653
        let r = calculate_saddle(&test_cushion()).unwrap();
        assert_eq!(r.area_m2, 0.0079);
        assert_eq!(r.volume_m3, 0.00158);
        assert_eq!(r.finished_mass_kg, 0.24);
        assert_eq!(r.required_mass_kg, 0.19);
        assert_eq!(r.polyol_kg, 0.09);
        assert_eq!(r.isocyanate_kg, 0.10);
    }

    #[test]
    fn test_saddle_differs_from_circular() {
        let c = calculate_circular(&test_cushion()).unwrap();
        let s = calculate_saddle(&test_cushion()).unwrap();
        assert_ne!(c.area_m2, s.area_m2);
    }

    #[test]
    fn test_large_preset_size() {
        // DN65-T50-L350: D = 0.16, A = π/4 · 0.022 = 0.0172788
        let input = CushionInput {
            thickness_mm: 50.0,
            outer_diameter_mm: 60.0,
            length_mm: 350.0,
            ..test_cushion()
        };
        let r = calculate(&input).unwrap();
        assert_eq!(r.area_m2, 0.0173);
        assert_eq!(r.volume_m3, 0.00605);
        assert_eq!(r.finished_mass_kg, 0.91);
        assert_eq!(r.required_mass_kg, 0.73);
        assert_eq!(r.polyol_kg, 0.33);
        assert_eq!(r.isocyanate_kg, 0.40);
    }

    #[test]
    fn test_rounding_applied_once() {
        let b = analyze(&test_cushion()).unwrap();
        // Intermediates stay unrounded
        assert!((b.area.0 - 0.006_785_84).abs() < 1e-8);
        assert!((b.outer_size.0 - 0.102).abs() < 1e-12);
        // Finished mass comes from the unrounded volume
        assert!((b.finished_mass.0 - b.volume.0 * 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let input = test_cushion().with_mold(MoldType::Saddle);
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.area_m2.to_bits(), b.area_m2.to_bits());
        assert_eq!(a.isocyanate_kg.to_bits(), b.isocyanate_kg.to_bits());
    }

    #[test]
    fn test_zero_thickness_rejected() {
        let mut input = test_cushion();
        input.thickness_mm = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("thickness_mm"));
    }

    #[test]
    fn test_zero_outer_diameter_rejected() {
        let mut input = test_cushion();
        input.outer_diameter_mm = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("outer_diameter_mm"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut input = test_cushion();
        input.length_mm = f64::NAN;
        assert!(calculate(&input).is_err());

        let mut input = test_cushion();
        input.density_kg_m3 = f64::INFINITY;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("density_kg_m3"));
    }

    #[test]
    fn test_huge_dimensions_rejected() {
        // inf − inf in the annulus
        let input = CushionInput {
            thickness_mm: 1e200,
            outer_diameter_mm: 1e200,
            ..test_cushion()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("thickness_mm"));

        // a² overflows for the saddle square
        let input = CushionInput {
            thickness_mm: 1e160,
            ..test_cushion()
        };
        let err = calculate_saddle(&input).unwrap_err();
        assert_eq!(err.field(), Some("thickness_mm"));
    }

    #[test]
    fn test_huge_length_and_density_rejected() {
        // area ≈ 3.1e294 m², length 1e97 m
        let input = CushionInput {
            thickness_mm: 1e150,
            length_mm: 1e100,
            ..test_cushion()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("length_mm"));

        let input = CushionInput {
            length_mm: 1e300,
            density_kg_m3: 1e300,
            ..test_cushion()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("density_kg_m3"));
    }

    #[test]
    fn test_vanishing_thickness_rejected() {
        // od + 2t == od once t drops below the OD's precision
        let input = CushionInput {
            thickness_mm: 1e-300,
            ..test_cushion()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("thickness_mm"));

        // Saddle keeps its square corners: od²(1 − π/4)/2
        let saddle = analyze(&input.with_mold(MoldType::Saddle)).unwrap();
        let corners = 0.042f64.powi(2) * (1.0 - std::f64::consts::FRAC_PI_4) / 2.0;
        assert!((saddle.area.0 - corners).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_result_stays_finite() {
        // Volume ≈ 6.3e306 m³: scaling by 1e5 for rounding would overflow
        let input = CushionInput {
            thickness_mm: 1e100,
            outer_diameter_mm: 1e100,
            length_mm: 1e115,
            density_kg_m3: 1.0,
            ..test_cushion()
        };
        let r = calculate(&input).unwrap();
        for v in [r.area_m2, r.volume_m3, r.finished_mass_kg, r.required_mass_kg, r.polyol_kg, r.isocyanate_kg] {
            assert!(v.is_finite() && v > 0.0);
        }
    }

    #[test]
    fn test_negative_density_rejected() {
        let mut input = test_cushion();
        input.density_kg_m3 = -150.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_not_computed_sentinel() {
        assert!(!CushionResult::default().is_computed());
        assert!(calculate(&test_cushion()).unwrap().is_computed());
    }

    #[test]
    fn test_default_input_matches_entry_defaults() {
        let input = CushionInput::default();
        assert_eq!(input.mold_type, MoldType::Circular);
        assert_eq!(input.thickness_mm, 30.0);
        assert_eq!(input.outer_diameter_mm, 42.0);
        assert_eq!(input.length_mm, 200.0);
        assert_eq!(input.density_kg_m3, 150.0);
    }

    #[test]
    fn test_input_json() {
        let json = r#"{
            "mold_type": "saddle",
            "thickness_mm": 30.0,
            "outer_diameter_mm": 42.0,
            "length_mm": 200.0,
            "density_kg_m3": 150.0
        }"#;
        let input = CushionInput::from_json(json).unwrap();
        assert_eq!(input.mold_type, MoldType::Saddle);
        assert_eq!(calculate(&input).unwrap().area_m2, 0.0079);
    }

    #[test]
    fn test_input_json_errors() {
        let err = CushionInput::from_json(r#"{ "mold_type": "saddle" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let zero_length = r#"{
            "mold_type": "circular",
            "thickness_mm": 30.0,
            "outer_diameter_mm": 42.0,
            "length_mm": 0.0,
            "density_kg_m3": 150.0
        }"#;
        let err = CushionInput::from_json(zero_length).unwrap_err();
        assert_eq!(err.field(), Some("length_mm"));
    }
}
