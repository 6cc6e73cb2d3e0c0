//! Standard Cushion Presets
//!
//! Canonical cushion sizes per mold type, named `DN<pipe>-T<thickness>-L<length>`
//! (saddle names carry a `U-` prefix). Pipe ODs follow the metric DN series:
//!
//! - DN20 = 21 mm, DN25 = 27 mm, DN32 = 34 mm
//! - DN40 = 42 mm, DN50 = 49 mm, DN65 = 60 mm
//!
//! Also holds the quick-select value lists offered next to each input.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::calculations::{CushionInput, MoldType};
use crate::errors::{CalcError, CalcResult};

/// A named (thickness, OD, length) triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    /// Wall thickness (mm)
    pub thickness_mm: f64,
    /// Pipe outer diameter (mm)
    pub outer_diameter_mm: f64,
    /// Cushion length (mm)
    pub length_mm: f64,
}

impl Preset {
    const fn new(name: &'static str, thickness_mm: f64, outer_diameter_mm: f64, length_mm: f64) -> Self {
        Preset {
            name,
            thickness_mm,
            outer_diameter_mm,
            length_mm,
        }
    }

    /// Fill a calculation input from this preset.
    pub fn to_input(&self, mold_type: MoldType, density_kg_m3: f64) -> CushionInput {
        CushionInput {
            mold_type,
            thickness_mm: self.thickness_mm,
            outer_diameter_mm: self.outer_diameter_mm,
            length_mm: self.length_mm,
            density_kg_m3,
        }
    }
}

/// Round-mold presets, smallest pipe first
pub const CIRCULAR_PRESETS: [Preset; 6] = [
    Preset::new("DN20-T25-L100", 25.0, 21.0, 100.0),
    Preset::new("DN25-T30-L150", 30.0, 27.0, 150.0),
    Preset::new("DN32-T35-L200", 35.0, 34.0, 200.0),
    Preset::new("DN40-T40-L250", 40.0, 42.0, 250.0),
    Preset::new("DN50-T45-L300", 45.0, 49.0, 300.0),
    Preset::new("DN65-T50-L350", 50.0, 60.0, 350.0),
];

/// U-mold presets, smallest pipe first
pub const SADDLE_PRESETS: [Preset; 6] = [
    Preset::new("U-DN20-T30-L120", 30.0, 21.0, 120.0),
    Preset::new("U-DN25-T35-L180", 35.0, 27.0, 180.0),
    Preset::new("U-DN32-T40-L220", 40.0, 34.0, 220.0),
    Preset::new("U-DN40-T45-L280", 45.0, 42.0, 280.0),
    Preset::new("U-DN50-T50-L320", 50.0, 49.0, 320.0),
    Preset::new("U-DN65-T55-L380", 55.0, 60.0, 380.0),
];

/// Quick-select wall thicknesses (mm)
pub const THICKNESS_OPTIONS_MM: [f64; 12] = [
    20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Quick-select pipe outer diameters (mm), DN15 through DN300
pub const OD_OPTIONS_MM: [f64; 14] = [
    21.0, 27.0, 34.0, 42.0, 49.0, 60.0, 76.0, 89.0, 114.0, 140.0, 168.0, 219.0, 273.0, 324.0,
];

/// Quick-select cushion lengths (mm)
pub const LENGTH_OPTIONS_MM: [f64; 12] = [
    50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 400.0, 500.0, 600.0, 800.0, 1000.0, 1200.0,
];

// Upper-cased name -> (mold, preset)
static PRESET_INDEX: Lazy<HashMap<String, (MoldType, &'static Preset)>> = Lazy::new(|| {
    MoldType::ALL
        .iter()
        .flat_map(|&mold| presets_for(mold).iter().map(move |p| (mold, p)))
        .map(|(mold, p)| (p.name.to_ascii_uppercase(), (mold, p)))
        .collect()
});

/// Presets offered for a mold type.
pub fn presets_for(mold: MoldType) -> &'static [Preset] {
    match mold {
        MoldType::Circular => &CIRCULAR_PRESETS,
        MoldType::Saddle => &SADDLE_PRESETS,
    }
}

/// Look up a preset by name (case-insensitive) across both tables.
///
/// ```rust
/// use cushion_core::calculations::MoldType;
/// use cushion_core::presets::find_preset;
///
/// let (mold, preset) = find_preset("u-dn40-t45-l280").unwrap();
/// assert_eq!(mold, MoldType::Saddle);
/// assert_eq!(preset.length_mm, 280.0);
/// ```
pub fn find_preset(name: &str) -> CalcResult<(MoldType, &'static Preset)> {
    PRESET_INDEX
        .get(&name.trim().to_ascii_uppercase())
        .copied()
        .ok_or_else(|| CalcError::preset_not_found(name.trim()))
}
