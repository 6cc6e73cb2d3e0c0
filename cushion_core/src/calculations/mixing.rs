//! # Mixing
//!
//! Converts the finished cushion mass into the mass of liquid to pour and
//! splits it into the two reacting components.
//!
//! The factors are fixed process constants, not
//! [`CalculatorSettings`](crate::settings::CalculatorSettings) fields.

use serde::{Deserialize, Serialize};

use crate::units::Kilograms;

/// Multiplier applied to the finished mass (the "20 % loss" allowance).
pub const PROCESS_LOSS_FACTOR: f64 = 0.8;

/// Polyol parts by mass
pub const POLYOL_PARTS: f64 = 1.0;

/// Isocyanate parts by mass
pub const ISOCYANATE_PARTS: f64 = 1.2;

/// POLYOL_PARTS + ISOCYANATE_PARTS
pub const TOTAL_PARTS: f64 = 2.2;

/// Mass to pour for a given finished mass.
pub fn required_mass(finished: Kilograms) -> Kilograms {
    finished * PROCESS_LOSS_FACTOR
}

/// Two-component split of a pour mass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChemicalSplit {
    /// Polyol (component A)
    pub polyol: Kilograms,
    /// Isocyanate (component B)
    pub isocyanate: Kilograms,
}

impl ChemicalSplit {
    /// Split `required` at POLYOL_PARTS : ISOCYANATE_PARTS.
    pub fn of(required: Kilograms) -> Self {
        let part = required / TOTAL_PARTS;
        ChemicalSplit {
            polyol: part * POLYOL_PARTS,
            isocyanate: part * ISOCYANATE_PARTS,
        }
    }

    pub fn total(&self) -> Kilograms {
        self.polyol + self.isocyanate
    }
}
