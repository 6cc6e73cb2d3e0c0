//! # Cross-Section Geometry
//!
//! Area of the polyurethane cross-section for each mold shape. Lengths are
//! in metres; callers convert from millimetres at the input boundary.
//!
//! ## Circular mold
//!
//! The cushion is an annulus around the pipe:
//!
//! ```text
//! D = od + 2t
//! A = π/4 · (D² − od²)
//! ```
//!
//! ## Saddle (U) mold
//!
//! The outer profile sits between a square of side `a = od + 2t` (flat base
//! and straight walls) and a circle of diameter `a` (rounded top). Both
//! bounding shapes have the pipe bore removed, and the cross-section is
//! taken as the mean of the two material areas:
//!
//! ```text
//! hole            = π/4 · od²
//! square_material = a² − hole
//! circle_material = π/4 · a² − hole
//! A               = (square_material + circle_material) / 2
//! ```
//!
//! Older revisions averaged the full square with the bore circle
//! (`(π/4·od² + a²) / 2`) and never subtracted the bore. That form is not
//! provided.

use std::f64::consts::FRAC_PI_4;

use crate::calculations::MoldType;
use crate::units::{Meters, SquareMeters};

/// Outer dimension of the cushion: diameter for circular molds, square
/// side for saddle molds. Both are `od + 2t`.
pub fn outer_size(thickness: Meters, outer_diameter: Meters) -> Meters {
    outer_diameter + thickness * 2.0
}

/// Annulus area for a circular mold.
///
/// ```rust
/// use cushion_core::calculations::geometry::circular_area;
/// use cushion_core::units::Meters;
///
/// let a = circular_area(Meters(0.030), Meters(0.042));
/// assert!((a.0 - 0.0067858).abs() < 1e-7);
/// ```
pub fn circular_area(thickness: Meters, outer_diameter: Meters) -> SquareMeters {
    let cushion_od = outer_size(thickness, outer_diameter);
    (cushion_od.squared() - outer_diameter.squared()) * FRAC_PI_4
}

/// Averaged square/circle material area for a saddle mold.
pub fn saddle_area(thickness: Meters, outer_diameter: Meters) -> SquareMeters {
    let side = outer_size(thickness, outer_diameter);
    let hole = outer_diameter.squared() * FRAC_PI_4;

    let square_material = side.squared() - hole;
    let circle_material = side.squared() * FRAC_PI_4 - hole;

    (square_material + circle_material) / 2.0
}

/// Cross-sectional area for the given mold shape.
pub fn cross_section_area(mold: MoldType, thickness: Meters, outer_diameter: Meters) -> SquareMeters {
    match mold {
        MoldType::Circular => circular_area(thickness, outer_diameter),
        MoldType::Saddle => saddle_area(thickness, outer_diameter),
    }
}
