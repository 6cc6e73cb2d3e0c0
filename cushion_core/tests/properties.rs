//! Property-based tests for the cushion pipeline using proptest.
//!
//! Covers: output sign and finiteness, the mass chain between rounded
//! fields, the chemical split sum, idempotence, rejection of
//! non-positive dimensions, and extreme magnitudes.

use cushion_core::calculations::cushion::analyze;
use cushion_core::calculations::{calculate, round_to, CushionInput, MoldType};
use proptest::prelude::*;

fn mold_strategy() -> impl Strategy<Value = MoldType> {
    prop_oneof![Just(MoldType::Circular), Just(MoldType::Saddle)]
}

fn input_strategy() -> impl Strategy<Value = CushionInput> {
    (
        mold_strategy(),
        1.0f64..200.0,
        5.0f64..700.0,
        10.0f64..3000.0,
        20.0f64..1200.0,
    )
        .prop_map(|(mold_type, t, od, l, rho)| CushionInput {
            mold_type,
            thickness_mm: t,
            outer_diameter_mm: od,
            length_mm: l,
            density_kg_m3: rho,
        })
}

/// Subnormal, tiny, ordinary and near-overflow magnitudes.
fn magnitude_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1e-320f64..1e-300,
        1e-12f64..1e-3,
        1.0f64..1e3,
        1e100f64..1e300,
        Just(f64::MAX),
    ]
}

fn extreme_input_strategy() -> impl Strategy<Value = CushionInput> {
    (
        mold_strategy(),
        magnitude_strategy(),
        magnitude_strategy(),
        magnitude_strategy(),
        magnitude_strategy(),
    )
        .prop_map(|(mold_type, t, od, l, rho)| CushionInput {
            mold_type,
            thickness_mm: t,
            outer_diameter_mm: od,
            length_mm: l,
            density_kg_m3: rho,
        })
}

// ── Output sanity ────────────────────────────────────────────────────

proptest! {
    /// Every field is finite and non-negative for positive inputs.
    #[test]
    fn outputs_non_negative(input in input_strategy()) {
        let r = calculate(&input).unwrap();
        for v in [r.area_m2, r.volume_m3, r.finished_mass_kg, r.required_mass_kg, r.polyol_kg, r.isocyanate_kg] {
            prop_assert!(v.is_finite());
            prop_assert!(v >= 0.0);
        }
    }

    /// Rounded components add back to the rounded pour within 0.01 kg.
    #[test]
    fn split_sums_to_required(input in input_strategy()) {
        let r = calculate(&input).unwrap();
        let diff = (r.polyol_kg + r.isocyanate_kg - r.required_mass_kg).abs();
        prop_assert!(diff <= 0.01 + 1e-9, "diff {}", diff);
    }

    /// Rounded masses come from unrounded intermediates.
    #[test]
    fn mass_chain_matches_breakdown(input in input_strategy()) {
        let b = analyze(&input).unwrap();
        let r = b.rounded();
        prop_assert_eq!(r.finished_mass_kg, round_to(b.volume.0 * input.density_kg_m3, 2));
        prop_assert_eq!(r.required_mass_kg, round_to(b.finished_mass.0 * 0.8, 2));
    }

    /// Saddle material always exceeds the pure annulus.
    #[test]
    fn saddle_area_exceeds_circular(input in input_strategy()) {
        let c = analyze(&input.with_mold(MoldType::Circular)).unwrap();
        let s = analyze(&input.with_mold(MoldType::Saddle)).unwrap();
        prop_assert!(s.area.0 > c.area.0);
    }

    /// Same input, bit-identical output.
    #[test]
    fn calculate_is_idempotent(input in input_strategy()) {
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        prop_assert_eq!(a.area_m2.to_bits(), b.area_m2.to_bits());
        prop_assert_eq!(a.volume_m3.to_bits(), b.volume_m3.to_bits());
        prop_assert_eq!(a.required_mass_kg.to_bits(), b.required_mass_kg.to_bits());
        prop_assert_eq!(a.polyol_kg.to_bits(), b.polyol_kg.to_bits());
    }
}

// ── Rejection ────────────────────────────────────────────────────────

proptest! {
    /// Extreme magnitudes either compute to finite numbers or are rejected
    /// as invalid input; never NaN or infinity.
    #[test]
    fn extreme_magnitudes_finite_or_rejected(input in extreme_input_strategy()) {
        match calculate(&input) {
            Ok(r) => {
                for v in [r.area_m2, r.volume_m3, r.finished_mass_kg, r.required_mass_kg, r.polyol_kg, r.isocyanate_kg] {
                    prop_assert!(v.is_finite(), "{} from {:?}", v, input);
                    prop_assert!(v >= 0.0);
                }
            }
            Err(err) => prop_assert_eq!(err.error_code(), "INVALID_INPUT"),
        }
    }

    /// A subnormal wall vanishes against any real pipe, leaving a circular
    /// mold with no cross-section.
    #[test]
    fn subnormal_thickness_rejected(
        input in input_strategy(),
        t in 1e-320f64..1e-300,
    ) {
        let mut input = input.with_mold(MoldType::Circular);
        input.thickness_mm = t;
        let err = calculate(&input).unwrap_err();
        prop_assert_eq!(err.error_code(), "INVALID_INPUT");
        prop_assert_eq!(err.field(), Some("thickness_mm"));
    }

    /// Non-positive thickness or OD never yields a number.
    #[test]
    fn non_positive_dimensions_rejected(
        input in input_strategy(),
        bad in -100.0f64..=0.0,
        which in 0usize..4,
    ) {
        let mut input = input;
        let field = match which {
            0 => { input.thickness_mm = bad; "thickness_mm" }
            1 => { input.outer_diameter_mm = bad; "outer_diameter_mm" }
            2 => { input.length_mm = bad; "length_mm" }
            _ => { input.density_kg_m3 = bad; "density_kg_m3" }
        };
        let err = calculate(&input).unwrap_err();
        prop_assert_eq!(err.error_code(), "INVALID_INPUT");
        prop_assert_eq!(err.field(), Some(field));
    }
}
