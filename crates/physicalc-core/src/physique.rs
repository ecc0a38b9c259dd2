//! Target-physique math.
//!
//! Inverts the normalized-FFMI formula: given a height, a target body-fat
//! percentage, and a target normalized FFMI, solve for the lean mass and
//! total weight that produce it.
//!
//! FFMI is lean mass over height squared; the normalized form adds
//! `6.1 * (1.8 - height)` so lifters of different heights compare against
//! a 1.8 m reference.

use serde::Serialize;

use crate::constants::{FFMI_HEIGHT_SLOPE, FFMI_REFERENCE_HEIGHT_M};

/// Computed target masses, all in kilograms.
///
/// `total_weight_kg` always equals `lean_mass_kg + fat_mass_kg` within
/// floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysiqueResult {
    pub total_weight_kg: f64,
    pub lean_mass_kg: f64,
    pub fat_mass_kg: f64,
}

/// Compute the target physique for a height in centimeters, a body-fat
/// percentage, and a target normalized FFMI.
///
/// Pure and total for `height_cm > 0` and `body_fat_percent < 100`. Inputs
/// outside the supported domain are not special-cased; they degrade
/// mathematically (bounds are enforced upstream by the input controls and
/// CLI validation).
#[must_use]
pub fn compute_target_physique(
    height_cm: f64,
    body_fat_percent: f64,
    normalized_ffmi: f64,
) -> PhysiqueResult {
    let height_m = height_cm / 100.0;
    // De-normalize back to the raw FFMI at this height.
    let ffmi = normalized_ffmi - FFMI_HEIGHT_SLOPE * (FFMI_REFERENCE_HEIGHT_M - height_m);
    let lean_mass_kg = ffmi * height_m * height_m;
    let total_weight_kg = lean_mass_kg / (1.0 - body_fat_percent / 100.0);
    PhysiqueResult {
        total_weight_kg,
        lean_mass_kg,
        fat_mass_kg: total_weight_kg - lean_mass_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        // 178 cm, 12% body fat, normalized FFMI 20:
        // ffmi = 20 - 6.1 * 0.02 = 19.878, lean = 19.878 * 1.78^2 = 62.98.
        let r = compute_target_physique(178.0, 12.0, 20.0);
        assert!((r.lean_mass_kg - 62.98).abs() < 0.01, "{}", r.lean_mass_kg);
        assert!(
            (r.total_weight_kg - 71.57).abs() < 0.05,
            "{}",
            r.total_weight_kg
        );
        assert!((r.fat_mass_kg - 8.59).abs() < 0.05, "{}", r.fat_mass_kg);
    }

    #[test]
    fn masses_balance() {
        let r = compute_target_physique(190.0, 25.0, 27.5);
        assert!((r.lean_mass_kg + r.fat_mass_kg - r.total_weight_kg).abs() < 1e-9);
    }

    #[test]
    fn reference_height_needs_no_correction() {
        // At exactly 1.8 m the normalization term vanishes.
        let r = compute_target_physique(180.0, 10.0, 20.0);
        assert!((r.lean_mass_kg - 20.0 * 1.8 * 1.8).abs() < 1e-9);
    }

    #[test]
    fn zero_body_fat_means_all_lean() {
        let r = compute_target_physique(175.0, 0.0, 18.0);
        assert!((r.total_weight_kg - r.lean_mass_kg).abs() < 1e-9);
        assert!(r.fat_mass_kg.abs() < 1e-9);
    }

    #[test]
    fn taller_needs_more_lean_mass_for_same_ffmi() {
        let short = compute_target_physique(160.0, 15.0, 22.0);
        let tall = compute_target_physique(200.0, 15.0, 22.0);
        assert!(tall.lean_mass_kg > short.lean_mass_kg);
    }

    #[test]
    fn serializes_to_json() {
        let r = compute_target_physique(178.0, 12.0, 20.0);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("total_weight_kg"));
        assert!(json.contains("lean_mass_kg"));
        assert!(json.contains("fat_mass_kg"));
    }
}
