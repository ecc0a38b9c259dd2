//! Property-based tests for the core math and grid helpers.

use proptest::prelude::*;

use physicalc_core::compute_target_physique;
use physicalc_core::constants::{BODY_FAT, IMPERIAL_HEIGHT, METRIC_HEIGHT, NORMALIZED_FFMI};
use physicalc_core::units::{cm_to_inches, convert_height, inches_to_cm, snap_to_step};
use physicalc_core::{SliderConfig, UnitSystem};

fn domains() -> impl Strategy<Value = SliderConfig> {
    prop_oneof![
        Just(METRIC_HEIGHT),
        Just(IMPERIAL_HEIGHT),
        Just(BODY_FAT),
        Just(NORMALIZED_FFMI),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// lean + fat == total within 1e-9 relative tolerance over the whole
    /// supported domain, and neither mass goes negative.
    #[test]
    fn masses_balance(
        height_cm in 152.0..=213.0f64,
        body_fat in 5.0..=35.0f64,
        ffmi in 15.0..=30.0f64,
    ) {
        let r = compute_target_physique(height_cm, body_fat, ffmi);
        let sum = r.lean_mass_kg + r.fat_mass_kg;
        let tolerance = 1e-9 * r.total_weight_kg.abs().max(1.0);
        prop_assert!((sum - r.total_weight_kg).abs() <= tolerance);
        prop_assert!(r.lean_mass_kg >= 0.0);
        prop_assert!(r.fat_mass_kg >= 0.0);
    }

    /// Inch/cm conversions are mutual inverses.
    #[test]
    fn conversions_invert(x in 1e-3..1e6f64) {
        prop_assert!((cm_to_inches(inches_to_cm(x)) - x).abs() <= 1e-12 * x);
        prop_assert!((inches_to_cm(cm_to_inches(x)) - x).abs() <= 1e-12 * x);
    }

    /// Snapping is idempotent and lands congruent to `min` modulo `step`.
    #[test]
    fn snap_idempotent_and_grid_aligned(
        value in -1000.0..1000.0f64,
        min in -100.0..100.0f64,
        step in 0.01..10.0f64,
    ) {
        let once = snap_to_step(value, min, step);
        let twice = snap_to_step(once, min, step);
        prop_assert!((once - twice).abs() <= 1e-9 * once.abs().max(1.0));

        let offset = (once - min) / step;
        prop_assert!((offset - offset.round()).abs() < 1e-6);
    }

    /// The snap-then-clamp funnel only ever yields in-range on-grid values.
    #[test]
    fn propose_accepts_anything(domain in domains(), raw in -500.0..800.0f64) {
        let v = domain.propose(raw);
        prop_assert!(domain.accepts(v), "{raw} proposed to off-grid {v}");
    }

    /// A unit toggle and back lands within one coarse grid cell of where
    /// it started (the inch grid is 1.27 cm, plus the 1 cm metric snap).
    #[test]
    fn height_toggle_round_trip_is_tight(cm in 152.0..=213.0f64) {
        let start = METRIC_HEIGHT.propose(cm);
        let inches = convert_height(start, UnitSystem::Metric, UnitSystem::Imperial);
        prop_assert!(IMPERIAL_HEIGHT.accepts(inches));
        let back = convert_height(inches, UnitSystem::Imperial, UnitSystem::Metric);
        prop_assert!(METRIC_HEIGHT.accepts(back));
        prop_assert!((back - start).abs() <= 1.5, "{start} -> {inches} -> {back}");
    }
}
