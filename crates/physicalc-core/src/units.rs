//! Unit systems, conversions, and the snap grid.

use crate::constants::{CM_PER_INCH, IMPERIAL_HEIGHT, LBS_PER_KG, METRIC_HEIGHT};
use crate::slider::SliderConfig;

/// Display unit system. Governs the height domain/step and weight
/// formatting only; body-fat and FFMI domains are unit-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Imperial,
    Metric,
}

impl UnitSystem {
    /// The other unit system.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Imperial => Self::Metric,
            Self::Metric => Self::Imperial,
        }
    }

    /// Height slider domain for this unit system.
    #[must_use]
    pub fn height_domain(self) -> SliderConfig {
        match self {
            Self::Imperial => IMPERIAL_HEIGHT,
            Self::Metric => METRIC_HEIGHT,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        }
    }
}

/// Convert inches to centimeters.
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert centimeters to inches. Exact inverse of [`inches_to_cm`] within
/// floating-point tolerance.
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert kilograms to pounds. Display-only; never fed back into the
/// calculation.
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Snap `value` onto the grid anchored at `min` with spacing `step`.
///
/// Ties round half away from zero (`f64::round` semantics); the same rule
/// applies at every snap call site. Idempotent.
#[must_use]
pub fn snap_to_step(value: f64, min: f64, step: f64) -> f64 {
    min + ((value - min) / step).round() * step
}

/// Convert a height between unit systems: convert, snap to the target
/// step, then clamp to the target range, in that order. Clamping first
/// would let a boundary value land off the target grid.
#[must_use]
pub fn convert_height(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    let converted = match to {
        UnitSystem::Metric => inches_to_cm(value),
        UnitSystem::Imperial => cm_to_inches(value),
    };
    to.height_domain().propose(converted)
}
