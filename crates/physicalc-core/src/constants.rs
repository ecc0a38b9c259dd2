//! Input domains and conversion constants.

use crate::slider::SliderConfig;

/// Metric height domain, centimeters.
pub const METRIC_HEIGHT: SliderConfig = SliderConfig {
    min: 152.0,
    max: 213.0,
    step: 1.0,
};

/// Imperial height domain, inches.
pub const IMPERIAL_HEIGHT: SliderConfig = SliderConfig {
    min: 60.0,
    max: 84.0,
    step: 0.5,
};

/// Body-fat percentage domain. The upper bound keeps the weight formula's
/// denominator well away from zero, so the calculator never needs a guard.
pub const BODY_FAT: SliderConfig = SliderConfig {
    min: 5.0,
    max: 35.0,
    step: 0.5,
};

/// Normalized FFMI domain.
pub const NORMALIZED_FFMI: SliderConfig = SliderConfig {
    min: 15.0,
    max: 30.0,
    step: 0.1,
};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram. Display conversion only; never fed back into the
/// calculation.
pub const LBS_PER_KG: f64 = 2.20462;

/// Reference height (meters) the FFMI normalization is anchored to.
pub const FFMI_REFERENCE_HEIGHT_M: f64 = 1.8;

/// Height-correction slope of the FFMI normalization term.
pub const FFMI_HEIGHT_SLOPE: f64 = 6.1;

/// Exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (input flag outside its domain).
    pub const ERROR_CONFIG: i32 = 4;
}
