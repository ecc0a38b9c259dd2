//! Unit-aware display formatting.

use physicalc_core::units::kg_to_lbs;
use physicalc_core::UnitSystem;

/// Format a weight in kilograms for display: one decimal, converted to
/// pounds in imperial mode.
#[must_use]
pub fn format_weight(kg: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{kg:.1} kg"),
        UnitSystem::Imperial => format!("{:.1} lbs", kg_to_lbs(kg)),
    }
}

/// Format a height given in the active display unit: bare centimeter
/// integer in metric, feet and inches in imperial.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_height(value: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{} cm", value.round() as i64),
        UnitSystem::Imperial => format_feet_inches(value),
    }
}

/// Feet-and-inches rendering with a half-inch glyph when the fractional
/// part is 0.5 (within 0.01, the same tolerance the original UI used).
#[allow(clippy::cast_possible_truncation)]
fn format_feet_inches(total_inches: f64) -> String {
    let whole = total_inches.floor() as i64;
    let feet = whole / 12;
    let inches = whole % 12;
    let fraction = total_inches - total_inches.floor();
    if (fraction - 0.5).abs() <= 0.01 {
        format!("{feet}'{inches}\u{bd}\"")
    } else {
        format!("{feet}'{inches}\"")
    }
}

/// Format a body-fat percentage.
#[must_use]
pub fn format_body_fat(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Format a normalized FFMI value.
#[must_use]
pub fn format_ffmi(ffmi: f64) -> String {
    format!("{ffmi:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_metric() {
        assert_eq!(format_weight(71.558, UnitSystem::Metric), "71.6 kg");
        assert_eq!(format_weight(62.97, UnitSystem::Metric), "63.0 kg");
    }

    #[test]
    fn weight_imperial() {
        // 71.56 kg * 2.20462 = 157.76 lbs
        assert_eq!(format_weight(71.56, UnitSystem::Imperial), "157.8 lbs");
        assert_eq!(format_weight(0.0, UnitSystem::Imperial), "0.0 lbs");
    }

    #[test]
    fn height_metric_is_a_bare_integer() {
        assert_eq!(format_height(178.0, UnitSystem::Metric), "178 cm");
        assert_eq!(format_height(152.0, UnitSystem::Metric), "152 cm");
    }

    #[test]
    fn height_imperial_feet_and_inches() {
        assert_eq!(format_height(70.0, UnitSystem::Imperial), "5'10\"");
        assert_eq!(format_height(72.0, UnitSystem::Imperial), "6'0\"");
        assert_eq!(format_height(60.0, UnitSystem::Imperial), "5'0\"");
        assert_eq!(format_height(84.0, UnitSystem::Imperial), "7'0\"");
    }

    #[test]
    fn height_imperial_half_inch_glyph() {
        assert_eq!(format_height(70.5, UnitSystem::Imperial), "5'10\u{bd}\"");
        assert_eq!(format_height(60.5, UnitSystem::Imperial), "5'0\u{bd}\"");
        // Slight float drift near the half still shows the glyph.
        assert_eq!(format_height(70.495, UnitSystem::Imperial), "5'10\u{bd}\"");
    }

    #[test]
    fn body_fat_and_ffmi() {
        assert_eq!(format_body_fat(12.0), "12.0%");
        assert_eq!(format_body_fat(7.5), "7.5%");
        assert_eq!(format_ffmi(19.878), "19.9");
    }
}
