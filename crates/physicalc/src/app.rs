//! Application entry point and dispatch.

use anyhow::Result;

use physicalc_core::constants::{BODY_FAT, NORMALIZED_FFMI};
use physicalc_core::units::inches_to_cm;
use physicalc_core::{
    compute_target_physique, FfmiCategory, PlanError, SliderConfig, UnitSystem,
};
use physicalc_tui::format::{format_body_fat, format_ffmi, format_height, format_weight};
use physicalc_tui::PlannerApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "physicalc", &mut std::io::stdout());
        return Ok(());
    }

    validate(config)?;

    if config.tui {
        run_tui(config)
    } else {
        run_cli(config)
    }
}

/// Validate flag values against the input domains. The TUI cannot produce
/// out-of-range values, but flags can.
fn validate(config: &AppConfig) -> Result<(), PlanError> {
    let units = config.unit_system();
    check_range("height", config.height_or_default(), units.height_domain())?;
    check_range("body-fat", config.body_fat, BODY_FAT)?;
    check_range("ffmi", config.ffmi, NORMALIZED_FFMI)?;
    Ok(())
}

fn check_range(name: &'static str, value: f64, domain: SliderConfig) -> Result<(), PlanError> {
    if value < domain.min || value > domain.max {
        return Err(PlanError::OutOfRange {
            name,
            value,
            min: domain.min,
            max: domain.max,
        });
    }
    Ok(())
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let units = config.unit_system();
    let height = config.height_or_default();
    let height_cm = match units {
        UnitSystem::Metric => height,
        UnitSystem::Imperial => inches_to_cm(height),
    };

    tracing::debug!(height_cm, config.body_fat, config.ffmi, "computing target");
    let result = compute_target_physique(height_cm, config.body_fat, config.ffmi);
    let category = FfmiCategory::classify(config.ffmi);

    if config.json {
        let payload = serde_json::json!({
            "height_cm": height_cm,
            "body_fat_percent": config.body_fat,
            "normalized_ffmi": config.ffmi,
            "category": category.label(),
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if config.quiet {
        let weight = match units {
            UnitSystem::Metric => result.total_weight_kg,
            UnitSystem::Imperial => physicalc_core::units::kg_to_lbs(result.total_weight_kg),
        };
        println!("{weight:.1}");
    } else {
        println!(
            "Target physique for {} at {} body fat, FFMI {} ({}):",
            format_height(height, units),
            format_body_fat(config.body_fat),
            format_ffmi(config.ffmi),
            category.label(),
        );
        println!("  total weight: {}", format_weight(result.total_weight_kg, units));
        println!("  lean mass:    {}", format_weight(result.lean_mass_kg, units));
        println!("  fat mass:     {}", format_weight(result.fat_mass_kg, units));
        if config.verbose {
            println!("  band:         {}", category.description());
        }
    }

    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let units = config.unit_system();
    let mut app = PlannerApp::new(
        units,
        config.height_or_default(),
        config.body_fat,
        config.ffmi,
    );
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_from(args: &[&str]) -> AppConfig {
        <AppConfig as Parser>::try_parse_from(args).unwrap()
    }

    #[test]
    fn validate_accepts_defaults() {
        let config = config_from(&["physicalc"]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_height() {
        let config = config_from(&["physicalc", "--height", "300"]);
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, PlanError::OutOfRange { name: "height", .. }));
    }

    #[test]
    fn validate_uses_imperial_domain_with_imperial_flag() {
        // 70 in is fine imperial, nonsense metric.
        let config = config_from(&["physicalc", "--imperial", "--height", "70"]);
        assert!(validate(&config).is_ok());

        let config = config_from(&["physicalc", "--height", "70"]);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_body_fat_and_ffmi() {
        let config = config_from(&["physicalc", "--body-fat", "50"]);
        assert!(matches!(
            validate(&config).unwrap_err(),
            PlanError::OutOfRange { name: "body-fat", .. }
        ));

        let config = config_from(&["physicalc", "--ffmi", "40"]);
        assert!(matches!(
            validate(&config).unwrap_err(),
            PlanError::OutOfRange { name: "ffmi", .. }
        ));
    }
}
