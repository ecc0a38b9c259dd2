//! Application configuration from CLI flags and environment.

use clap::Parser;
use physicalc_core::UnitSystem;

/// physicalc — target-physique planner.
#[derive(Parser, Debug)]
#[command(name = "physicalc", version, about)]
pub struct AppConfig {
    /// Height in centimeters (inches with --imperial). Defaults to
    /// 178 cm / 70 in.
    #[arg(long, env = "PHYSICALC_HEIGHT")]
    pub height: Option<f64>,

    /// Target body-fat percentage.
    #[arg(long = "body-fat", default_value = "12")]
    pub body_fat: f64,

    /// Target normalized FFMI.
    #[arg(long, default_value = "20")]
    pub ffmi: f64,

    /// Use imperial units (inches, pounds).
    #[arg(long)]
    pub imperial: bool,

    /// Output the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the target weight).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Selected display unit system.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        if self.imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        }
    }

    /// Height flag, or the per-unit default when not given.
    #[must_use]
    pub fn height_or_default(&self) -> f64 {
        self.height.unwrap_or(if self.imperial { 70.0 } else { 178.0 })
    }
}
