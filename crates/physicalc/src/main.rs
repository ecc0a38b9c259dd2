//! physicalc — target-physique planner.

use physicalc_core::constants::exit_codes;
use physicalc_core::PlanError;
use physicalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<PlanError>()
            .map_or(exit_codes::ERROR_GENERIC, errors::handle_error);
        std::process::exit(code);
    }
}
