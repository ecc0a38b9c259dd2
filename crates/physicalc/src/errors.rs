//! Error handling and exit codes.

use physicalc_core::constants::exit_codes;
use physicalc_core::PlanError;

/// Map a planner error to its process exit code.
#[must_use]
pub fn handle_error(err: &PlanError) -> i32 {
    match err {
        PlanError::OutOfRange { .. } => exit_codes::ERROR_CONFIG,
        PlanError::Terminal(_) => exit_codes::ERROR_GENERIC,
    }
}
