//! Error type for the planner.

use thiserror::Error;

/// Errors surfaced by the planner. Interactive input has no error path
/// (everything is snapped and clamped); these cover the CLI boundary and
/// the terminal itself.
#[derive(Debug, Error)]
pub enum PlanError {
    /// An input flag is outside its supported domain.
    #[error("{name} {value} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Terminal I/O failure while running the TUI.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_flag() {
        let err = PlanError::OutOfRange {
            name: "height",
            value: 300.0,
            min: 152.0,
            max: 213.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("height"));
        assert!(msg.contains("300"));
        assert!(msg.contains("[152, 213]"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: PlanError = io.into();
        assert!(matches!(err, PlanError::Terminal(_)));
    }
}
