//! Slider domain configuration and value normalization.

use crate::units::snap_to_step;

/// Domain of one continuous input control.
///
/// The current value is owned by the caller (the control is fully
/// controlled); the config only knows how to normalize proposals onto its
/// grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderConfig {
    /// Normalize a raw proposal: snap to the step grid, then clamp into
    /// `[min, max]`, in that order. Every interaction path funnels through
    /// here, so callers only ever observe in-range, on-grid values.
    #[must_use]
    pub fn propose(&self, raw: f64) -> f64 {
        snap_to_step(raw, self.min, self.step).clamp(self.min, self.max)
    }

    /// Value at a linear ratio across the track: 0 at `min`, 1 at `max`.
    #[must_use]
    pub fn value_at_ratio(&self, t: f64) -> f64 {
        self.propose(self.min + t * (self.max - self.min))
    }

    /// Move `value` by `n` steps along the grid.
    #[must_use]
    pub fn step_by(&self, value: f64, n: i32) -> f64 {
        self.propose(value + f64::from(n) * self.step)
    }

    /// Fill ratio of `value` across the track, clamped to `[0, 1]`.
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Whether `value` lies in range and on the grid, within tolerance.
    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        if value < self.min - 1e-9 || value > self.max + 1e-9 {
            return false;
        }
        let offset = (value - self.min) / self.step;
        (offset - offset.round()).abs() < 1e-6
    }
}
