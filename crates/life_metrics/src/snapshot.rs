//! Displayable frame-rate summary

use std::fmt;

/// Latest / mean / min / max frames per second over the profiler window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FpsSnapshot {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Window capacity the aggregates are taken over.
    pub window: usize,
}

impl FpsSnapshot {
    /// Values rounded for display: `[latest, mean, min, max]`.
    pub fn rounded(&self) -> [f64; 4] {
        [self.latest, self.mean, self.min, self.max].map(round_half_up)
    }
}

/// Round to the nearest integer, ties toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    if value.is_finite() {
        (value + 0.5).floor()
    } else {
        value
    }
}

struct Rounded(f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = round_half_up(self.0);
        if value.is_nan() {
            f.write_str("NaN")
        } else if value == f64::INFINITY {
            f.write_str("Infinity")
        } else if value == f64::NEG_INFINITY {
            f.write_str("-Infinity")
        } else {
            // avoid printing "-0"
            write!(f, "{}", value as i64)
        }
    }
}

impl fmt::Display for FpsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames per Second:")?;
        writeln!(f, "latest = {}", Rounded(self.latest))?;
        writeln!(f, "avg of last {} = {}", self.window, Rounded(self.mean))?;
        writeln!(f, "min of last {} = {}", self.window, Rounded(self.min))?;
        write!(f, "max of last {} = {}", self.window, Rounded(self.max))
    }
}
