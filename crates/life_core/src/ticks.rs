//! Ticks-per-frame configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many engine generations run before each render. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct TicksPerFrame(u32);

impl TicksPerFrame {
    pub const ONE: Self = Self(1);

    /// Zero is coerced to 1.
    pub const fn new(ticks: u32) -> Self {
        if ticks == 0 {
            Self::ONE
        } else {
            Self(ticks)
        }
    }

    /// Coerce a numeric control value.
    ///
    /// NaN, infinities and anything below 1 become 1. Fractions round up,
    /// matching a loop that runs while `i < value`.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() || value < 1.0 {
            return Self::ONE;
        }
        let ticks = value.ceil();
        if ticks >= f64::from(u32::MAX) {
            Self(u32::MAX)
        } else {
            Self(ticks as u32)
        }
    }

    /// Parse the text of a UI control, falling back to 1 when it is not a
    /// number.
    pub fn parse_lossy(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) => Self::from_f64(value),
            Err(_) => {
                tracing::debug!(input = text, "unparsable ticks per frame, using 1");
                Self::ONE
            }
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for TicksPerFrame {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u32> for TicksPerFrame {
    fn from(ticks: u32) -> Self {
        Self::new(ticks)
    }
}

impl From<TicksPerFrame> for u32 {
    fn from(ticks: TicksPerFrame) -> Self {
        ticks.0
    }
}

impl From<&str> for TicksPerFrame {
    fn from(text: &str) -> Self {
        Self::parse_lossy(text)
    }
}

impl From<f64> for TicksPerFrame {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

/// Control label, e.g. `"1 tick per frame"` or `"4 ticks per frame"`.
impl fmt::Display for TicksPerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 tick per frame")
        } else {
            write!(f, "{} ticks per frame", self.0)
        }
    }
}
