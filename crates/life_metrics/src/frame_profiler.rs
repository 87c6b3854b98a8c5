//! Rolling frames-per-second profiler

use super::ring_buffer::RingBuffer;
use crate::snapshot::FpsSnapshot;
use crate::DEFAULT_WINDOW;

/// Tracks the instantaneous frame rate of the last `window` frames.
///
/// Timestamps are host-supplied milliseconds (e.g. the animation-frame
/// timestamp). Aggregates are recomputed over the whole window on every
/// sample; the window is small and bounded.
pub struct FrameProfiler {
    last_timestamp_ms: f64,
    frames: RingBuffer<f64>,
    snapshot: Option<FpsSnapshot>,
}

impl FrameProfiler {
    pub fn new(start_ms: f64) -> Self {
        Self::with_window(start_ms, DEFAULT_WINDOW)
    }

    pub fn with_window(start_ms: f64, window: usize) -> Self {
        Self {
            last_timestamp_ms: start_ms,
            frames: RingBuffer::new(window),
            snapshot: None,
        }
    }

    /// Record a rendered frame at `now_ms`.
    pub fn record(&mut self, now_ms: f64) -> FpsSnapshot {
        let delta = now_ms - self.last_timestamp_ms;
        self.last_timestamp_ms = now_ms;
        self.record_interval(delta)
    }

    /// Record a frame that took `delta_ms`. A zero delta yields an infinite
    /// rate, which is kept and displayed as such.
    pub fn record_interval(&mut self, delta_ms: f64) -> FpsSnapshot {
        let fps = 1000.0 / delta_ms;
        self.frames.push(fps);

        let (min, max) = self.frames.min_max();
        let snapshot = FpsSnapshot {
            latest: fps,
            mean: self.frames.average(),
            min,
            max,
            window: self.frames.capacity(),
        };
        self.snapshot = Some(snapshot);
        snapshot
    }

    /// Statistics as of the last recorded frame.
    pub fn snapshot(&self) -> Option<FpsSnapshot> {
        self.snapshot
    }

    pub fn window_len(&self) -> usize {
        self.frames.len()
    }

    /// Instantaneous rates, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.frames.iter().copied()
    }
}
