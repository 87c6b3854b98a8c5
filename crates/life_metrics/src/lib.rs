//! Life Metrics - rolling frame statistics for the viewer
//!
//! Provides zero-cost abstractions for metrics collection that completely
//! vanish when the `metrics` feature is off.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable metrics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use life_metrics::FrameProfiler;
//!
//! let mut profiler = FrameProfiler::new(0.0);
//! let snapshot = profiler.record(16.0);
//! println!("{snapshot}");
//! ```

mod snapshot;

#[cfg(feature = "metrics")]
mod frame_profiler;
#[cfg(feature = "metrics")]
mod ring_buffer;

pub use snapshot::FpsSnapshot;

#[cfg(feature = "metrics")]
pub use frame_profiler::FrameProfiler;
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;

/// Samples kept by a profiler unless configured otherwise.
pub const DEFAULT_WINDOW: usize = 100;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct FrameProfiler;

#[cfg(not(feature = "metrics"))]
impl FrameProfiler {
    pub fn new(_start_ms: f64) -> Self { Self }
    pub fn with_window(_start_ms: f64, _window: usize) -> Self { Self }
    pub fn record(&mut self, _now_ms: f64) -> FpsSnapshot { FpsSnapshot::default() }
    pub fn record_interval(&mut self, _delta_ms: f64) -> FpsSnapshot { FpsSnapshot::default() }
    pub fn snapshot(&self) -> Option<FpsSnapshot> { None }
    pub fn window_len(&self) -> usize { 0 }
}

#[cfg(not(feature = "metrics"))]
pub struct RingBuffer<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RingBuffer<T> {
    pub fn new(_capacity: usize) -> Self { Self(std::marker::PhantomData) }
    pub fn push(&mut self, _value: T) -> Option<T> { None }
    pub fn len(&self) -> usize { 0 }
    pub fn is_empty(&self) -> bool { true }
}
