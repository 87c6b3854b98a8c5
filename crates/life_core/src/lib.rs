//! Life Core
//!
//! Shared vocabulary between the viewer and the automaton engine:
//! - Engine contract consumed by the driver
//! - Bit-packed grid decoding
//! - Cell addresses and edit intents
//! - Ticks-per-frame configuration

pub mod engine;
pub mod grid;
pub mod intent;
pub mod ticks;

pub use engine::Engine;
pub use grid::{packed_len, CellAddress, CellView, GridDims, GridError};
pub use intent::EditIntent;
pub use ticks::TicksPerFrame;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
