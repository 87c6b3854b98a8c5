//! Life Runtime
//!
//! Drives the viewer: owns the animation-loop lifecycle and runs each frame
//! as advance(s) → decode → render → profile → reschedule.

pub mod controller;
pub mod error;
pub mod scheduler;

pub use controller::SimulationController;
pub use error::ControllerError;
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
