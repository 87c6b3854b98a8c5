//! Life Services Layer
//!
//! Host-facing plumbing around the viewer: pointer input translation and
//! settings.

pub mod input;
pub mod settings;

pub use input::{CoordinateMapper, Modifiers, PointerEvent, SurfaceRect};
pub use settings::{GridSettings, PlaybackSettings, ProfilerSettings, Settings, SettingsError};
