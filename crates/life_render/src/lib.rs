//! Life Render System
//!
//! Rasterizes the automaton grid: separator lattice plus one filled square
//! per cell, onto any [`RasterSurface`].

pub mod color;
pub mod layout;
pub mod renderer;
pub mod surface;

pub use glam;

pub use color::{ColorParseError, Palette, Rgba};
pub use layout::GridLayout;
pub use renderer::Renderer;
pub use surface::{GridLine, PixelSurface, RasterSurface, SurfaceError};
