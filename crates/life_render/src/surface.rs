//! Raster surfaces
//!
//! [`RasterSurface`] is the drawing seam: a browser canvas, a GPU texture
//! upload or a plain pixel buffer can sit behind it. [`PixelSurface`] is
//! the in-memory RGBA8 implementation.

use crate::color::Rgba;
use crate::layout::GridLayout;
use glam::UVec2;
use life_core::GridDims;
use thiserror::Error;

/// A one-pixel separator line spanning the whole surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLine {
    /// Column `x`, top to bottom.
    Vertical(u32),
    /// Row `y`, left to right.
    Horizontal(u32),
}

/// 2D drawing target mutated in place by the renderer.
pub trait RasterSurface {
    /// Physical size in pixels.
    fn size(&self) -> UVec2;

    fn stroke_line(&mut self, line: GridLine, color: Rgba);

    /// Fill `extent` pixels from `origin`, clipped to the surface.
    fn fill_rect(&mut self, origin: UVec2, extent: UVec2, color: Rgba);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("surface dimensions must be non-zero, got {width}x{height}")]
    Empty { width: u32, height: u32 },

    #[error("surface is {actual} pixels but the grid needs {required}")]
    TooSmall { required: UVec2, actual: UVec2 },

    #[error("a {width}x{height} grid of {cell_size}px cells does not fit in u32 pixel coordinates")]
    LayoutOverflow { cell_size: u32, width: u32, height: u32 },

    #[error("cell view is {view:?} but the layout was built for {layout:?}")]
    ViewMismatch { layout: GridDims, view: GridDims },
}

/// RGBA8 pixel buffer, row-major, ready to blit into a canvas `ImageData`
/// or upload as a texture.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    size: UVec2,
    pixels: Vec<Rgba>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::Empty { width, height });
        }
        Ok(Self {
            size: UVec2::new(width, height),
            pixels: vec![Rgba::WHITE; width as usize * height as usize],
        })
    }

    /// A surface sized exactly for `layout`.
    pub fn for_layout(layout: &GridLayout) -> Result<Self, SurfaceError> {
        let size = layout.surface_size();
        Self::new(size.x, size.y)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        Some(self.pixels[self.offset(x, y)])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.x as usize + x as usize
    }
}

impl RasterSurface for PixelSurface {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn stroke_line(&mut self, line: GridLine, color: Rgba) {
        match line {
            GridLine::Vertical(x) => self.fill_rect(UVec2::new(x, 0), UVec2::new(1, self.size.y), color),
            GridLine::Horizontal(y) => self.fill_rect(UVec2::new(0, y), UVec2::new(self.size.x, 1), color),
        }
    }

    fn fill_rect(&mut self, origin: UVec2, extent: UVec2, color: Rgba) {
        let end = origin.saturating_add(extent).min(self.size);
        if origin.x >= end.x || origin.y >= end.y {
            return;
        }

        let stride = self.size.x as usize;
        let (x0, x1) = (origin.x as usize, end.x as usize);
        for y in origin.y as usize..end.y as usize {
            self.pixels[y * stride + x0..y * stride + x1].fill(color);
        }
    }
}
