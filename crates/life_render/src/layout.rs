//! Pixel geometry of the grid

use crate::surface::SurfaceError;
use glam::UVec2;
use life_core::{CellAddress, GridDims};

/// Cell size and grid dimensions, from which every pixel position follows.
///
/// Separator lines sit on multiples of the pitch (`cell_size + 1`); cell
/// `(r, c)` fills the `cell_size` square starting one pixel past its
/// separators. Construction guarantees the whole surface fits in `u32`
/// pixel coordinates, so the accessors below never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    cell_size: u32,
    dims: GridDims,
}

impl GridLayout {
    pub fn new(cell_size: u32, dims: GridDims) -> Result<Self, SurfaceError> {
        let side = |cells: u32| {
            cell_size
                .checked_add(1)
                .and_then(|pitch| pitch.checked_mul(cells))
                .and_then(|px| px.checked_add(1))
        };
        if side(dims.width).is_none() || side(dims.height).is_none() {
            return Err(SurfaceError::LayoutOverflow {
                cell_size,
                width: dims.width,
                height: dims.height,
            });
        }
        Ok(Self { cell_size, dims })
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Distance between adjacent cell origins.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    /// Physical surface size needed to show the whole grid.
    pub fn surface_size(&self) -> UVec2 {
        UVec2::new(
            self.pitch() * self.dims.width + 1,
            self.pitch() * self.dims.height + 1,
        )
    }

    /// Top-left pixel of a cell's fill. `cell` must lie inside the grid.
    #[inline]
    pub fn cell_origin(&self, cell: CellAddress) -> UVec2 {
        UVec2::new(
            cell.column * self.pitch() + 1,
            cell.row * self.pitch() + 1,
        )
    }

    #[inline]
    pub fn cell_extent(&self) -> UVec2 {
        UVec2::splat(self.cell_size)
    }
}
