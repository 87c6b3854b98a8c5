//! Bit-packed grid decoding
//!
//! Cells are stored one bit each, row-major, 8 cells per byte with the
//! least-significant bit first. A [`CellView`] is a borrowed, read-only
//! window over that buffer; it is rebuilt for every render pass and never
//! retained across engine mutations.

use crate::engine::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Grid size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub width: u32,
    pub height: u32,
}

impl GridDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes needed to hold every cell bit.
    #[inline]
    pub fn packed_len(self) -> usize {
        packed_len(self.cell_count())
    }

    #[inline]
    pub fn contains(self, cell: CellAddress) -> bool {
        cell.row < self.height && cell.column < self.width
    }

    /// Linear row-major index of `cell`.
    #[inline]
    pub fn index_of(self, cell: CellAddress) -> usize {
        cell.row as usize * self.width as usize + cell.column as usize
    }

    /// Clamp a possibly out-of-range (row, column) pair onto the grid.
    pub fn clamp(self, row: i64, column: i64) -> CellAddress {
        let max_row = i64::from(self.height.saturating_sub(1));
        let max_column = i64::from(self.width.saturating_sub(1));
        CellAddress {
            row: row.clamp(0, max_row) as u32,
            column: column.clamp(0, max_column) as u32,
        }
    }
}

/// Number of bytes needed to pack `cells` bits.
#[inline]
pub const fn packed_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

/// A (row, column) pair addressing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: u32,
    pub column: u32,
}

impl CellAddress {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Errors raised while binding a view over a cell buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("cell buffer holds {actual} bytes but a {width}x{height} grid needs {expected}")]
    BufferTooShort {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Whether bit `index % 8` of byte `index / 8` is set.
#[inline]
pub fn bit_is_set(bytes: &[u8], index: usize) -> bool {
    let mask = 1u8 << (index % 8);
    bytes[index / 8] & mask == mask
}

/// Read-only view of a bit-packed grid.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    bytes: &'a [u8],
    dims: GridDims,
}

impl<'a> CellView<'a> {
    /// Wrap `bytes` as a `dims` grid. Trailing bytes past the packed length
    /// are ignored.
    pub fn new(bytes: &'a [u8], dims: GridDims) -> Result<Self, GridError> {
        if dims.width == 0 || dims.height == 0 {
            return Err(GridError::EmptyGrid {
                width: dims.width,
                height: dims.height,
            });
        }

        let expected = dims.packed_len();
        if bytes.len() < expected {
            return Err(GridError::BufferTooShort {
                width: dims.width,
                height: dims.height,
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            bytes: &bytes[..expected],
            dims,
        })
    }

    /// Bind a fresh view over the engine's current cell buffer.
    pub fn bind<E: Engine + ?Sized>(engine: &'a E) -> Result<Self, GridError> {
        Self::new(engine.cell_bytes(), engine.dims())
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Liveness of the cell at linear index `index`.
    ///
    /// Callers bounds-check `index` against the cell count; padding bits in
    /// the last byte are never meaningful.
    #[inline]
    pub fn is_alive_at(&self, index: usize) -> bool {
        debug_assert!(index < self.dims.cell_count());
        bit_is_set(self.bytes, index)
    }

    #[inline]
    pub fn is_alive(&self, cell: CellAddress) -> bool {
        debug_assert!(self.dims.contains(cell), "cell {cell} outside grid");
        self.is_alive_at(self.dims.index_of(cell))
    }

    /// Count live cells, masking out padding bits.
    pub fn live_count(&self) -> usize {
        let cells = self.dims.cell_count();
        let full = cells / 8;
        let mut count: usize = self.bytes[..full]
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum();

        let rem = cells % 8;
        if rem != 0 {
            let mask = (1u8 << rem) - 1;
            count += (self.bytes[full] & mask).count_ones() as usize;
        }
        count
    }

    /// Addresses of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = CellAddress> + 'a {
        let view = *self;
        let width = self.dims.width as usize;
        (0..self.dims.cell_count())
            .filter(move |&index| view.is_alive_at(index))
            .map(move |index| CellAddress::new((index / width) as u32, (index % width) as u32))
    }
}
