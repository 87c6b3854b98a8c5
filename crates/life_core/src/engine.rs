//! Engine contract
//!
//! The automaton engine owns the grid state and the transition rule.
//! The viewer never implements either; it drives an engine through this
//! trait and reads its cells back through [`CellView`](crate::CellView).

use crate::grid::GridDims;

/// Cellular-automaton engine driven by the viewer.
///
/// All operations are infallible for valid inputs. Out-of-range rows and
/// columns passed to the editing operations are the engine's to reject or
/// clamp.
pub trait Engine {
    /// Grid width in cells, fixed for the lifetime of the engine.
    fn width(&self) -> u32;

    /// Grid height in cells, fixed for the lifetime of the engine.
    fn height(&self) -> u32;

    fn dims(&self) -> GridDims {
        GridDims::new(self.width(), self.height())
    }

    /// Advance the automaton by one generation.
    fn advance(&mut self);

    /// Row-major bit-packed cells, least-significant bit first, at least
    /// `⌈width·height/8⌉` bytes long.
    ///
    /// The slice borrows the engine, so it cannot outlive the next call that
    /// may mutate (and relocate) the underlying buffer.
    fn cell_bytes(&self) -> &[u8];

    fn toggle_cell(&mut self, row: u32, column: u32);

    fn randomize_cells(&mut self);

    fn kill_all_cells(&mut self);

    /// Stamp a glider around `(row, column)`.
    fn insert_glider(&mut self, row: u32, column: u32);

    /// Stamp a pulsar around `(row, column)`.
    fn insert_pulsar(&mut self, row: u32, column: u32);
}
