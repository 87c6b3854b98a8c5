//! Edit intents
//!
//! A pointer click resolves to exactly one of these, and each maps to
//! exactly one engine call.

use crate::engine::Engine;
use crate::grid::CellAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    /// Flip a single cell.
    Toggle(CellAddress),
    /// Stamp a glider around the cell.
    Glider(CellAddress),
    /// Stamp a pulsar around the cell.
    Pulsar(CellAddress),
}

impl EditIntent {
    #[inline]
    pub fn cell(self) -> CellAddress {
        match self {
            EditIntent::Toggle(cell) | EditIntent::Glider(cell) | EditIntent::Pulsar(cell) => cell,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EditIntent::Toggle(_) => "toggle",
            EditIntent::Glider(_) => "glider",
            EditIntent::Pulsar(_) => "pulsar",
        }
    }

    /// Forward the edit to the engine.
    pub fn apply<E: Engine + ?Sized>(self, engine: &mut E) {
        match self {
            EditIntent::Toggle(cell) => engine.toggle_cell(cell.row, cell.column),
            EditIntent::Glider(cell) => engine.insert_glider(cell.row, cell.column),
            EditIntent::Pulsar(cell) => engine.insert_pulsar(cell.row, cell.column),
        }
    }
}
