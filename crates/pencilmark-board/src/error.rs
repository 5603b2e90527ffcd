//! Errors reported by the board API.

use pencilmark_core::Coord;

/// An error from a [`Board`](crate::Board) operation.
///
/// Every variant is surfaced to the caller and the board is left in its
/// pre-call state; no partial mutation survives a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A coordinate argument lies outside the grid.
    #[display("coordinate {coord} is outside the {size}x{size} grid")]
    CoordOutOfRange {
        /// The rejected coordinate.
        coord: Coord,
        /// The grid side length.
        size: u8,
    },
    /// A value argument lies outside the grid's value range.
    #[display("value {value} is out of range 1-{max}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u8,
        /// The largest legal value on this grid.
        max: u8,
    },
    /// A row, column, or box index lies outside the grid.
    #[display("group index {index} is outside the 0-{} range", size - 1)]
    GroupIndexOutOfRange {
        /// The rejected index.
        index: u8,
        /// The grid side length (also the number of groups of each kind).
        size: u8,
    },
    /// The target cell already holds a value.
    #[display("cell {coord} already holds {value}")]
    CellAlreadyFilled {
        /// The target coordinate.
        coord: Coord,
        /// The value the cell currently holds.
        value: u8,
    },
    /// The requested value is already used in the cell's row, column, or box.
    #[display("value {value} is already used in the row, column, or box of cell {coord}")]
    ValueNotCandidate {
        /// The target coordinate.
        coord: Coord,
        /// The rejected value.
        value: u8,
    },
}
