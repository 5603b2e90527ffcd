//! Incremental candidate tracking for Sudoku grids.
//!
//! This crate provides [`Board`], an N×N grid (N = box size², box sizes 2
//! through 8) that keeps the set of legal candidate values of every blank cell
//! consistent as values are assigned and retracted.
//!
//! # Overview
//!
//! The engine is built from three pieces:
//!
//! - [`Cell`]: one grid position holding an optional value plus index-based
//!   back-references to its three owning constraint groups.
//! - [`ConstraintGroup`]: a row, column, or box — exactly N cells that must
//!   contain each value at most once. Each group maintains its free-value set
//!   (values not yet placed in the group) incrementally.
//! - [`Board`]: owns the cells and the 3N groups, wires them together at
//!   construction, and exposes the only mutation API. A blank cell's
//!   candidates are the intersection of its three groups' free-value sets,
//!   so mutating a cell without updating all three groups would corrupt the
//!   bookkeeping; the group and cell mutators are therefore crate-internal
//!   and only reachable through [`Board::assign`], [`Board::retract`], and
//!   [`Board::change_value`].
//!
//! Every mutation either succeeds atomically or returns a [`BoardError`] and
//! leaves the board exactly as it was.
//!
//! # Examples
//!
//! ```
//! use pencilmark_board::Board;
//! use pencilmark_core::{BoxSize, Coord};
//!
//! let mut board = Board::new(BoxSize::new(3).unwrap());
//!
//! board.assign(Coord::new(0, 0), 5).unwrap();
//!
//! // 5 is no longer a candidate anywhere in row 0, column 0, or the top-left box.
//! assert!(!board.has_candidate(Coord::new(0, 1), 5).unwrap());
//! assert!(!board.has_candidate(Coord::new(1, 1), 5).unwrap());
//! // ...but an unrelated cell still accepts it.
//! assert!(board.has_candidate(Coord::new(4, 4), 5).unwrap());
//!
//! // Retracting restores the candidates exactly.
//! board.retract(Coord::new(0, 0)).unwrap();
//! assert!(board.has_candidate(Coord::new(0, 1), 5).unwrap());
//! ```

pub mod board;
pub mod cell;
pub mod error;
pub mod group;

pub use self::{
    board::Board,
    cell::Cell,
    error::BoardError,
    group::{ConstraintGroup, GroupKind},
};
