//! Core value types for the pencilmark candidate-tracking engine.
//!
//! This crate provides the small, board-independent building blocks shared by
//! the engine and its front ends:
//!
//! - [`ValueSet`]: a set of cell values (1 to 64) backed by a single `u64`
//!   bitmask, used for candidate sets and per-group free-value tracking.
//! - [`BoxSize`]: a validated box size (2 to 8), fixing the grid size at
//!   `box size²` (so 4 to 64 cells per side).
//! - [`Coord`]: a (row, column) grid coordinate.
//!
//! Range validation against a concrete board's dimensions happens at the board
//! API boundary; the types here only enforce their own absolute domains.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{BoxSize, Coord, ValueSet};
//!
//! let box_size = BoxSize::new(3).unwrap();
//! assert_eq!(box_size.grid_size(), 9);
//!
//! // All nine values are free at the start of a classic game.
//! let mut free = ValueSet::full(box_size.grid_size());
//! free.remove(5);
//! assert_eq!(free.len(), 8);
//! assert!(!free.contains(5));
//!
//! // (4, 4) sits in the middle box of a 9x9 grid.
//! assert_eq!(Coord::new(4, 4).box_index(box_size), 4);
//! ```

pub mod box_size;
pub mod coord;
pub mod value_set;

pub use self::{
    box_size::{BoxSize, BoxSizeOutOfRange},
    coord::Coord,
    value_set::ValueSet,
};
