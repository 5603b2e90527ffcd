//! A single grid position.

use pencilmark_core::Coord;

use crate::group::GroupId;

/// One cell of a board: a fixed coordinate plus an optional value.
///
/// Cells are owned by their board and carry index-based back-references to
/// the row, column, and box groups that constrain them, established once at
/// board construction. There is no public mutation: setting or clearing a
/// value must update all three owning groups at the same time, so every
/// mutation path goes through [`Board`](crate::Board).
///
/// A cell with a value has no candidates; a blank cell's candidate set is
/// derived from its groups and exposed through
/// [`Board::candidates`](crate::Board::candidates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    value: Option<u8>,
    groups: [GroupId; 3],
}

impl Cell {
    pub(crate) fn new(coord: Coord, groups: [GroupId; 3]) -> Self {
        Self {
            coord,
            value: None,
            groups,
        }
    }

    /// Returns this cell's coordinate.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns the value this cell holds, if any.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Returns `true` if no value is assigned.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.is_none()
    }

    /// Row, column, and box group ids, in that order.
    pub(crate) fn group_ids(&self) -> [GroupId; 3] {
        self.groups
    }

    pub(crate) fn set_value(&mut self, value: u8) {
        debug_assert!(self.value.is_none());
        self.value = Some(value);
    }

    pub(crate) fn clear_value(&mut self) -> Option<u8> {
        self.value.take()
    }
}
