//! The candidate-tracking board.

use pencilmark_core::{BoxSize, Coord, ValueSet};

use crate::{
    cell::Cell,
    error::BoardError,
    group::{ConstraintGroup, GroupId, GroupKind},
};

/// An N×N grid that keeps per-cell candidate sets consistent under mutation.
///
/// The board owns the N×N cells and the 3N constraint groups (N rows, N
/// columns, N boxes) and is the only way to mutate either. Assigning a value
/// removes it from the free-value sets of the cell's three owning groups;
/// retracting returns it. A blank cell's candidates are the intersection of
/// those three free-value sets, so they are always current without any
/// rescanning.
///
/// All mutation methods validate their arguments and leave the board
/// untouched on error. The board is a purely in-memory, single-threaded
/// structure: mutation requires `&mut self`, which is exactly the exclusive
/// access the three-group update needs.
///
/// # Examples
///
/// ```
/// use pencilmark_board::Board;
/// use pencilmark_core::{BoxSize, Coord};
///
/// let mut board = Board::new(BoxSize::new(2).unwrap());
/// assert_eq!(board.size(), 4);
///
/// board.assign(Coord::new(0, 0), 1).unwrap();
/// assert_eq!(board.cell(Coord::new(0, 0)).unwrap().value(), Some(1));
///
/// // 1 is used up for the first row, first column, and top-left box.
/// assert!(!board.has_candidate(Coord::new(0, 3), 1).unwrap());
/// assert!(!board.has_candidate(Coord::new(3, 0), 1).unwrap());
/// assert!(!board.has_candidate(Coord::new(1, 1), 1).unwrap());
/// assert!(board.has_candidate(Coord::new(2, 2), 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    box_size: BoxSize,
    cells: Vec<Cell>,
    groups: Vec<ConstraintGroup>,
}

impl Board {
    /// Creates an all-blank board where every cell's candidate set is the
    /// full value range.
    #[must_use]
    pub fn new(box_size: BoxSize) -> Self {
        let size = box_size.grid_size();
        let n = usize::from(size);

        let mut cells = Vec::with_capacity(n * n);
        for row in 0..size {
            for col in 0..size {
                let coord = Coord::new(row, col);
                let groups = [
                    GroupId::new(usize::from(row)),
                    GroupId::new(n + usize::from(col)),
                    GroupId::new(2 * n + usize::from(coord.box_index(box_size))),
                ];
                cells.push(Cell::new(coord, groups));
            }
        }

        let mut groups = Vec::with_capacity(3 * n);
        for index in 0..size {
            let members = (0..size).map(|col| Coord::new(index, col)).collect();
            groups.push(ConstraintGroup::new(GroupKind::Row, index, members, size));
        }
        for index in 0..size {
            let members = (0..size).map(|row| Coord::new(row, index)).collect();
            groups.push(ConstraintGroup::new(
                GroupKind::Column,
                index,
                members,
                size,
            ));
        }
        for index in 0..size {
            groups.push(ConstraintGroup::new(
                GroupKind::Box,
                index,
                Self::box_members(box_size, index),
                size,
            ));
        }

        Self {
            box_size,
            cells,
            groups,
        }
    }

    /// Member coordinates of box `index`: the block starting at row
    /// `(index / b) % b * b`, column `index % b * b`, spanning b×b cells.
    fn box_members(box_size: BoxSize, index: u8) -> Vec<Coord> {
        let b = box_size.get();
        let top = (index / b) % b * b;
        let left = index % b * b;
        let mut members = Vec::with_capacity(usize::from(box_size.grid_size()));
        for row in top..top + b {
            for col in left..left + b {
                members.push(Coord::new(row, col));
            }
        }
        members
    }

    /// Returns the box size this board was created with.
    #[must_use]
    pub fn box_size(&self) -> BoxSize {
        self.box_size
    }

    /// Returns the grid side length N (= box size²).
    #[must_use]
    pub fn size(&self) -> u8 {
        self.box_size.grid_size()
    }

    /// Resets every cell to blank, rebuilding groups and candidates from
    /// scratch. Destructive; no history is retained.
    pub fn clear(&mut self) {
        *self = Self::new(self.box_size);
    }

    fn check_coord(&self, coord: Coord) -> Result<usize, BoardError> {
        let size = self.size();
        if coord.row() < size && coord.col() < size {
            Ok(usize::from(coord.row()) * usize::from(size) + usize::from(coord.col()))
        } else {
            Err(BoardError::CoordOutOfRange { coord, size })
        }
    }

    fn check_value(&self, value: u8) -> Result<(), BoardError> {
        let max = self.size();
        if (1..=max).contains(&value) {
            Ok(())
        } else {
            Err(BoardError::ValueOutOfRange { value, max })
        }
    }

    /// Intersection of the free-value sets of the cell's three owning groups,
    /// regardless of whether the cell itself holds a value.
    fn free_intersection(&self, cell: &Cell) -> ValueSet {
        let [row, col, boxg] = cell.group_ids();
        self.groups[row.index()].free_values()
            & self.groups[col.index()].free_values()
            & self.groups[boxg.index()].free_values()
    }

    fn candidates_of(&self, cell: &Cell) -> ValueSet {
        if cell.is_blank() {
            self.free_intersection(cell)
        } else {
            ValueSet::EMPTY
        }
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordOutOfRange`] if `coord` lies outside the
    /// grid.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, BoardError> {
        let index = self.check_coord(coord)?;
        Ok(&self.cells[index])
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the values the cell at `coord` could legally hold.
    ///
    /// For a blank cell this is the intersection of the free-value sets of
    /// its row, column, and box; for a filled cell it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordOutOfRange`] if `coord` lies outside the
    /// grid.
    pub fn candidates(&self, coord: Coord) -> Result<ValueSet, BoardError> {
        let index = self.check_coord(coord)?;
        Ok(self.candidates_of(&self.cells[index]))
    }

    /// Returns `true` if `value` is a candidate of the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordOutOfRange`] if `coord` lies outside the
    /// grid, or [`BoardError::ValueOutOfRange`] if `value` is outside 1-N.
    pub fn has_candidate(&self, coord: Coord, value: u8) -> Result<bool, BoardError> {
        let index = self.check_coord(coord)?;
        self.check_value(value)?;
        Ok(self.candidates_of(&self.cells[index]).contains(value))
    }

    /// Assigns `value` to the blank cell at `coord`.
    ///
    /// On success the value is removed from the free-value sets of the
    /// cell's row, column, and box in the same call; the candidate check
    /// beforehand guarantees all three removals succeed, so the operation is
    /// invariant-preserving without needing a rollback path.
    ///
    /// # Errors
    ///
    /// - [`BoardError::CoordOutOfRange`] / [`BoardError::ValueOutOfRange`]
    ///   for arguments outside the grid's domains.
    /// - [`BoardError::CellAlreadyFilled`] if the cell holds a value.
    /// - [`BoardError::ValueNotCandidate`] if `value` is already used in the
    ///   cell's row, column, or box.
    ///
    /// The board is unchanged in every error case.
    pub fn assign(&mut self, coord: Coord, value: u8) -> Result<(), BoardError> {
        let index = self.check_coord(coord)?;
        self.check_value(value)?;

        let cell = &self.cells[index];
        if let Some(held) = cell.value() {
            return Err(BoardError::CellAlreadyFilled { coord, value: held });
        }
        if !self.free_intersection(cell).contains(value) {
            return Err(BoardError::ValueNotCandidate { coord, value });
        }

        let group_ids = cell.group_ids();
        self.cells[index].set_value(value);
        for id in group_ids {
            self.groups[id.index()].take(value);
        }
        Ok(())
    }

    /// Retracts the value of the cell at `coord`, returning it.
    ///
    /// Retracting an already blank cell is a silent no-op returning
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordOutOfRange`] if `coord` lies outside the
    /// grid.
    pub fn retract(&mut self, coord: Coord) -> Result<Option<u8>, BoardError> {
        let index = self.check_coord(coord)?;

        let Some(value) = self.cells[index].value() else {
            return Ok(None);
        };
        let group_ids = self.cells[index].group_ids();
        for id in group_ids {
            self.groups[id.index()].release(value);
        }
        self.cells[index].clear_value();
        Ok(Some(value))
    }

    /// Replaces the value of the cell at `coord`, returning the prior value.
    ///
    /// Equivalent to retract followed by assign, except that legality is
    /// checked up front: freeing the cell's own value adds exactly that value
    /// back to its candidate set, so the new value is reachable iff it is a
    /// current candidate or the prior value itself. A rejected change never
    /// mutates the board. On a blank cell this is a plain assign.
    ///
    /// # Errors
    ///
    /// - [`BoardError::CoordOutOfRange`] / [`BoardError::ValueOutOfRange`]
    ///   for arguments outside the grid's domains.
    /// - [`BoardError::ValueNotCandidate`] if `value` would conflict with the
    ///   cell's row, column, or box once its own prior value is freed.
    pub fn change_value(&mut self, coord: Coord, value: u8) -> Result<Option<u8>, BoardError> {
        let index = self.check_coord(coord)?;
        self.check_value(value)?;

        let cell = &self.cells[index];
        let mut reachable = self.free_intersection(cell);
        if let Some(prior) = cell.value() {
            reachable.insert(prior);
        }
        if !reachable.contains(value) {
            return Err(BoardError::ValueNotCandidate { coord, value });
        }

        let retracted = self.retract(coord)?;
        match self.assign(coord, value) {
            Ok(()) => Ok(retracted),
            Err(err) => unreachable!("pre-validated change of {coord} failed: {err}"),
        }
    }

    fn group_band(&self, kind_offset: usize, index: u8) -> Result<&ConstraintGroup, BoardError> {
        let size = self.size();
        if index < size {
            Ok(&self.groups[kind_offset * usize::from(size) + usize::from(index)])
        } else {
            Err(BoardError::GroupIndexOutOfRange { index, size })
        }
    }

    /// Returns the row group at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::GroupIndexOutOfRange`] if `index` is not below
    /// the grid size.
    pub fn row_group(&self, index: u8) -> Result<&ConstraintGroup, BoardError> {
        self.group_band(0, index)
    }

    /// Returns the column group at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::GroupIndexOutOfRange`] if `index` is not below
    /// the grid size.
    pub fn column_group(&self, index: u8) -> Result<&ConstraintGroup, BoardError> {
        self.group_band(1, index)
    }

    /// Returns the box group at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::GroupIndexOutOfRange`] if `index` is not below
    /// the grid size.
    pub fn box_group(&self, index: u8) -> Result<&ConstraintGroup, BoardError> {
        self.group_band(2, index)
    }

    /// Returns an iterator over the N row groups.
    pub fn rows(&self) -> impl Iterator<Item = &ConstraintGroup> {
        let n = usize::from(self.size());
        self.groups[..n].iter()
    }

    /// Returns an iterator over the N column groups.
    pub fn columns(&self) -> impl Iterator<Item = &ConstraintGroup> {
        let n = usize::from(self.size());
        self.groups[n..2 * n].iter()
    }

    /// Returns an iterator over the N box groups.
    pub fn boxes(&self) -> impl Iterator<Item = &ConstraintGroup> {
        let n = usize::from(self.size());
        self.groups[2 * n..].iter()
    }

    /// Returns an iterator over all 3N groups: rows, then columns, then
    /// boxes.
    pub fn groups(&self) -> impl Iterator<Item = &ConstraintGroup> {
        self.groups.iter()
    }

    /// Returns `true` if every constraint group is complete, i.e. every cell
    /// holds a value (duplicates are structurally impossible under the group
    /// invariant).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.groups.iter().all(ConstraintGroup::is_complete)
    }

    /// Returns `true` if no constraint group contains two cells with the
    /// same value. Blank cells are allowed.
    ///
    /// All mutations go through [`assign`](Self::assign) and
    /// [`retract`](Self::retract), which preserve this by construction; the
    /// check scans the cells directly rather than trusting the free-value
    /// bookkeeping, so it doubles as a defensive cross-check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.groups.iter().all(|group| {
            let mut seen = ValueSet::new();
            for &coord in group.cells() {
                let index = usize::from(coord.row()) * usize::from(self.size())
                    + usize::from(coord.col());
                if let Some(value) = self.cells[index].value() {
                    if seen.contains(value) {
                        return false;
                    }
                    seen.insert(value);
                }
            }
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SOLUTION: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn classic() -> Board {
        Board::new(BoxSize::new(3).unwrap())
    }

    fn small() -> Board {
        Board::new(BoxSize::new(2).unwrap())
    }

    fn solution_value(row: u8, col: u8) -> u8 {
        let index = usize::from(row) * 9 + usize::from(col);
        TEST_SOLUTION.as_bytes()[index] - b'0'
    }

    #[test]
    fn test_new_board_has_all_candidates() {
        let board = small();
        for cell in board.cells() {
            assert!(cell.is_blank());
            assert_eq!(
                board.candidates(cell.coord()).unwrap(),
                ValueSet::full(4),
                "cell {} should start fully open",
                cell.coord()
            );
        }
    }

    #[test]
    fn test_cells_are_row_major() {
        let board = small();
        let coords: Vec<_> = board.cells().map(Cell::coord).collect();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[1], Coord::new(0, 1));
        assert_eq!(coords[4], Coord::new(1, 0));
        assert_eq!(coords.len(), 16);
    }

    #[test]
    fn test_group_counts_and_order() {
        let board = classic();
        assert_eq!(board.rows().count(), 9);
        assert_eq!(board.columns().count(), 9);
        assert_eq!(board.boxes().count(), 9);
        assert_eq!(board.groups().count(), 27);

        // Iterators are restartable over the same stored state.
        assert_eq!(board.groups().count(), 27);

        let kinds: Vec<_> = board.groups().map(ConstraintGroup::kind).collect();
        assert!(kinds[..9].iter().all(|&k| k == GroupKind::Row));
        assert!(kinds[9..18].iter().all(|&k| k == GroupKind::Column));
        assert!(kinds[18..].iter().all(|&k| k == GroupKind::Box));
    }

    #[test]
    fn test_box_wiring() {
        let board = classic();
        let box1 = board.box_group(1).unwrap();
        let expected: Vec<_> = (0..3)
            .flat_map(|row| (3..6).map(move |col| Coord::new(row, col)))
            .collect();
        assert_eq!(box1.cells(), &expected[..]);

        let box8 = board.box_group(8).unwrap();
        assert_eq!(box8.cells()[0], Coord::new(6, 6));
        assert_eq!(box8.cells()[8], Coord::new(8, 8));
    }

    #[test]
    fn test_assign_small_board_boundary() {
        let mut board = small();
        board.assign(Coord::new(0, 0), 1).unwrap();

        // Same row, same column, and box mate all lose the candidate.
        assert!(!board.has_candidate(Coord::new(0, 1), 1).unwrap());
        assert!(!board.has_candidate(Coord::new(1, 0), 1).unwrap());
        assert!(!board.has_candidate(Coord::new(1, 1), 1).unwrap());
        // A cell in a different row, column, and box keeps it.
        assert!(board.has_candidate(Coord::new(2, 2), 1).unwrap());
    }

    #[test]
    fn test_classic_scenario_assign_and_retract() {
        let mut board = classic();
        let corner = Coord::new(0, 0);
        board.assign(corner, 5).unwrap();

        assert!(!board.candidates(Coord::new(0, 1)).unwrap().contains(5));
        // Same box, different row and column.
        assert!(!board.candidates(Coord::new(1, 1)).unwrap().contains(5));
        // Unrelated cell.
        assert!(board.candidates(Coord::new(4, 4)).unwrap().contains(5));

        assert_eq!(board.retract(corner).unwrap(), Some(5));
        assert!(board.candidates(Coord::new(0, 1)).unwrap().contains(5));
        assert_eq!(board.candidates(corner).unwrap(), ValueSet::full(9));
    }

    #[test]
    fn test_filled_cell_has_no_candidates() {
        let mut board = classic();
        let coord = Coord::new(3, 3);
        board.assign(coord, 2).unwrap();
        assert_eq!(board.candidates(coord).unwrap(), ValueSet::EMPTY);
        assert!(!board.has_candidate(coord, 2).unwrap());
    }

    #[test]
    fn test_assign_range_errors() {
        let mut board = small();
        assert_eq!(
            board.assign(Coord::new(4, 0), 1),
            Err(BoardError::CoordOutOfRange {
                coord: Coord::new(4, 0),
                size: 4
            })
        );
        assert_eq!(
            board.assign(Coord::new(0, 0), 0),
            Err(BoardError::ValueOutOfRange { value: 0, max: 4 })
        );
        assert_eq!(
            board.assign(Coord::new(0, 0), 5),
            Err(BoardError::ValueOutOfRange { value: 5, max: 4 })
        );
        // Nothing was mutated.
        assert!(board.cell(Coord::new(0, 0)).unwrap().is_blank());
    }

    #[test]
    fn test_assign_filled_cell_fails() {
        let mut board = small();
        let coord = Coord::new(1, 2);
        board.assign(coord, 3).unwrap();
        assert_eq!(
            board.assign(coord, 4),
            Err(BoardError::CellAlreadyFilled { coord, value: 3 })
        );
        assert_eq!(board.cell(coord).unwrap().value(), Some(3));
    }

    #[test]
    fn test_same_row_duplicate_rejected() {
        let mut board = classic();
        board.assign(Coord::new(0, 0), 5).unwrap();

        let target = Coord::new(0, 1);
        assert_eq!(
            board.assign(target, 5),
            Err(BoardError::ValueNotCandidate {
                coord: target,
                value: 5
            })
        );
        // The rejected target is untouched.
        assert!(board.cell(target).unwrap().is_blank());
        assert!(board.is_valid());
    }

    #[test]
    fn test_retract_blank_is_noop() {
        let mut board = classic();
        assert_eq!(board.retract(Coord::new(0, 0)).unwrap(), None);
        assert_eq!(
            board.retract(Coord::new(9, 0)),
            Err(BoardError::CoordOutOfRange {
                coord: Coord::new(9, 0),
                size: 9
            })
        );
    }

    #[test]
    fn test_change_value() {
        let mut board = classic();
        let coord = Coord::new(0, 0);
        board.assign(coord, 5).unwrap();
        board.assign(Coord::new(0, 8), 7).unwrap();

        // Changing to a free value works and reports the prior value.
        assert_eq!(board.change_value(coord, 6).unwrap(), Some(5));
        assert_eq!(board.cell(coord).unwrap().value(), Some(6));
        // 5 is free again for the row.
        assert!(board.has_candidate(Coord::new(0, 1), 5).unwrap());

        // Changing to a value used elsewhere in the row fails untouched.
        assert_eq!(
            board.change_value(coord, 7),
            Err(BoardError::ValueNotCandidate { coord, value: 7 })
        );
        assert_eq!(board.cell(coord).unwrap().value(), Some(6));

        // Re-assigning the value the cell already holds is legal.
        assert_eq!(board.change_value(coord, 6).unwrap(), Some(6));
        assert_eq!(board.cell(coord).unwrap().value(), Some(6));
    }

    #[test]
    fn test_change_value_on_blank_cell_assigns() {
        let mut board = classic();
        let coord = Coord::new(4, 4);
        assert_eq!(board.change_value(coord, 9).unwrap(), None);
        assert_eq!(board.cell(coord).unwrap().value(), Some(9));
    }

    #[test]
    fn test_clear_resets_board() {
        let mut board = classic();
        board.assign(Coord::new(0, 0), 1).unwrap();
        board.assign(Coord::new(5, 5), 2).unwrap();

        board.clear();
        assert_eq!(board, classic());
        assert_eq!(board.candidates(Coord::new(0, 0)).unwrap(), ValueSet::full(9));
    }

    #[test]
    fn test_group_accessors() {
        let board = classic();
        assert_eq!(board.row_group(4).unwrap().index(), 4);
        assert_eq!(board.column_group(0).unwrap().kind(), GroupKind::Column);
        assert_eq!(
            board.box_group(9),
            Err(BoardError::GroupIndexOutOfRange { index: 9, size: 9 })
        );
    }

    #[test]
    fn test_full_grid_completion_flips_on_last_assign() {
        let mut board = classic();
        for row in 0..9 {
            for col in 0..9 {
                assert!(!board.is_complete());
                board
                    .assign(Coord::new(row, col), solution_value(row, col))
                    .unwrap();
                assert!(board.is_valid());
            }
        }
        assert!(board.is_complete());
        assert!(board.groups().all(ConstraintGroup::is_complete));
    }

    #[test]
    fn test_retract_reopens_completed_board() {
        let mut board = classic();
        for row in 0..9 {
            for col in 0..9 {
                board
                    .assign(Coord::new(row, col), solution_value(row, col))
                    .unwrap();
            }
        }
        assert!(board.is_complete());

        let coord = Coord::new(4, 4);
        let value = board.retract(coord).unwrap().unwrap();
        assert!(!board.is_complete());
        // The only candidate left for the hole is the value that was there.
        assert_eq!(
            board.candidates(coord).unwrap(),
            ValueSet::from_iter([value])
        );
    }

    #[test]
    fn test_is_valid_allows_blanks() {
        let mut board = classic();
        assert!(board.is_valid());
        board.assign(Coord::new(0, 0), 1).unwrap();
        board.assign(Coord::new(8, 8), 1).unwrap();
        assert!(board.is_valid());
        assert!(!board.is_complete());
    }
}
