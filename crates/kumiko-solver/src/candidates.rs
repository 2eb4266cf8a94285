//! Per-cell candidate sets, rebuilt from scratch each propagation round.

use kumiko_core::{Digit, DigitSet, Grid, Position, Unit};
use log::trace;

/// Candidate sets for every cell of the board.
///
/// A filled cell's candidate set is the singleton of its value; an empty
/// cell's is the intersection of the missing-digit sets of its row,
/// column, and box. The sets are recomputed fresh from the grid every
/// round rather than updated incrementally — the state space is tiny and
/// the recomputation keeps each round side-effect free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl CandidateGrid {
    /// Derives the candidate set of every cell from the current grid.
    ///
    /// This is the naked-single derivation: a digit survives for an empty
    /// cell only if it is simultaneously missing from the cell's row,
    /// column, and box.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumiko_core::{Digit, Grid, Position};
    /// use kumiko_solver::CandidateGrid;
    ///
    /// let line = format!("12345678{}", "0".repeat(73));
    /// let grid: Grid = line.parse()?;
    /// let candidates = CandidateGrid::derive(&grid);
    ///
    /// // The last cell of row 0 can only be the row's missing digit
    /// let set = candidates.get(Position::new(0, 8));
    /// assert_eq!(set.as_single(), Some(Digit::D9));
    /// # Ok::<(), kumiko_core::ValidationError>(())
    /// ```
    #[must_use]
    pub fn derive(grid: &Grid) -> Self {
        let row_missing: [DigitSet; 9] = Unit::ROWS.map(|unit| grid.missing(unit));
        let col_missing: [DigitSet; 9] = Unit::COLUMNS.map(|unit| grid.missing(unit));
        let box_missing: [DigitSet; 9] = Unit::BOXES.map(|unit| grid.missing(unit));

        let mut cells = [DigitSet::EMPTY; 81];
        for pos in Position::all() {
            cells[pos.index()] = match grid.get(pos) {
                Some(digit) => DigitSet::from_elem(digit),
                None => {
                    row_missing[usize::from(pos.row())]
                        & col_missing[usize::from(pos.col())]
                        & box_missing[usize::from(pos.box_index())]
                }
            };
        }
        Self { cells }
    }

    /// Returns the candidate set of the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Collapses hidden singles: for each cell with two or more
    /// candidates, if one of its candidate digits appears in no other
    /// cell of the cell's row, column, or box, that digit is forced —
    /// the cell's set shrinks to that singleton and the scan moves on to
    /// the next cell (the first forced digit wins).
    pub fn resolve_hidden_singles(&mut self) {
        for pos in Position::all() {
            let candidates = self.cells[pos.index()];
            if candidates.len() < 2 {
                continue;
            }
            for digit in candidates.iter() {
                if self.is_forced(pos, digit) {
                    trace!("hidden single: {digit} forced at {pos}");
                    self.cells[pos.index()] = DigitSet::from_elem(digit);
                    break;
                }
            }
        }
    }

    /// Returns `true` if no cell other than `pos` in `pos`'s row, column,
    /// or box has `digit` among its candidates.
    fn is_forced(&self, pos: Position, digit: Digit) -> bool {
        let units = [
            Unit::Row(pos.row()),
            Unit::Column(pos.col()),
            Unit::Box(pos.box_index()),
        ];
        units.into_iter().all(|unit| {
            unit.positions()
                .into_iter()
                .all(|other| other == pos || !self.get(other).contains(digit))
        })
    }

    /// Writes every single-candidate empty cell back into the grid.
    ///
    /// Returns the number of cells placed. Cells whose candidate set is
    /// empty or still holds several digits are left untouched.
    pub fn commit(&self, grid: &mut Grid) -> usize {
        let mut placed = 0;
        for pos in Position::all() {
            if grid.get(pos).is_none()
                && let Some(digit) = self.get(pos).as_single()
            {
                trace!("placing {digit} at {pos}");
                grid.set(pos, Some(digit));
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use kumiko_core::digit::Digit::*;

    use super::*;

    /// Places `digit` at each (row, col) of `placements` on an otherwise
    /// empty grid.
    fn grid_with(digit: char, placements: &[(usize, usize)]) -> Grid {
        let mut line = vec![b'0'; 81];
        for &(row, col) in placements {
            line[row * 9 + col] = digit as u8;
        }
        String::from_utf8(line).unwrap().parse().unwrap()
    }

    #[test]
    fn test_filled_cells_are_singletons() {
        let grid = grid_with('7', &[(4, 4)]);
        let candidates = CandidateGrid::derive(&grid);
        assert_eq!(candidates.get(Position::new(4, 4)), DigitSet::from_elem(D7));
    }

    #[test]
    fn test_empty_cell_intersects_row_column_and_box() {
        // 7 in the same row, 3 in the same column, 5 in the same box
        let mut line = vec![b'0'; 81];
        line[8] = b'7'; // (0, 8): row 0
        line[6 * 9] = b'3'; // (6, 0): column 0
        line[9 + 1] = b'5'; // (1, 1): top left box
        let grid: Grid = String::from_utf8(line).unwrap().parse().unwrap();

        let candidates = CandidateGrid::derive(&grid);
        let set = candidates.get(Position::new(0, 0));
        assert_eq!(set.len(), 6);
        assert!(!set.contains(D7));
        assert!(!set.contains(D3));
        assert!(!set.contains(D5));
    }

    #[test]
    fn test_naked_single_from_nearly_full_row() {
        let line = format!("12345678{}", "0".repeat(73));
        let grid: Grid = line.parse().unwrap();
        let candidates = CandidateGrid::derive(&grid);
        assert_eq!(candidates.get(Position::new(0, 8)).as_single(), Some(D9));
    }

    #[test]
    fn test_hidden_single_is_forced() {
        // Four 5s placed so that (0, 0) is the only cell of row 0,
        // column 0, and the top left box that can still take a 5.
        let grid = grid_with('5', &[(1, 4), (2, 6), (4, 1), (7, 2)]);
        let mut candidates = CandidateGrid::derive(&grid);

        let before = candidates.get(Position::new(0, 0));
        assert!(before.contains(D5));
        assert!(before.len() > 1);

        candidates.resolve_hidden_singles();
        assert_eq!(candidates.get(Position::new(0, 0)).as_single(), Some(D5));
    }

    #[test]
    fn test_no_hidden_single_on_empty_grid() {
        let grid: Grid = "0".repeat(81).parse().unwrap();
        let mut candidates = CandidateGrid::derive(&grid);
        let before = candidates.clone();
        candidates.resolve_hidden_singles();
        assert_eq!(candidates, before);
    }

    #[test]
    fn test_commit_places_only_singletons() {
        let line = format!("12345678{}", "0".repeat(73));
        let mut grid: Grid = line.parse().unwrap();
        let candidates = CandidateGrid::derive(&grid);

        let placed = candidates.commit(&mut grid);
        assert_eq!(placed, 1);
        assert_eq!(grid.get(Position::new(0, 8)), Some(D9));
        // Cells with several candidates stay empty
        assert_eq!(grid.get(Position::new(8, 8)), None);
    }

    #[test]
    fn test_commit_on_complete_grid_places_nothing() {
        let mut grid: Grid =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
                .parse()
                .unwrap();
        let candidates = CandidateGrid::derive(&grid);
        assert_eq!(candidates.commit(&mut grid), 0);
    }
}
