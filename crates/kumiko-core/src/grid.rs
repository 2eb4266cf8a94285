//! The 9×9 board and its unit accessors.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, DigitSet, Position, Unit, ValidationError, validate};

/// A 9×9 sudoku board.
///
/// Cells hold `Option<Digit>`; `None` corresponds to the `0` placeholder
/// of the 81-digit line format. A grid is created once per request from a
/// raw line, flows unchanged through validation, and is mutated in place
/// by the solver.
///
/// # Examples
///
/// ```
/// use kumiko_core::{Digit, Grid, Position, Unit};
///
/// let line = format!("12345678{}", "0".repeat(73));
/// let grid: Grid = line.parse()?;
///
/// assert_eq!(grid.get(Position::new(0, 3)), Some(Digit::D4));
/// assert_eq!(grid.missing(Unit::Row(0)).as_single(), Some(Digit::D9));
/// assert!(!grid.is_complete());
/// assert_eq!(grid.to_string(), line);
/// # Ok::<(), kumiko_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    pub(crate) const fn from_cells(cells: [Option<Digit>; 81]) -> Self {
        Self { cells }
    }

    /// Returns the value of the cell at `pos`, or `None` for a placeholder.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos`.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the 9 values of `unit` as an independent copy, in the
    /// unit's scan order (left to right, top to bottom, row-major within
    /// a box).
    #[must_use]
    pub fn values(&self, unit: Unit) -> [Option<Digit>; 9] {
        unit.positions().map(|pos| self.get(pos))
    }

    /// Returns the set of digits already placed in `unit`.
    #[must_use]
    pub fn present(&self, unit: Unit) -> DigitSet {
        self.values(unit).into_iter().flatten().collect()
    }

    /// Returns the set of digits absent from `unit` — the digits that
    /// could still legally occupy some empty cell of the unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumiko_core::{Digit, Grid, Unit};
    ///
    /// let line = format!("12345678{}", "0".repeat(73));
    /// let grid: Grid = line.parse()?;
    /// assert_eq!(grid.missing(Unit::Row(0)).as_single(), Some(Digit::D9));
    /// # Ok::<(), kumiko_core::ValidationError>(())
    /// ```
    #[must_use]
    pub fn missing(&self, unit: Unit) -> DigitSet {
        DigitSet::FULL.difference(self.present(unit))
    }

    /// Returns `true` iff no cell holds the placeholder value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Parses an 81-character puzzle line into a grid, validating its rows.
    ///
    /// This is the parse half of validation: it fails on inputs that are
    /// not exactly 81 characters, contain a character outside `0`-`9`, or
    /// repeat a non-zero digit within a row. Columns and boxes are checked
    /// separately by [`validate::check`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, in the fixed
    /// order: length, character set, then rows 0-8.
    pub fn from_line(line: &str) -> Result<Self, ValidationError> {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != 81 {
            return Err(ValidationError::Length { len: chars.len() });
        }
        let mut cells = [None; 81];
        for (index, &ch) in chars.iter().enumerate() {
            cells[index] = match ch {
                '0' => None,
                _ => match Digit::from_char(ch) {
                    Some(digit) => Some(digit),
                    None => return Err(ValidationError::InvalidCharacter { ch, index }),
                },
            };
        }
        let grid = Self::from_cells(cells);
        for row in Unit::ROWS {
            if !validate::is_unique(grid.values(row)) {
                return Err(ValidationError::Duplicate { unit: row });
            }
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl Display for Grid {
    /// Serializes the grid back to an 81-character row-major digit
    /// string, with unresolved cells shown as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str("0")?,
            }
        }
        Ok(())
    }
}
