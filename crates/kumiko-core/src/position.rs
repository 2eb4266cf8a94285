//! Board positions.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// Positions are addressed as `(row, col)` with both coordinates in the
/// range 0-8, matching the row-major order of the 81-digit line format.
///
/// # Examples
///
/// ```
/// use kumiko_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 43);
/// assert_eq!(pos.box_index(), 5); // center right box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3×3 box containing this position
    /// (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.col / 3 + 3 * (self.row / 3)
    }

    /// Returns an iterator over all 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumiko_core::Position;
    ///
    /// let positions: Vec<_> = Position::all().collect();
    /// assert_eq!(positions.len(), 81);
    /// assert_eq!(positions[0], Position::new(0, 0));
    /// assert_eq!(positions[80], Position::new(8, 8));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..81).map(|i| Self::new(i / 9, i % 9))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(0, 8).index(), 8);
        assert_eq!(Position::new(1, 0).index(), 9);
        assert_eq!(Position::new(8, 8).index(), 80);
    }

    #[test]
    fn test_box_index() {
        // One sample per box
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(1, 4).box_index(), 1);
        assert_eq!(Position::new(2, 8).box_index(), 2);
        assert_eq!(Position::new(3, 1).box_index(), 3);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(5, 7).box_index(), 5);
        assert_eq!(Position::new(6, 2).box_index(), 6);
        assert_eq!(Position::new(7, 3).box_index(), 7);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_all_covers_the_board() {
        let positions: Vec<_> = Position::all().collect();
        assert_eq!(positions.len(), 81);
        for (i, pos) in positions.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 7).to_string(), "r4c7");
    }
}
