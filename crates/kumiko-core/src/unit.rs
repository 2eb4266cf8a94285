//! Rows, columns, and 3×3 boxes.

use std::fmt::{self, Display};

use crate::Position;

/// Conventional names of the nine boxes, in scan order (box index 0-8).
const BOX_NAMES: [&str; 9] = [
    "top left",
    "top middle",
    "top right",
    "center left",
    "center middle",
    "center right",
    "bottom left",
    "bottom middle",
    "bottom right",
];

/// A group of 9 cells that must not repeat a non-zero digit:
/// a row, a column, or a 3×3 box.
///
/// Units are derived views over a [`Grid`](crate::Grid), not stored state.
/// The [`Display`] implementation names the unit the way validation
/// failures report it ("row 3", "column 3", "bottom right box").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its index (0-8, top to bottom).
    Row(u8),
    /// A column identified by its index (0-8, left to right).
    Column(u8),
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box(u8),
}

impl Unit {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row(i as u8);
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column(i as u8);
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8), in scan order: top left, top
    /// middle, top right, center left, center middle, center right,
    /// bottom left, bottom middle, bottom right.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box(i as u8);
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 units in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Box(i as u8);
            i += 1;
        }
        all
    };

    /// Converts a cell index within the unit (0-8) into an absolute
    /// [`Position`].
    ///
    /// Cells are ordered left to right for rows, top to bottom for
    /// columns, and row-major within a box.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row(row) => Position::new(row, i),
            Self::Column(col) => Position::new(i, col),
            Self::Box(b) => Position::new(3 * (b / 3) + i / 3, 3 * (b % 3) + i % 3),
        }
    }

    /// Returns the nine positions of this unit in scan order.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn positions(self) -> [Position; 9] {
        std::array::from_fn(|i| self.position(i as u8))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(i) => write!(f, "row {i}"),
            Self::Column(i) => write!(f, "column {i}"),
            Self::Box(i) => write!(f, "{} box", BOX_NAMES[usize::from(*i)]),
        }
    }
}
