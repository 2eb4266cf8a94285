//! Parsing and structural validation of puzzle lines.
//!
//! Validation is a pure predicate over the input: it never mutates the
//! grid, reports exactly one failure per call (the first one found), and
//! checks units in a fixed order — rows during parse, then columns 0-8,
//! then boxes in scan order.

use crate::{Digit, DigitSet, Grid, Unit};

/// A validation failure, carrying a human-readable reason naming the
/// violated rule and, where applicable, the unit at fault.
///
/// # Examples
///
/// ```
/// use kumiko_core::parse_and_validate;
///
/// let line = format!("11{}", "0".repeat(79));
/// let err = parse_and_validate(&line).unwrap_err();
/// assert_eq!(err.to_string(), "row 0 has a duplicate entry");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// The input is not exactly 81 characters long.
    #[display("input must be exactly 81 digits long, got {len}")]
    Length {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a character outside `0`-`9`.
    #[display("input must contain digits 0 through 9 only, found {ch:?} at position {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its position in the input (0-80).
        index: usize,
    },
    /// A unit contains the same non-zero digit more than once.
    #[display("{unit} has a duplicate entry")]
    Duplicate {
        /// The first unit found to repeat a digit.
        unit: Unit,
    },
}

/// Returns `true` if `values` repeats no digit.
///
/// Empty cells may repeat any number of times; the test is that the
/// count of distinct digits equals the count of filled cells.
pub(crate) fn is_unique(values: [Option<Digit>; 9]) -> bool {
    let filled = values.iter().flatten().count();
    let distinct: DigitSet = values.into_iter().flatten().collect();
    distinct.len() == filled
}

/// Validates the columns and boxes of a parsed grid.
///
/// Rows are already validated by [`Grid::from_line`]; this pass checks
/// the 9 columns in index order, then the 9 boxes in scan order (top
/// left through bottom right), stopping at the first violation.
///
/// # Errors
///
/// Returns [`ValidationError::Duplicate`] naming the first unit that
/// repeats a non-zero digit.
pub fn check(grid: &Grid) -> Result<(), ValidationError> {
    for unit in Unit::COLUMNS.into_iter().chain(Unit::BOXES) {
        if !is_unique(grid.values(unit)) {
            return Err(ValidationError::Duplicate { unit });
        }
    }
    Ok(())
}

/// Parses a raw puzzle line and validates all 27 units.
///
/// This is the boundary operation callers use: on success the returned
/// grid's row-major serialization equals the input.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in the fixed
/// order: length, character set, rows, columns, boxes.
///
/// # Examples
///
/// ```
/// use kumiko_core::parse_and_validate;
///
/// let line = "0".repeat(81);
/// let grid = parse_and_validate(&line)?;
/// assert_eq!(grid.to_string(), line);
/// # Ok::<(), kumiko_core::ValidationError>(())
/// ```
pub fn parse_and_validate(line: &str) -> Result<Grid, ValidationError> {
    let grid = Grid::from_line(line)?;
    check(&grid)?;
    Ok(grid)
}
