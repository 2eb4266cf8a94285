//! Core board model and validation for the kumiko sudoku solver.
//!
//! This crate provides the data structures shared by the solver and its
//! callers:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A 9-bit set of digits, used for candidates and
//!   missing-digit computations
//! - [`position`]: Board position (row, column) type
//! - [`unit`]: Rows, columns, and 3×3 boxes as derived views over the board
//! - [`grid`]: The 9×9 board and its unit accessors
//! - [`validate`]: Parsing of 81-digit puzzle lines and the
//!   "no duplicate non-zero digit" structural checks
//!
//! # Examples
//!
//! ```
//! use kumiko_core::{Unit, parse_and_validate};
//!
//! let line = "0".repeat(81);
//! let grid = parse_and_validate(&line)?;
//!
//! assert!(!grid.is_complete());
//! assert_eq!(grid.missing(Unit::Row(0)).len(), 9);
//! assert_eq!(grid.to_string(), line);
//! # Ok::<(), kumiko_core::ValidationError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod unit;
pub mod validate;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::Grid,
    position::Position,
    unit::Unit,
    validate::{ValidationError, check, parse_and_validate},
};
