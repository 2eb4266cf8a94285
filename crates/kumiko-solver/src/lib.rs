//! Constraint-propagation solver for 9×9 sudoku grids.
//!
//! The solver runs repeated rounds of candidate-set narrowing over a
//! validated [`Grid`](kumiko_core::Grid) until the grid is complete, a
//! round places nothing (a fixed point), or a configurable round ceiling
//! is reached. Each round:
//!
//! 1. rebuilds every cell's candidate set from scratch — the
//!    intersection of the digits missing from the cell's row, column,
//!    and box ([`CandidateGrid::derive`]);
//! 2. collapses hidden singles — candidates no other cell in the same
//!    row, column, or box can take
//!    ([`CandidateGrid::resolve_hidden_singles`]);
//! 3. commits every single-candidate cell back into the grid
//!    ([`CandidateGrid::commit`]).
//!
//! The solver is deliberately search-free: puzzles that need pairs,
//! chains, or guessing stop at a fixed point with placeholders still
//! present. That is not an error — the [`Outcome`] tells callers whether
//! the run solved the grid, made partial progress, or placed nothing.
//!
//! # Examples
//!
//! ```
//! use kumiko_core::parse_and_validate;
//! use kumiko_solver::Solver;
//!
//! // A solved grid with its center cell blanked
//! let line = "534678912672195348198342567859761423426803791713924856961537284287419635345286179";
//! let mut grid = parse_and_validate(line)?;
//!
//! let outcome = Solver::default().solve(&mut grid);
//! assert!(outcome.is_solved());
//! assert!(grid.is_complete());
//! # Ok::<(), kumiko_core::ValidationError>(())
//! ```

pub use self::{
    candidates::CandidateGrid,
    solver::{DEFAULT_MAX_ROUNDS, Outcome, Solver},
};

mod candidates;
mod solver;
