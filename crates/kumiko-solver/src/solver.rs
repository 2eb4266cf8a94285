//! The bounded fixed-point propagation loop.

use kumiko_core::Grid;
use log::debug;

use crate::CandidateGrid;

/// Default round ceiling: one round per cell, a heuristic upper bound
/// rather than a proven termination bound.
pub const DEFAULT_MAX_ROUNDS: usize = 81;

/// How a solving run ended.
///
/// An incomplete grid is not an error: the outcome distinguishes
/// "solved" from "stalled" so callers need not scan the output for
/// remaining placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// Every cell was filled. A grid that was already complete solves in
    /// zero rounds.
    Solved {
        /// Rounds run before the grid completed.
        rounds: usize,
    },
    /// Some cells were placed, but the run then reached a fixed point or
    /// the round ceiling with placeholders still present.
    Partial {
        /// Rounds run before stopping.
        rounds: usize,
        /// Total cells placed across all rounds.
        placed: usize,
    },
    /// No round placed a single cell.
    Stuck,
}

/// A pure constraint-propagation solver: naked singles and hidden
/// singles, no search or backtracking.
///
/// Each round is stateless relative to the previous except for the
/// grid's own contents; the loop stops as soon as the grid is complete,
/// a round places nothing, or the round ceiling is reached.
///
/// # Examples
///
/// ```
/// use kumiko_core::parse_and_validate;
/// use kumiko_solver::{Outcome, Solver};
///
/// let mut grid = parse_and_validate(&"0".repeat(81))?;
/// let outcome = Solver::default().solve(&mut grid);
///
/// // Nothing is forced on an empty board
/// assert_eq!(outcome, Outcome::Stuck);
/// # Ok::<(), kumiko_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    max_rounds: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

impl Solver {
    /// Creates a solver with the given round ceiling.
    #[must_use]
    pub const fn new(max_rounds: usize) -> Self {
        Self { max_rounds }
    }

    /// Returns the configured round ceiling.
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Runs propagation rounds on `grid` until it is complete, a round
    /// places nothing, or the round ceiling is reached.
    ///
    /// The grid is mutated in place; cells the algorithm cannot
    /// determine keep their placeholder value. The solver assumes `grid`
    /// has already passed validation and does not defend against
    /// contradictions: an inconsistent cell simply ends up with an empty
    /// candidate set and is never committed.
    pub fn solve(&self, grid: &mut Grid) -> Outcome {
        let mut rounds = 0;
        let mut placed_total = 0;

        while rounds < self.max_rounds && !grid.is_complete() {
            rounds += 1;
            let mut candidates = CandidateGrid::derive(grid);
            candidates.resolve_hidden_singles();
            let placed = candidates.commit(grid);
            debug!("round {rounds}: placed {placed} cells");
            if placed == 0 {
                // Fixed point: derivation is a pure function of the grid,
                // so every later round would be identical.
                break;
            }
            placed_total += placed;
        }

        if grid.is_complete() {
            Outcome::Solved { rounds }
        } else if placed_total > 0 {
            Outcome::Partial {
                rounds,
                placed: placed_total,
            }
        } else {
            Outcome::Stuck
        }
    }
}

#[cfg(test)]
mod tests {
    use kumiko_core::{Digit, Position, parse_and_validate};

    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    /// A puzzle that needs techniques beyond naked and hidden singles
    /// (Arto Inkala's "Everest" puzzle).
    const HARD: &str =
        "800000000003600000070090200050007000000045700000100030001000068008500010090000400";

    fn blank(line: &str, cells: &[(usize, usize)]) -> String {
        let mut line: Vec<u8> = line.bytes().collect();
        for &(row, col) in cells {
            line[row * 9 + col] = b'0';
        }
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn test_complete_grid_solves_to_itself() {
        let mut grid = parse_and_validate(SOLVED).unwrap();
        let outcome = Solver::default().solve(&mut grid);
        assert_eq!(outcome, Outcome::Solved { rounds: 0 });
        assert_eq!(grid.to_string(), SOLVED);
    }

    #[test]
    fn test_single_forced_cell_solves_in_one_round() {
        let line = blank(SOLVED, &[(4, 4)]);
        let mut grid = parse_and_validate(&line).unwrap();
        let outcome = Solver::default().solve(&mut grid);
        assert_eq!(outcome, Outcome::Solved { rounds: 1 });
        assert_eq!(grid.to_string(), SOLVED);
    }

    #[test]
    fn test_blanked_diagonal_solves_in_one_round() {
        // Each diagonal cell is the only empty cell of its row, so every
        // one is a naked single.
        let cells: Vec<_> = (0..9).map(|i| (i, i)).collect();
        let line = blank(SOLVED, &cells);
        let mut grid = parse_and_validate(&line).unwrap();
        let outcome = Solver::default().solve(&mut grid);
        assert_eq!(outcome, Outcome::Solved { rounds: 1 });
        assert_eq!(grid.to_string(), SOLVED);
    }

    #[test]
    fn test_empty_grid_is_stuck() {
        let mut grid = parse_and_validate(&"0".repeat(81)).unwrap();
        let outcome = Solver::default().solve(&mut grid);
        assert_eq!(outcome, Outcome::Stuck);
        assert_eq!(grid.to_string(), "0".repeat(81));
    }

    #[test]
    fn test_hard_puzzle_returns_placeholders_without_error() {
        let mut grid = parse_and_validate(HARD).unwrap();
        let outcome = Solver::default().solve(&mut grid);
        assert!(!outcome.is_solved());

        let output = grid.to_string();
        assert!(output.contains('0'));
        // The given clues are preserved
        for (i, ch) in HARD.chars().enumerate() {
            if ch != '0' {
                assert_eq!(output.as_bytes()[i], ch as u8);
            }
        }
    }

    #[test]
    fn test_hidden_single_end_to_end() {
        // Four 5s leave (0, 0) as the only home for a 5 in row 0,
        // column 0, and the top left box; nothing else is determined.
        let mut line = vec![b'0'; 81];
        for (row, col) in [(1, 4), (2, 6), (4, 1), (7, 2)] {
            line[row * 9 + col] = b'5';
        }
        let line = String::from_utf8(line).unwrap();
        let mut grid = parse_and_validate(&line).unwrap();

        let outcome = Solver::default().solve(&mut grid);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert!(outcome.is_partial());
    }

    #[test]
    fn test_solve_is_idempotent_on_its_own_output() {
        for line in [
            SOLVED.to_string(),
            HARD.to_string(),
            blank(SOLVED, &[(0, 0), (3, 7), (8, 2)]),
            "0".repeat(81),
        ] {
            let mut grid = parse_and_validate(&line).unwrap();
            Solver::default().solve(&mut grid);
            let first = grid.to_string();

            let mut grid = parse_and_validate(&first).unwrap();
            Solver::default().solve(&mut grid);
            assert_eq!(grid.to_string(), first);
        }
    }

    #[test]
    fn test_round_ceiling_is_respected() {
        // With a ceiling of zero rounds, nothing happens at all
        let line = blank(SOLVED, &[(4, 4)]);
        let mut grid = parse_and_validate(&line).unwrap();
        let outcome = Solver::new(0).solve(&mut grid);
        assert_eq!(outcome, Outcome::Stuck);
        assert_eq!(grid.to_string(), line);
    }

    #[test]
    fn test_outcome_variant_queries() {
        assert!(Outcome::Solved { rounds: 1 }.is_solved());
        assert!(
            Outcome::Partial {
                rounds: 2,
                placed: 5
            }
            .is_partial()
        );
        assert!(Outcome::Stuck.is_stuck());
    }
}
