//! Depth-first backtracking search for the numtrack sudoku grid.
//!
//! The solver drives a [`Grid`] through its public contract only: it asks for
//! the next empty cell, tries each legal candidate in ascending order, and
//! undoes a placement when the branch below it dies. There is no constraint
//! propagation and no heuristic cell selection; search order is fixed by the
//! grid's row-major scan, so a given puzzle always produces the same trace.
//!
//! # Examples
//!
//! ```
//! use numtrack_solver::BacktrackSolver;
//!
//! let mut grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solver = BacktrackSolver::new();
//! let (solved, stats) = solver.solve(&mut grid);
//! assert!(solved);
//! assert!(grid.is_solved());
//! println!("{} placements, {} backtracks", stats.placements(), stats.backtracks());
//! # Ok::<(), numtrack_core::ParseGridError>(())
//! ```

use numtrack_core::Grid;

/// Statistics collected during a backtracking search.
///
/// Placements count every tentative digit written into the grid; backtracks
/// count the placements that were undone. The difference is the number of
/// cells the search actually filled. A stats value can be reused across
/// [`BacktrackSolver::solve_with_stats`] calls to accumulate totals over
/// repeated runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    placements: usize,
    backtracks: usize,
}

impl SolverStats {
    /// Creates a zeroed stats value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tentative placements made.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns the number of placements undone on dead ends.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns `true` if the search ever had to undo a placement.
    #[must_use]
    pub fn has_backtracked(&self) -> bool {
        self.backtracks > 0
    }
}

/// A solver that fills a grid by exhaustive depth-first search with
/// chronological backtracking.
///
/// Candidates at each cell come from [`Grid::options_at`], so every
/// intermediate grid state satisfies the sudoku constraint by construction.
/// That invariant is what lets [`Grid::is_solved`] check completeness only.
///
/// Worst-case cost is exponential in the number of empty cells; recursion
/// depth is bounded by the 81 cells of the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Solves the grid in place.
    ///
    /// Returns `(true, stats)` and leaves the grid solved when a solution
    /// exists beneath the current state. Returns `(false, stats)` when the
    /// search exhausts every branch; the grid is then bit-for-bit back in
    /// the state it had on entry. Failure is an ordinary result, not an
    /// error: there is no distinction between "this puzzle has no solution"
    /// and "this branch has none".
    ///
    /// Calling this on an already-solved grid returns immediately without
    /// touching it.
    pub fn solve(&self, grid: &mut Grid) -> (bool, SolverStats) {
        let mut stats = SolverStats::new();
        let solved = self.solve_with_stats(grid, &mut stats);
        (solved, stats)
    }

    /// Like [`solve`](Self::solve), but accumulates into an existing stats
    /// value. Useful when measuring repeated runs of the same puzzle.
    pub fn solve_with_stats(&self, grid: &mut Grid, stats: &mut SolverStats) -> bool {
        let Some(pos) = grid.next_empty() else {
            // No empty cell left. Every placement below went through
            // options_at, so the grid is a valid solution.
            return true;
        };

        for candidate in grid.options_at(pos) {
            grid.place(candidate, pos);
            stats.placements += 1;
            if self.solve_with_stats(grid, stats) {
                return true;
            }
            grid.unplace(pos);
            stats.backtracks += 1;
        }

        // Every candidate failed; (pos) is empty again and the caller tries
        // its own next candidate.
        false
    }
}

#[cfg(test)]
mod tests {
    use numtrack_core::DigitSet;

    use super::*;

    const CLASSIC: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const CLASSIC_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    // (8, 0) must be 9, but column 8 already holds one.
    const UNSATISFIABLE: &str = "
        12345678_
        _________
        ________9
        _________
        _________
        _________
        _________
        _________
        _________
    ";

    fn assert_fully_valid(grid: &Grid) {
        for i in 0..9 {
            for values in [
                grid.row_values(i),
                grid.column_values(i),
                grid.block_values(i),
            ] {
                let seen: DigitSet = values.into_iter().flatten().collect();
                assert_eq!(seen, DigitSet::FULL, "house {i} is not a permutation of 1-9");
            }
        }
    }

    #[test]
    fn test_solves_classic_puzzle() {
        let mut grid: Grid = CLASSIC.parse().unwrap();
        let (solved, stats) = BacktrackSolver::new().solve(&mut grid);

        assert!(solved);
        assert!(grid.is_solved());
        assert_fully_valid(&grid);
        assert_eq!(grid, CLASSIC_SOLUTION.parse().unwrap());
        assert_eq!(grid.to_string().lines().next(), Some("534678912"));
        // 31 givens leave 50 cells to fill.
        assert_eq!(stats.placements() - stats.backtracks(), 50);
    }

    #[test]
    fn test_solves_empty_grid() {
        let mut grid = Grid::empty();
        let (solved, _) = BacktrackSolver::new().solve(&mut grid);
        assert!(solved);
        assert_fully_valid(&grid);
        // Ascending candidate order and row-major scan fix the first row.
        assert_eq!(grid.to_string().lines().next(), Some("123456789"));
    }

    #[test]
    fn test_unsatisfiable_restores_entry_state() {
        let mut grid: Grid = UNSATISFIABLE.parse().unwrap();
        let before = grid.clone();

        let (solved, stats) = BacktrackSolver::new().solve(&mut grid);
        assert!(!solved);
        assert_eq!(grid, before);
        assert_eq!(stats.placements(), stats.backtracks());
    }

    #[test]
    fn test_deeper_unsatisfiable_restores_entry_state() {
        // Row 0 needs {8, 9} in its last two cells, but column 8 already
        // holds both digits further down, so either ordering dies one cell
        // deep and the search has to backtrack before exhausting.
        let mut grid: Grid = "
            1234567__
            _________
            _________
            ________8
            ________9
            _________
            _________
            _________
            _________
        "
        .parse()
        .unwrap();
        let before = grid.clone();

        let (solved, stats) = BacktrackSolver::new().solve(&mut grid);
        assert!(!solved);
        assert!(stats.has_backtracked());
        assert_eq!(stats.placements(), stats.backtracks());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_solved_grid_is_left_untouched() {
        let mut grid: Grid = CLASSIC_SOLUTION.parse().unwrap();
        let before = grid.clone();

        let (solved, stats) = BacktrackSolver::new().solve(&mut grid);
        assert!(solved);
        assert_eq!(grid, before);
        assert_eq!(stats.placements(), 0);
        assert_eq!(stats.backtracks(), 0);
    }

    #[test]
    fn test_stats_accumulate_across_runs() {
        let solver = BacktrackSolver::new();
        let mut stats = SolverStats::new();

        let mut grid: Grid = CLASSIC.parse().unwrap();
        assert!(solver.solve_with_stats(&mut grid, &mut stats));
        let after_one = stats.placements();
        assert!(after_one >= 30);

        let mut grid: Grid = CLASSIC.parse().unwrap();
        assert!(solver.solve_with_stats(&mut grid, &mut stats));
        assert_eq!(stats.placements(), after_one * 2);
    }
}
