//! The mutable 9×9 puzzle grid.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// Error returned when parsing a grid from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character that is neither a digit, an empty-cell marker, nor a
    /// separator.
    #[display("unexpected character {c:?} in grid source")]
    UnexpectedCharacter {
        /// The offending character.
        c: char,
    },
    /// The source did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells actually found.
        count: usize,
    },
}

/// A mutable sudoku puzzle grid.
///
/// Cells are stored flat in row-major order; `None` is the empty sentinel.
/// The grid performs no sudoku-rule validation on writes: [`place`] accepts
/// whatever it is given, and the caller is responsible for filtering
/// candidates through [`options_at`] first. The solver does exactly that,
/// which is what makes [`is_solved`] a pure completeness check.
///
/// [`place`]: Self::place
/// [`options_at`]: Self::options_at
/// [`is_solved`]: Self::is_solved
///
/// # Examples
///
/// ```
/// use numtrack_core::{Digit, Grid, Position};
///
/// let mut grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.value_at(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.next_empty(), Some(Position::new(2, 0)));
/// # Ok::<(), numtrack_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the value at a position, or `None` for an empty cell.
    #[must_use]
    pub const fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Writes a digit at a position, overwriting whatever was there.
    ///
    /// No row/column/block constraint is checked here; callers that care
    /// about validity must only place digits drawn from
    /// [`options_at`](Self::options_at).
    pub fn place(&mut self, digit: Digit, pos: Position) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Resets a cell to empty. Undoes a placement on backtrack.
    pub fn unplace(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns the values of row `y` in column order, empty cells included.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row_values(&self, y: u8) -> [Option<Digit>; 9] {
        assert!(y < 9, "row out of range");
        std::array::from_fn(|x| self.cells[usize::from(y) * 9 + x])
    }

    /// Returns the values of column `x` in row order, empty cells included.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column_values(&self, x: u8) -> [Option<Digit>; 9] {
        assert!(x < 9, "column out of range");
        std::array::from_fn(|y| self.cells[y * 9 + usize::from(x)])
    }

    /// Returns the values of a 3×3 block, row-major within the block, empty
    /// cells included.
    ///
    /// Blocks are numbered 0-8 row-major; block `i` has its top-left cell at
    /// `x = (i % 3) * 3`, `y = (i / 3) * 3`. Callers only ever use these
    /// values for membership tests, but the order is fixed anyway.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not in the range 0-8.
    #[must_use]
    pub fn block_values(&self, block: u8) -> [Option<Digit>; 9] {
        let mut cells = Position::block_cells(block);
        std::array::from_fn(|_| {
            let pos = cells.next().expect("a block has exactly nine cells");
            self.value_at(pos)
        })
    }

    /// Returns the digits that can be placed at a position without breaking
    /// the row, column, or block uniqueness constraint.
    ///
    /// The result iterates in ascending digit order, so callers that try
    /// candidates in iteration order get reproducible search traces. The
    /// cell's own value, if any, is excluded along with the rest of its row.
    ///
    /// # Examples
    ///
    /// ```
    /// use numtrack_core::{Digit, DigitSet, Grid, Position};
    ///
    /// let mut grid = Grid::empty();
    /// grid.place(Digit::D1, Position::new(0, 0));
    /// grid.place(Digit::D2, Position::new(8, 4));
    /// grid.place(Digit::D3, Position::new(1, 1));
    ///
    /// // Row 0 rules out 1, column 8 rules out 2, block 0 rules out 3.
    /// let options = grid.options_at(Position::new(8, 0));
    /// assert_eq!(
    ///     options,
    ///     DigitSet::from_iter([
    ///         Digit::D4,
    ///         Digit::D5,
    ///         Digit::D6,
    ///         Digit::D7,
    ///         Digit::D8,
    ///         Digit::D9,
    ///     ])
    /// );
    /// ```
    #[must_use]
    pub fn options_at(&self, pos: Position) -> DigitSet {
        let mut options = DigitSet::FULL;
        let row = self.row_values(pos.y());
        let column = self.column_values(pos.x());
        let block = self.block_values(pos.block());
        for digit in row.into_iter().chain(column).chain(block).flatten() {
            options.remove(digit);
        }
        options
    }

    /// Returns the first empty cell in row-major scan order, or `None` if
    /// the grid is full.
    ///
    /// The scan goes top-to-bottom and left-to-right within each row. A
    /// depth-first search fills cells in exactly this order, so changing it
    /// changes which solution is found first when several exist.
    #[must_use]
    pub fn next_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Returns `true` if no cell is empty.
    ///
    /// This is a completeness check only; it does not re-verify row, column,
    /// or block uniqueness. That is sound precisely when every placement was
    /// filtered through [`options_at`](Self::options_at), as the solver does.
    /// A grid filled by any other path can report `true` here while holding
    /// conflicting digits.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for Grid {
    /// Renders one row per line, digits concatenated, `0` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                f.write_char('\n')?;
            }
            for value in self.row_values(y) {
                match value {
                    Some(digit) => Display::fmt(&digit, f)?,
                    None => f.write_char('0')?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from text.
    ///
    /// Characters `1`-`9` are digits; `0`, `.`, and `_` are empty cells;
    /// whitespace and commas are separators and ignored. This accepts both
    /// the CSV puzzle-file format and the spaced layout used in tests.
    /// Exactly 81 cells are required. Sudoku-rule consistency of the givens
    /// is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(81);
        for c in s.chars() {
            if c.is_whitespace() || c == ',' {
                continue;
            }
            let cell = match c {
                '0' | '.' | '_' => None,
                _ => Some(Digit::from_char(c).ok_or(ParseGridError::UnexpectedCharacter { c })?),
            };
            cells.push(cell);
        }
        let cells: [Option<Digit>; 81] = cells
            .try_into()
            .map_err(|cells: Vec<_>| ParseGridError::WrongCellCount { count: cells.len() })?;
        Ok(Self { cells })
    }
}
