//! Core data structures for the numtrack sudoku solver.
//!
//! This crate provides the puzzle grid and its constraint-query operations.
//! It knows nothing about files, caching, or search strategy; the solver and
//! the CLI harness drive it through the public contract only.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: a set of digits backed by a 9-bit mask
//! - [`position`]: cell coordinates and block arithmetic
//! - [`grid`]: the mutable 9×9 puzzle grid with place/unplace and
//!   constraint queries
//!
//! # Examples
//!
//! ```
//! use numtrack_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! let pos = Position::new(4, 4);
//!
//! grid.place(Digit::D5, pos);
//! assert_eq!(grid.value_at(pos), Some(Digit::D5));
//!
//! // 5 is no longer an option anywhere in row 4, column 4, or the center block.
//! assert!(!grid.options_at(Position::new(4, 7)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::{Digit, InvalidDigit},
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    position::Position,
};
