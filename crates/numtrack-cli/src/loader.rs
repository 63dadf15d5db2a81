//! Puzzle file loading and caching.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use numtrack_core::{Grid, ParseGridError};

/// Error returned when a puzzle file cannot be turned into a [`Grid`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("could not read puzzle file: {_0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid grid.
    #[display("invalid puzzle: {_0}")]
    Parse(#[from] ParseGridError),
}

/// Reads and parses a single puzzle file.
///
/// The expected format is nine lines of nine digit characters, `0` for an
/// empty cell, with optional comma separators; see
/// [`Grid::from_str`](std::str::FromStr).
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or does not parse.
pub fn load_puzzle(path: &Path) -> Result<Grid, LoadError> {
    let source = fs::read_to_string(path)?;
    Ok(source.parse()?)
}

/// A directory of puzzle files with an explicit in-memory cache.
///
/// Puzzles are identified by number and live at `<root>/<id>.csv`. The first
/// [`load`](Self::load) of an id reads and parses the file; later loads
/// return a copy of the cached grid, which is what makes the repeat-run
/// harness cheap: it reloads between runs instead of undoing solver
/// mutations. The cache is plain owned state with explicit
/// [`invalidate`](Self::invalidate), nothing process-wide.
#[derive(Debug, Default)]
pub struct PuzzleLibrary {
    root: PathBuf,
    cache: HashMap<u32, Grid>,
}

impl PuzzleLibrary {
    /// Creates a library rooted at the given puzzle directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Returns the file path a puzzle id resolves to.
    #[must_use]
    pub fn path_for(&self, id: u32) -> PathBuf {
        self.root.join(format!("{id}.csv"))
    }

    /// Loads a puzzle by id, reading the file only on first use.
    ///
    /// The returned grid is the caller's to mutate; the cached copy stays
    /// pristine, so loading the same id again yields the puzzle's initial
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read or does not parse.
    pub fn load(&mut self, id: u32) -> Result<Grid, LoadError> {
        if let Some(grid) = self.cache.get(&id) {
            return Ok(grid.clone());
        }
        let grid = load_puzzle(&self.path_for(id))?;
        self.cache.insert(id, grid.clone());
        Ok(grid)
    }

    /// Drops the cached copy of a puzzle, forcing the next load to re-read
    /// the file.
    pub fn invalidate(&mut self, id: u32) {
        self.cache.remove(&id);
    }
}
