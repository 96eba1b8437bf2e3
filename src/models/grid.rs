//! The bead grid: a rectangular cell matrix with row-level structural
//! sharing.
//!
//! Rows are reference-counted (`Arc<Vec<Cell>>`), so cloning a grid costs
//! one `Arc` clone per row, and an edit allocates new storage only for
//! the rows it actually touches. Edit operations never mutate an input
//! grid; they return a new grid value sharing every untouched row, which
//! is what makes caller-side undo (keep the old value) and speculative
//! edits (discard the new value) cheap.
//!
//! The sharing discipline assumes one logical owner per "current grid"
//! value: grids may be read from anywhere, but two edits racing from the
//! same base resolve last-writer-wins at the caller.

use std::sync::Arc;

use super::cell::Cell;

/// A rectangular grid of bead cells, `rows x cols`.
///
/// Invariant: every row holds exactly `cols` cells. Construction asserts
/// this in debug builds and clamps row lengths in release builds (an
/// inconsistent grid is a programming error, not a runtime condition to
/// surface).
#[derive(Debug, Clone)]
pub struct BeadGrid {
    cols: usize,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl BeadGrid {
    /// A `rows x cols` grid with every cell set to `fill`.
    pub fn filled(cols: usize, rows: usize, fill: Cell) -> Self {
        Self {
            cols,
            rows: (0..rows)
                .map(|_| Arc::new(vec![fill.clone(); cols]))
                .collect(),
        }
    }

    /// Build a grid from row vectors. The column count is taken from the
    /// first row; empty input produces a 0x0 grid.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                debug_assert_eq!(row.len(), cols, "every row must have exactly {cols} cells");
                row.resize(cols, Cell::transparent());
                Arc::new(row)
            })
            .collect();
        Self { cols, rows }
    }

    /// Number of columns (cells per row).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// The cell at `(row, col)`, or `None` out of bounds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// The shared storage of one row. Exposed so callers (and tests) can
    /// check structural sharing with [`Arc::ptr_eq`].
    #[inline]
    pub fn row(&self, row: usize) -> Option<&Arc<Vec<Cell>>> {
        self.rows.get(row)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// True if `other` has the same dimensions and cell values.
    /// (Shared rows compare fast; diverged rows compare cell by cell.)
    pub fn same_cells(&self, other: &BeadGrid) -> bool {
        self.cols == other.cols
            && self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| Arc::ptr_eq(a, b) || a == b)
    }

    /// Start an edit against this grid. The editor shares every row until
    /// it is written to.
    pub(crate) fn edit(&self) -> GridEditor {
        GridEditor {
            cols: self.cols,
            rows: self.rows.clone(),
        }
    }
}

/// Copy-on-first-write editor over a grid's rows.
///
/// `set()` copies a row's storage the first time that row is written
/// (`Arc::make_mut`); painting many cells of one row costs a single row
/// copy. Untouched rows pass through to the finished grid as the same
/// `Arc` the source grid holds.
#[derive(Debug)]
pub(crate) struct GridEditor {
    cols: usize,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl GridEditor {
    /// Write one cell. Out-of-bounds coordinates are silently ignored;
    /// returns whether the write landed.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if col >= self.cols {
            return false;
        }
        let Some(shared) = self.rows.get_mut(row) else {
            return false;
        };
        Arc::make_mut(shared)[col] = cell;
        true
    }

    /// Finish the edit, producing the new grid.
    pub(crate) fn finish(self) -> BeadGrid {
        BeadGrid {
            cols: self.cols,
            rows: self.rows,
        }
    }
}
