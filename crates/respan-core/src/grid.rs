//! Dense 2-D grid of cell values.
//!
//! Row-major storage. Used both for source blocks handed in by the host and
//! for the output grid built by [`crate::redistribute`].

use crate::value::CellValue;
use serde::{Deserialize, Serialize};

/// A rows x cols block of cell values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create a grid with every cell set to [`CellValue::Empty`].
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![CellValue::Empty; rows * cols],
        }
    }

    /// Build a grid from rows of values. Rows shorter than the widest row
    /// are padded with [`CellValue::Empty`].
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Grid {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut grid = Grid::new(rows.len(), width);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                grid.set(r, c, value);
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (rows * cols).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Write a cell. Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    /// Overwrite every cell with a clone of `value`.
    ///
    /// Visits each (row, col) exactly once; a zero-sized grid is a no-op.
    pub fn fill(&mut self, value: &CellValue) {
        for cell in &mut self.cells {
            *cell = value.clone();
        }
    }

    /// Iterate cell values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter()
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[CellValue]> {
        self.cells.chunks(self.cols.max(1))
    }
}
