//! Re-flow a single row or column into a target grid.
//!
//! The source block must be 1xN or Nx1. Elements are written into a fresh
//! rows x cols output grid in source order, advancing the minor axis on every
//! element (`by_row` selects row-first vs column-first) and wrapping to the
//! next row/column when the current one is full. The transfer stops when
//! either the source or the grid runs out.

use crate::error::{RespanError, Result};
use crate::grid::Grid;
use crate::value::CellValue;

/// Redistribute `source` into a `target_rows` x `target_cols` grid.
///
/// Preconditions, checked before any allocation:
/// - a 1x1 target means the destination selection is a single cell and the
///   formula was not array-entered ([`RespanError::NotArrayEntered`]);
/// - a source with both dimensions above 1 is not a single row or column
///   ([`RespanError::InvalidSourceShape`]).
///
/// Cells the source does not reach keep the default fill value `""`. A source
/// longer than the grid's capacity is truncated silently.
pub fn redistribute(
    source: &Grid,
    target_rows: usize,
    target_cols: usize,
    by_row: bool,
) -> Result<Grid> {
    if target_rows == 1 && target_cols == 1 {
        return Err(RespanError::NotArrayEntered);
    }
    if source.rows() > 1 && source.cols() > 1 {
        return Err(RespanError::InvalidSourceShape);
    }

    let mut grid = Grid::new(target_rows, target_cols);
    grid.fill(&CellValue::text(""));

    // A 1x1 source counts as a column.
    let is_source_row = source.cols() > 1;

    let mut row = 0;
    let mut col = 0;
    let limit = source.len().min(grid.len());

    for i in 0..limit {
        let (src_row, src_col) = if is_source_row { (0, i) } else { (i, 0) };
        let Some(value) = source.get(src_row, src_col) else {
            break;
        };
        grid.set(row, col, value.clone());

        if by_row {
            row += 1;
        } else {
            col += 1;
        }

        // Both wrap checks run unconditionally and in this order on every
        // element. Do not collapse them into if/else: on the step where the
        // column wraps, the row check still runs against the incremented row,
        // and that simultaneous wrap is load-bearing for corner cells.
        if col == target_cols {
            row += 1;
            col = 0;
        }
        if row == target_rows {
            col += 1;
            row = 0;
        }
    }

    Ok(grid)
}
