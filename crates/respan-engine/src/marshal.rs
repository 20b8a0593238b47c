//! Dynamic <-> CellValue conversion and range reads.
//!
//! Everything that crosses the boundary between the Rhai host and the core
//! value model goes through here. Conversions are total for the value types a
//! sheet can hold; anything else (maps, function pointers, ...) is reported
//! as unsupported so the builtin can degrade to an error marker instead of
//! panicking into the host.

use crate::cell_ref::CellRef;
use crate::sheet::Sheet;
use respan_core::{CellValue, Grid};
use rhai::Dynamic;

/// Convert a cell value for return into the scripting host. Empty cells
/// become `""` and error markers their display string.
pub fn value_to_dynamic(value: &CellValue) -> Dynamic {
    match value {
        CellValue::Empty => Dynamic::from(String::new()),
        CellValue::Number(n) => Dynamic::from(*n),
        CellValue::Text(s) => Dynamic::from(s.clone()),
        CellValue::Bool(b) => Dynamic::from(*b),
        CellValue::Error(e) => Dynamic::from(e.as_str().to_string()),
    }
}

/// Convert a host value into a cell value. Returns None for types a cell
/// cannot hold.
pub fn dynamic_to_value(value: &Dynamic) -> Option<CellValue> {
    if value.is_unit() {
        return Some(CellValue::Empty);
    }
    if let Ok(s) = value.clone().into_string() {
        return Some(CellValue::Text(s));
    }
    if let Ok(n) = value.as_float() {
        return Some(CellValue::Number(n));
    }
    if let Ok(n) = value.as_int() {
        return Some(CellValue::Number(n as f64));
    }
    if let Ok(b) = value.as_bool() {
        return Some(CellValue::Bool(b));
    }
    None
}

/// Read a rectangular block out of the sheet into a dense grid. Corner order
/// is normalized; absent cells read as [`CellValue::Empty`]. Returns None for
/// coordinates outside the sheet (negative indices) so the caller can degrade
/// to an error marker.
pub fn read_block(sheet: &Sheet, c1: i64, r1: i64, c2: i64, r2: i64) -> Option<Grid> {
    if c1 < 0 || r1 < 0 || c2 < 0 || r2 < 0 {
        return None;
    }
    let min_row = r1.min(r2) as usize;
    let max_row = r1.max(r2) as usize;
    let min_col = c1.min(c2) as usize;
    let max_col = c1.max(c2) as usize;

    let mut grid = Grid::new(max_row - min_row + 1, max_col - min_col + 1);
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            if let Some(entry) = sheet.get(&CellRef::new(col, row)) {
                grid.set(row - min_row, col - min_col, entry.value().clone());
            }
        }
    }
    Some(grid)
}

/// Convert an output grid into a nested array of rows for spilling into the
/// host.
pub fn grid_to_array(grid: &Grid) -> rhai::Array {
    grid.row_slices()
        .map(|row| {
            Dynamic::from(
                row.iter()
                    .map(value_to_dynamic)
                    .collect::<rhai::Array>(),
            )
        })
        .collect()
}

/// Interpret a flat host array as a single-row source block. Returns None if
/// any element is not a cell-representable value.
pub fn array_to_row(values: &rhai::Array) -> Option<Grid> {
    let row = values
        .iter()
        .map(dynamic_to_value)
        .collect::<Option<Vec<CellValue>>>()?;
    Some(Grid::from_rows(vec![row]))
}
