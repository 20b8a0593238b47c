//! Built-in spreadsheet functions (Rust) and their metadata.
//!
//! Conventions:
//! - Sheet-facing built-in names are ALL CAPS (e.g. `TRANSPOSEBY`).
//! - Range built-ins rewrite to ALLCAPS Rhai function names
//!   (e.g. `TRANSPOSEBY_RANGE`); see `preprocess_formula`.
//! - Failure signals come back as error-marker strings (`#REF!`, `#VALUE!`),
//!   never as a panic into the host.

use crate::marshal::{array_to_row, grid_to_array, read_block};
use crate::sheet::{CallerContext, Sheet};
use respan_core::{CellError, RespanError, redistribute};
use rhai::{Dynamic, Engine};

/// Metadata for one sheet-facing argument, kept for host UIs that surface
/// signatures and tooltips.
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub optional: bool,
}

pub struct RangeBuiltin {
    pub sheet_name: &'static str,
    pub rhai_name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgSpec],
}

pub const RANGE_BUILTINS: &[RangeBuiltin] = &[RangeBuiltin {
    sheet_name: "TRANSPOSEBY",
    rhai_name: "TRANSPOSEBY_RANGE",
    description: "Transpose a range of values breaking every n number of rows/columns.",
    args: &[
        ArgSpec {
            name: "SourceData",
            description: "The range of cells to be transposed.",
            optional: false,
        },
        ArgSpec {
            name: "ByRow",
            description: "Optional flag to force transposing vertically instead of the horizontal default.",
            optional: true,
        },
    ],
}];

pub fn range_rhai_name(sheet_name: &str) -> Option<&'static str> {
    RANGE_BUILTINS
        .iter()
        .find(|b| b.sheet_name == sheet_name)
        .map(|b| b.rhai_name)
}

fn error_marker(error: CellError) -> Dynamic {
    Dynamic::from(error.as_str().to_string())
}

fn failure_marker(error: RespanError) -> Dynamic {
    match error {
        RespanError::NotArrayEntered => error_marker(CellError::Ref),
        RespanError::InvalidSourceShape => error_marker(CellError::Value),
    }
}

/// Run the redistribution against the current caller selection and marshal
/// the outcome back into the host.
fn transpose_into_caller(
    source: &respan_core::Grid,
    caller: &CallerContext,
    by_row: bool,
) -> Dynamic {
    // No caller selection means there is no destination to shape the output
    // against; hand back an empty spill.
    let Some(selection) = *caller.lock().unwrap() else {
        return Dynamic::from(rhai::Array::new());
    };

    match redistribute(source, selection.rows(), selection.cols(), by_row) {
        Ok(grid) => Dynamic::from(grid_to_array(&grid)),
        Err(e) => failure_marker(e),
    }
}

/// Register all built-in functions into the Rhai engine.
///
/// `TRANSPOSEBY_RANGE(c1, r1, c2, r2[, by_row])` reads its source block from
/// the shared sheet; the array form `TRANSPOSEBY(arr[, by_row])` takes the
/// values directly (script use). ByRow defaults to false.
pub fn register_builtins(engine: &mut Engine, sheet: Sheet, caller: CallerContext) {
    let sheet_range = sheet.clone();
    let caller_range = caller.clone();
    engine.register_fn(
        "TRANSPOSEBY_RANGE",
        move |c1: i64, r1: i64, c2: i64, r2: i64| -> Dynamic {
            match read_block(&sheet_range, c1, r1, c2, r2) {
                Some(source) => transpose_into_caller(&source, &caller_range, false),
                None => error_marker(CellError::Ref),
            }
        },
    );

    let sheet_range_flag = sheet.clone();
    let caller_range_flag = caller.clone();
    engine.register_fn(
        "TRANSPOSEBY_RANGE",
        move |c1: i64, r1: i64, c2: i64, r2: i64, by_row: bool| -> Dynamic {
            match read_block(&sheet_range_flag, c1, r1, c2, r2) {
                Some(source) => transpose_into_caller(&source, &caller_range_flag, by_row),
                None => error_marker(CellError::Ref),
            }
        },
    );

    // Direct array form for script use: the source is a flat array treated
    // as a single row. Unsupported element types degrade to #REF!.
    let caller_arr = caller.clone();
    engine.register_fn("TRANSPOSEBY", move |values: rhai::Array| -> Dynamic {
        match array_to_row(&values) {
            Some(source) => transpose_into_caller(&source, &caller_arr, false),
            None => error_marker(CellError::Ref),
        }
    });

    let caller_arr_flag = caller.clone();
    engine.register_fn(
        "TRANSPOSEBY",
        move |values: rhai::Array, by_row: bool| -> Dynamic {
            match array_to_row(&values) {
                Some(source) => transpose_into_caller(&source, &caller_arr_flag, by_row),
                None => error_marker(CellError::Ref),
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell_ref::CellRef;
    use crate::sheet::{Selection, new_caller_context, new_sheet, set_caller};
    use respan_core::CellValue;

    fn engine_with(
        cells: &[((usize, usize), CellValue)],
        selection: Option<Selection>,
    ) -> Engine {
        let sheet = new_sheet();
        for ((col, row), value) in cells {
            sheet.insert(CellRef::new(*col, *row), value.clone());
        }
        let caller = new_caller_context();
        set_caller(&caller, selection);
        let mut engine = Engine::new();
        register_builtins(&mut engine, sheet, caller);
        engine
    }

    fn texts(value: &Dynamic) -> Vec<Vec<String>> {
        value
            .clone()
            .cast::<rhai::Array>()
            .iter()
            .map(|row| {
                row.clone()
                    .cast::<rhai::Array>()
                    .iter()
                    .map(|v| v.to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_range_rhai_name_mapping() {
        assert_eq!(range_rhai_name("TRANSPOSEBY"), Some("TRANSPOSEBY_RANGE"));
        assert_eq!(range_rhai_name("NOPE"), None);
    }

    #[test]
    fn test_builtin_metadata_marks_by_row_optional() {
        let spec = &RANGE_BUILTINS[0];
        assert_eq!(spec.args.len(), 2);
        assert!(!spec.args[0].optional);
        assert!(spec.args[1].optional);
    }

    #[test]
    fn test_transpose_range_spills_into_selection() {
        let engine = engine_with(
            &[
                ((0, 0), CellValue::text("a")),
                ((0, 1), CellValue::text("b")),
                ((0, 2), CellValue::text("c")),
                ((0, 3), CellValue::text("d")),
            ],
            Some(Selection::new(0, 0, 1, 1)),
        );

        let result: Dynamic = engine.eval("TRANSPOSEBY_RANGE(0, 0, 0, 3)").unwrap();
        assert_eq!(texts(&result), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_transpose_range_by_row() {
        let engine = engine_with(
            &[
                ((0, 0), CellValue::text("a")),
                ((0, 1), CellValue::text("b")),
                ((0, 2), CellValue::text("c")),
                ((0, 3), CellValue::text("d")),
            ],
            Some(Selection::new(0, 0, 1, 1)),
        );

        let result: Dynamic = engine.eval("TRANSPOSEBY_RANGE(0, 0, 0, 3, true)").unwrap();
        assert_eq!(texts(&result), vec![vec!["a", "c"], vec!["b", "d"]]);
    }

    #[test]
    fn test_single_cell_selection_returns_ref_marker() {
        let engine = engine_with(
            &[((0, 0), CellValue::text("a"))],
            Some(Selection::new(0, 0, 0, 0)),
        );

        let result: String = engine.eval("TRANSPOSEBY_RANGE(0, 0, 0, 3)").unwrap();
        assert_eq!(result, "#REF!");
    }

    #[test]
    fn test_two_dimensional_source_returns_value_marker() {
        let engine = engine_with(
            &[
                ((0, 0), CellValue::Number(1.0)),
                ((1, 0), CellValue::Number(2.0)),
                ((0, 1), CellValue::Number(3.0)),
                ((1, 1), CellValue::Number(4.0)),
            ],
            Some(Selection::new(0, 0, 3, 0)),
        );

        let result: String = engine.eval("TRANSPOSEBY_RANGE(0, 0, 1, 1)").unwrap();
        assert_eq!(result, "#VALUE!");
    }

    #[test]
    fn test_negative_range_coordinate_returns_ref_marker() {
        let engine = engine_with(
            &[((0, 0), CellValue::text("a"))],
            Some(Selection::new(0, 0, 1, 1)),
        );

        let result: String = engine.eval("TRANSPOSEBY_RANGE(0, -1, 0, 0)").unwrap();
        assert_eq!(result, "#REF!");

        let result: String = engine
            .eval("TRANSPOSEBY_RANGE(-2, 0, 0, 3, true)")
            .unwrap();
        assert_eq!(result, "#REF!");
    }

    #[test]
    fn test_no_caller_selection_returns_empty_spill() {
        let engine = engine_with(&[((0, 0), CellValue::text("a"))], None);

        let result: rhai::Array = engine.eval("TRANSPOSEBY_RANGE(0, 0, 0, 3)").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_array_form() {
        let engine = engine_with(&[], Some(Selection::new(0, 0, 1, 1)));

        let result: Dynamic = engine
            .eval(r#"TRANSPOSEBY(["a", "b", "c", "d"], true)"#)
            .unwrap();
        assert_eq!(texts(&result), vec![vec!["a", "c"], vec!["b", "d"]]);
    }

    #[test]
    fn test_array_form_unsupported_element_degrades_to_ref_marker() {
        let engine = engine_with(&[], Some(Selection::new(0, 0, 1, 1)));

        let result: String = engine.eval(r#"TRANSPOSEBY([#{}, "b"])"#).unwrap();
        assert_eq!(result, "#REF!");
    }

    #[test]
    fn test_short_source_pads_with_empty_text() {
        let engine = engine_with(
            &[
                ((0, 0), CellValue::text("a")),
                ((0, 1), CellValue::text("b")),
            ],
            Some(Selection::new(0, 0, 1, 1)),
        );

        let result: Dynamic = engine.eval("TRANSPOSEBY_RANGE(0, 0, 0, 1)").unwrap();
        assert_eq!(texts(&result), vec![vec!["a", "b"], vec!["", ""]]);
    }
}
