//! respan-engine - host-integration layer for the respan core.
//!
//! This crate is the glue between the pure redistribution algorithm in
//! `respan-core` and a Rhai-scripted spreadsheet host:
//!
//! - [`CellRef`] - A1 notation <-> 0-indexed col/row
//! - [`Sheet`], [`Selection`], [`CallerContext`] - host-side cell storage and
//!   the destination selection of the formula being evaluated
//! - [`preprocess_formula`] - rewrite `TRANSPOSEBY(A1:B4, ...)` into the
//!   registered native call
//! - [`register_builtins`] / [`create_engine`] - wire the builtin into a
//!   Rhai engine
//! - [`marshal`] - Dynamic <-> CellValue conversion and range reads

pub mod builtins;
pub mod cell_ref;
pub mod eval;
pub mod marshal;
pub mod preprocess;
pub mod sheet;

pub use builtins::{ArgSpec, RANGE_BUILTINS, RangeBuiltin, range_rhai_name, register_builtins};
pub use cell_ref::{CellRef, parse_range};
pub use eval::{create_engine, eval_formula};
pub use preprocess::preprocess_formula;
pub use sheet::{CallerContext, Selection, Sheet, new_caller_context, new_sheet, set_caller};

pub use respan_core::{CellError, CellValue, Grid, RespanError, redistribute};
pub use rhai::{Dynamic, Engine};
