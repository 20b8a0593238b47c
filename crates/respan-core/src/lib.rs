//! respan-core - cell-value model and redistribution algorithm.
//!
//! This crate is the pure half of respan: it knows nothing about the
//! scripting host. It provides:
//!
//! - [`CellValue`], [`CellError`] - the tagged cell-value variant
//! - [`Grid`] - a dense 2-D block of cell values, with in-place fill
//! - [`redistribute`] - re-flow a single row/column into a target grid,
//!   wrapping at row/column boundaries

pub mod error;
pub mod grid;
pub mod redistribute;
pub mod value;

pub use error::{RespanError, Result};
pub use grid::Grid;
pub use redistribute::redistribute;
pub use value::{CellError, CellValue};
