//! Host-side cell storage and caller context.
//!
//! The host keeps its cells in a shared sparse map so registered builtins can
//! read them from inside Rhai closures. The caller context carries the
//! destination selection of the array formula currently being evaluated; the
//! host sets it before evaluation and the builtin derives the target grid
//! shape from it.

use crate::cell_ref::CellRef;
use dashmap::DashMap;
use respan_core::CellValue;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Shared sparse cell storage. Absent entries are empty cells.
pub type Sheet = Arc<DashMap<CellRef, CellValue>>;

pub fn new_sheet() -> Sheet {
    Arc::new(DashMap::new())
}

/// The destination rectangle of the formula being evaluated, 0-indexed and
/// inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub row_first: usize,
    pub row_last: usize,
    pub col_first: usize,
    pub col_last: usize,
}

impl Selection {
    pub fn new(col_first: usize, row_first: usize, col_last: usize, row_last: usize) -> Selection {
        Selection {
            row_first: row_first.min(row_last),
            row_last: row_first.max(row_last),
            col_first: col_first.min(col_last),
            col_last: col_first.max(col_last),
        }
    }

    pub fn rows(&self) -> usize {
        self.row_last - self.row_first + 1
    }

    pub fn cols(&self) -> usize {
        self.col_last - self.col_first + 1
    }
}

/// Shared slot for the current caller selection. `None` means no array
/// formula is being evaluated.
pub type CallerContext = Arc<Mutex<Option<Selection>>>;

pub fn new_caller_context() -> CallerContext {
    Arc::new(Mutex::new(None))
}

/// Set the caller selection for the next evaluation.
pub fn set_caller(caller: &CallerContext, selection: Option<Selection>) {
    let mut slot = caller.lock().unwrap();
    *slot = selection;
}
