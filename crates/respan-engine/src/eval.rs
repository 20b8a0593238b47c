//! Rhai engine creation and formula evaluation.

use crate::builtins::register_builtins;
use crate::preprocess::preprocess_formula;
use crate::sheet::{CallerContext, Sheet};
use rhai::{Dynamic, Engine, EvalAltResult};

/// Create a Rhai engine with the respan built-ins registered against the
/// given sheet and caller context.
pub fn create_engine(sheet: Sheet, caller: CallerContext) -> Engine {
    let mut engine = Engine::new();
    register_builtins(&mut engine, sheet, caller);
    engine
}

/// Preprocess and evaluate a formula. A leading `=` is accepted and
/// stripped, so both `=TRANSPOSEBY(A1:A4)` and `TRANSPOSEBY(A1:A4)` work.
pub fn eval_formula(engine: &Engine, formula: &str) -> Result<Dynamic, Box<EvalAltResult>> {
    let formula = formula.strip_prefix('=').unwrap_or(formula);
    engine.eval(&preprocess_formula(formula))
}
