//! Formula preprocessing.
//!
//! Before a formula can be evaluated by Rhai, sheet-facing range calls like
//! `TRANSPOSEBY(A1:A4)` must be rewritten into their registered native form
//! `TRANSPOSEBY_RANGE(0, 0, 0, 3)` (col/row, 0-indexed). Trailing arguments
//! after the range (the optional ByRow flag) are carried through untouched.

use crate::builtins::RANGE_BUILTINS;
use crate::cell_ref::CellRef;
use regex::Regex;
use std::sync::OnceLock;

/// Regex that matches sheet-facing range calls like `TRANSPOSEBY(A1:B5)`.
///
/// Captures:
/// - group 1: function name
/// - group 2: start cell ref
/// - group 3: end cell ref
/// - group 4: trailing arguments, including the leading comma (optional)
pub fn range_fn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let names = RANGE_BUILTINS
            .iter()
            .map(|b| b.sheet_name)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"\b({})\(([A-Za-z]+[0-9]+):([A-Za-z]+[0-9]+)(\s*,[^)]*)?\)",
            names
        ))
        .expect("range builtin regex must compile")
    })
}

/// Rewrite all sheet-facing range calls in `formula` into their native
/// registered form. Calls whose references fail to parse (e.g. a column
/// beyond the representable range) are left unchanged and will surface as an
/// evaluation error.
pub fn preprocess_formula(formula: &str) -> String {
    range_fn_re()
        .replace_all(formula, |caps: &regex::Captures| {
            let full = &caps[0];
            let (Some(start), Some(end)) =
                (CellRef::from_str(&caps[2]), CellRef::from_str(&caps[3]))
            else {
                return full.to_string();
            };
            let rest = caps.get(4).map(|m| m.as_str()).unwrap_or("");
            let rhai_name = crate::builtins::range_rhai_name(&caps[1]).unwrap_or(&caps[1]);
            format!(
                "{}({}, {}, {}, {}{})",
                rhai_name, start.col, start.row, end.col, end.row, rest
            )
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_range_call() {
        assert_eq!(
            preprocess_formula("TRANSPOSEBY(A1:A4)"),
            "TRANSPOSEBY_RANGE(0, 0, 0, 3)"
        );
    }

    #[test]
    fn test_carries_trailing_arguments() {
        assert_eq!(
            preprocess_formula("TRANSPOSEBY(A1:D1, true)"),
            "TRANSPOSEBY_RANGE(0, 0, 3, 0, true)"
        );
    }

    #[test]
    fn test_matches_uppercase_only() {
        let formula = "transposeby(A1:A4)";
        assert_eq!(preprocess_formula(formula), formula);
    }

    #[test]
    fn test_leaves_unparseable_reference_untouched() {
        let huge = format!("TRANSPOSEBY({}1:A4)", "Z".repeat(40));
        assert_eq!(preprocess_formula(&huge), huge);
    }

    #[test]
    fn test_rewrites_inside_larger_expression() {
        assert_eq!(
            preprocess_formula("len(TRANSPOSEBY(B2:B3))"),
            "len(TRANSPOSEBY_RANGE(1, 1, 1, 2))"
        );
    }
}
