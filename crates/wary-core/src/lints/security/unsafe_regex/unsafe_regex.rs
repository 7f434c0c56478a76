use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::Span;
use crate::syntax::ast::{CallExpr, Expr, NewExpr};
use crate::utils::{static_callee_path, static_string_value};

const REGEXP_PATHS: &[&str] = &["RegExp", "window.RegExp", "globalThis.RegExp"];

/// ## What it does
///
/// Checks `RegExp(...)` / `new RegExp(...)` construction: a dynamic pattern
/// is reported as such, and a static pattern that does not compile is
/// reported instead of throwing at runtime.
///
/// ## Why is this bad?
///
/// A pattern built from runtime data can be attacker-controlled, turning a
/// harmless match into catastrophic backtracking or an unintended match. A
/// static pattern that fails to compile throws `SyntaxError` the moment the
/// line runs.
///
/// ## Example
///
/// ```js
/// new RegExp(userQuery);
/// new RegExp("[unclosed");
/// ```
///
/// Compilation is checked with a close-enough dialect; JS-only syntax such
/// as lookbehind or backreferences fails to compile here too and reports as
/// invalid.
pub fn unsafe_regex_call(call: &CallExpr, checker: &Checker) -> anyhow::Result<Option<Diagnostic>> {
    check_constructor(&call.callee, &call.arguments, call.span, checker)
}

pub fn unsafe_regex_new(
    new_expr: &NewExpr,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    check_constructor(&new_expr.callee, &new_expr.arguments, new_expr.span, checker)
}

pub(crate) fn is_regexp_constructor(callee: &Expr, checker: &Checker) -> bool {
    match static_callee_path(callee) {
        Some(path) => {
            REGEXP_PATHS.contains(&path.as_str())
                && !(path == "RegExp" && checker.scopes.is_shadowed("RegExp"))
        }
        None => false,
    }
}

fn check_constructor(
    callee: &Expr,
    arguments: &[Expr],
    range: Span,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    if !is_regexp_constructor(callee, checker) {
        return Ok(None);
    }
    let Some(argument) = arguments.first() else {
        return Ok(None);
    };
    // A regex literal argument is already validated by the parser.
    if matches!(argument.unwrap_parens(), Expr::Regex(_)) {
        return Ok(None);
    }

    match static_string_value(argument, true) {
        Some(pattern) => match regex::Regex::new(&pattern) {
            Ok(_) => Ok(None),
            Err(_) => Ok(Some(Diagnostic::new(
                ViolationData::new(
                    "unsafe_regex".to_string(),
                    "invalidRegExp",
                    "This pattern does not compile and will throw `SyntaxError` at runtime."
                        .to_string(),
                    None,
                ),
                range,
                Fix::empty(),
            ))),
        },
        None => Ok(Some(Diagnostic::new(
            ViolationData::new(
                "unsafe_regex".to_string(),
                "dynamicRegExp",
                "`RegExp` built from a dynamic pattern can be attacker-controlled.".to_string(),
                Some("Escape user input before embedding it in a pattern.".to_string()),
            ),
            range,
            Fix::empty(),
        ))),
    }
}
