use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::Span;
use crate::syntax::ast::{CallExpr, Expr, NewExpr};
use crate::utils::{is_static_string, static_callee_path};

const EVAL_PATHS: &[&str] = &["eval", "window.eval", "globalThis.eval"];
const FUNCTION_PATHS: &[&str] = &["Function", "window.Function", "globalThis.Function"];

fn build(message_id: &'static str, body: String, range: Span) -> Diagnostic {
    Diagnostic::new(
        ViolationData::new(
            "no_eval".to_string(),
            message_id,
            body,
            Some("Pass data, not code: use `JSON.parse()` or a lookup table instead.".to_string()),
        ),
        range,
        Fix::empty(),
    )
}

fn intentionally_allowed(range: Span, checker: &Checker) -> bool {
    let options = &checker.rule_options.no_eval;
    options.allow_with_comment
        && checker
            .suppression
            .has_intentional_comment_near(range.start, &options.intentional_keywords)
}

fn function_constructor(
    callee: &Expr,
    arguments: &[Expr],
    range: Span,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    let Some(path) = static_callee_path(callee) else {
        return Ok(None);
    };
    if !FUNCTION_PATHS.contains(&path.as_str()) {
        return Ok(None);
    }
    if path == "Function" && checker.scopes.is_shadowed("Function") {
        return Ok(None);
    }
    // The last argument is the body; earlier ones are parameter names.
    let Some(body) = arguments.last() else {
        return Ok(None);
    };
    if is_static_string(body, true) {
        return Ok(None);
    }
    if intentionally_allowed(range, checker) {
        return Ok(None);
    }

    Ok(Some(build(
        "functionConstructor",
        "The `Function` constructor with a dynamic body is `eval` in disguise.".to_string(),
        range,
    )))
}

/// ## What it does
///
/// Checks for `eval()` with a dynamic argument, `new Function()` with a
/// dynamic body, and any extra functions configured via
/// `additional-functions`.
///
/// ## Why is this bad?
///
/// A dynamic string handed to `eval()` or the `Function` constructor runs
/// with the full privileges of the page or process. If any part of that
/// string can be influenced by a user, this is remote code execution.
///
/// ## Example
///
/// ```js
/// eval(userInput);
/// new Function("data", body)(payload);
/// ```
///
/// `eval("literal")` with a compile-time constant string is not reported,
/// and a local binding named `eval` shadows the global. With
/// `allow-with-comment`, a line comment next to the call containing one of
/// `intentional-keywords` silences the diagnostic.
pub fn no_eval_call(call: &CallExpr, checker: &Checker) -> anyhow::Result<Option<Diagnostic>> {
    let Some(path) = static_callee_path(&call.callee) else {
        return Ok(None);
    };
    let options = &checker.rule_options.no_eval;

    let is_eval = EVAL_PATHS.contains(&path.as_str());
    let is_additional = options.additional_functions.iter().any(|name| *name == path);

    if is_eval || is_additional {
        if !path.contains('.') && checker.scopes.is_shadowed(&path) {
            return Ok(None);
        }
        let Some(argument) = call.arguments.first() else {
            return Ok(None);
        };
        if is_static_string(argument, true) {
            return Ok(None);
        }
        if intentionally_allowed(call.span, checker) {
            return Ok(None);
        }
        return Ok(Some(build(
            "evalWithExpression",
            format!("`{path}()` called with a dynamic argument can execute arbitrary code."),
            call.span,
        )));
    }

    // `Function(...)` without `new` behaves identically to `new Function(...)`.
    function_constructor(&call.callee, &call.arguments, call.span, checker)
}

pub fn no_eval_new(new_expr: &NewExpr, checker: &Checker) -> anyhow::Result<Option<Diagnostic>> {
    function_constructor(&new_expr.callee, &new_expr.arguments, new_expr.span, checker)
}
