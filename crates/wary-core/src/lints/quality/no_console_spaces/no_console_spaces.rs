use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::ast::{CallExpr, Expr};
use crate::utils::static_callee_path;

const CONSOLE_METHODS: &[&str] = &["log", "info", "warn", "error", "debug"];

/// ## What it does
///
/// Checks string arguments of `console.log` and friends for leading or
/// trailing whitespace and for interior whitespace runs.
///
/// ## Why is this bad?
///
/// `console.log` already inserts a space between arguments, so padding
/// inside the strings produces doubled or ragged spacing in the output.
///
/// ## Example
///
/// ```js
/// console.log(" started ", name);
/// ```
///
/// The fix rewrites each offending argument to a single-quoted, trimmed
/// literal with interior runs collapsed: `console.log('started', name);`.
/// One diagnostic is emitted per offending argument.
pub fn no_console_spaces(
    call: &CallExpr,
    checker: &Checker,
) -> anyhow::Result<Vec<Diagnostic>> {
    let Some(path) = static_callee_path(&call.callee) else {
        return Ok(vec![]);
    };
    let Some(method) = path.strip_prefix("console.") else {
        return Ok(vec![]);
    };
    if !CONSOLE_METHODS.contains(&method) || checker.scopes.is_shadowed("console") {
        return Ok(vec![]);
    }

    let mut diagnostics = Vec::new();
    for argument in &call.arguments {
        let Expr::String(literal) = argument else {
            continue;
        };
        let cleaned = collapse_whitespace(&literal.value);
        if cleaned == literal.value {
            continue;
        }

        diagnostics.push(Diagnostic::new(
            ViolationData::new(
                "no_console_spaces".to_string(),
                "noConsoleSpaces",
                "This console argument carries stray whitespace.".to_string(),
                None,
            ),
            literal.span,
            Fix {
                content: single_quoted(&cleaned),
                start: literal.span.start,
                end: literal.span.end,
                to_skip: false,
            },
        ));
    }
    Ok(diagnostics)
}

/// Trim and collapse every interior whitespace run to one space.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a single-quoted JS string literal for `value`.
fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn collapse_and_quote() {
        assert_eq!(collapse_whitespace("  a   b "), "a b");
        assert_eq!(single_quoted("it's"), "'it\\'s'");
        assert_eq!(single_quoted("a\\b"), "'a\\\\b'");
    }
}
