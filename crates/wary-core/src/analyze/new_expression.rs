use crate::checker::Checker;
use crate::rule_set::Rule;
use crate::syntax::ast::NewExpr;

use crate::lints::security::no_eval::no_eval::no_eval_new;
use crate::lints::security::redos_regex::redos_regex::redos_regex_constructor;
use crate::lints::security::unsafe_regex::unsafe_regex::unsafe_regex_new;

pub fn new_expression(new_expr: &NewExpr, checker: &mut Checker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::NoEval) {
        let diagnostic = no_eval_new(new_expr, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::UnsafeRegex) {
        let diagnostic = unsafe_regex_new(new_expr, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::RedosRegex) {
        let diagnostic =
            redos_regex_constructor(&new_expr.callee, &new_expr.arguments, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    Ok(())
}
