use crate::analyze::expression::check_expression;
use crate::analyze::statement::check_statement;
use crate::checker::Checker;
use crate::rule_set::Rule;
use crate::syntax::Span;
use crate::syntax::ast::{
    ArrowBody, ArrowFunction, ClassMethod, FunctionDecl, FunctionExpr, Pattern, Stmt,
};

use crate::lints::quality::max_complexity::max_complexity::{FunctionBody, max_complexity};

/// Run the per-function rules and recurse into the body with a fresh scope.
fn check_function_body(
    label: &str,
    span: Span,
    params: &[Pattern],
    body: &[Stmt],
    checker: &mut Checker,
) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::MaxComplexity) {
        let diagnostic = max_complexity(label, span, FunctionBody::Block(body), checker)?;
        checker.report_diagnostic(diagnostic);
    }

    checker.scopes.push(params, body);
    for stmt in body {
        check_statement(stmt, checker)?;
    }
    checker.scopes.pop();
    Ok(())
}

pub fn check_function_decl(function: &FunctionDecl, checker: &mut Checker) -> anyhow::Result<()> {
    check_function_body(
        &format!("Function `{}`", function.name.name),
        function.span,
        &function.params,
        &function.body,
        checker,
    )
}

pub fn check_function_expr(function: &FunctionExpr, checker: &mut Checker) -> anyhow::Result<()> {
    let label = match &function.name {
        Some(name) => format!("Function `{}`", name.name),
        None => "This function".to_string(),
    };
    check_function_body(&label, function.span, &function.params, &function.body, checker)
}

pub fn check_arrow(arrow: &ArrowFunction, checker: &mut Checker) -> anyhow::Result<()> {
    match &arrow.body {
        ArrowBody::Block(body) => {
            check_function_body("This function", arrow.span, &arrow.params, body, checker)
        }
        ArrowBody::Expr(expression) => {
            if checker.is_rule_enabled(Rule::MaxComplexity) {
                let diagnostic = max_complexity(
                    "This function",
                    arrow.span,
                    FunctionBody::Expr(expression),
                    checker,
                )?;
                checker.report_diagnostic(diagnostic);
            }
            checker.scopes.push(&arrow.params, &[]);
            check_expression(expression, checker)?;
            checker.scopes.pop();
            Ok(())
        }
    }
}

pub fn check_class_method(method: &ClassMethod, checker: &mut Checker) -> anyhow::Result<()> {
    check_function_body(
        &format!("Method `{}`", method.name),
        method.span,
        &method.params,
        &method.body,
        checker,
    )
}
