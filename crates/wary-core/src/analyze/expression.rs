use crate::analyze::assignment::assignment;
use crate::analyze::call::call;
use crate::analyze::function::{check_arrow, check_function_expr};
use crate::analyze::member::member;
use crate::analyze::new_expression::new_expression;
use crate::checker::Checker;
use crate::rule_set::Rule;
use crate::syntax::ast::{Expr, MemberProp};

use crate::lints::security::redos_regex::redos_regex::redos_regex_literal;

pub fn check_expression(expr: &Expr, checker: &mut Checker) -> anyhow::Result<()> {
    match expr {
        Expr::Call(call_expr) => {
            call(call_expr, checker)?;
            check_expression(&call_expr.callee, checker)?;
            for argument in &call_expr.arguments {
                check_expression(argument, checker)?;
            }
        }
        Expr::New(new_expr) => {
            new_expression(new_expr, checker)?;
            check_expression(&new_expr.callee, checker)?;
            for argument in &new_expr.arguments {
                check_expression(argument, checker)?;
            }
        }
        Expr::Assign(assign) => {
            assignment(assign, checker)?;
            // The target itself is a write, not a read: recurse only into
            // its subexpressions so member-read rules don't fire on it.
            match assign.target.as_ref() {
                Expr::Member(target) => {
                    check_expression(&target.object, checker)?;
                    if let MemberProp::Computed(property) = &target.property {
                        check_expression(property, checker)?;
                    }
                }
                other => check_expression(other, checker)?,
            }
            check_expression(&assign.value, checker)?;
        }
        Expr::Member(member_expr) => {
            member(member_expr, checker)?;
            check_expression(&member_expr.object, checker)?;
            if let MemberProp::Computed(property) = &member_expr.property {
                check_expression(property, checker)?;
            }
        }
        Expr::Regex(regex) => {
            if checker.is_rule_enabled(Rule::RedosRegex) {
                let diagnostic = redos_regex_literal(&regex.pattern, regex.span)?;
                checker.report_diagnostic(diagnostic);
            }
        }
        Expr::Function(function) => check_function_expr(function, checker)?,
        Expr::Arrow(arrow) => check_arrow(arrow, checker)?,
        Expr::Template(template) => {
            for expression in &template.expressions {
                check_expression(expression, checker)?;
            }
        }
        Expr::Array(array) => {
            for element in &array.elements {
                check_expression(element, checker)?;
            }
        }
        Expr::Object(object) => {
            for property in &object.properties {
                check_expression(&property.value, checker)?;
            }
        }
        Expr::Unary(unary) => check_expression(&unary.argument, checker)?,
        Expr::Update(update) => check_expression(&update.argument, checker)?,
        Expr::Binary(binary) => {
            check_expression(&binary.left, checker)?;
            check_expression(&binary.right, checker)?;
        }
        Expr::Logical(logical) => {
            check_expression(&logical.left, checker)?;
            check_expression(&logical.right, checker)?;
        }
        Expr::Conditional(conditional) => {
            check_expression(&conditional.test, checker)?;
            check_expression(&conditional.consequent, checker)?;
            check_expression(&conditional.alternate, checker)?;
        }
        Expr::Paren(paren) => check_expression(&paren.expression, checker)?,
        Expr::Spread(spread) => check_expression(&spread.argument, checker)?,
        Expr::Identifier(_)
        | Expr::String(_)
        | Expr::Number(_)
        | Expr::Bool(_)
        | Expr::Null(_) => {}
    }
    Ok(())
}
