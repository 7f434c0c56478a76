use crate::checker::Checker;
use crate::context::FileContext;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::ast::{AssignExpr, Expr, MemberProp};

/// ## What it does
///
/// Checks for assignments through a computed member with a dynamic key:
/// `obj[key] = value` where `key` is not a literal.
///
/// ## Why is this bad?
///
/// When `key` comes from user input, the write can land on `__proto__`,
/// `constructor`, or any other property, which is the entry point for
/// prototype pollution and object-injection attacks.
///
/// ## Example
///
/// ```js
/// settings[req.body.key] = req.body.value;
/// ```
///
/// This deliberately stops at the plain `obj[key] = value` shape; keys
/// that flow through aliases or destructuring are not chased. Disabled by
/// default because even this shape is common in safe code; test files are
/// skipped unless `ignore-tests = false`.
pub fn object_injection(
    assign: &AssignExpr,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    if checker.rule_options.object_injection.ignore_tests
        && checker.file_context == FileContext::Tests
    {
        return Ok(None);
    }
    let Expr::Member(target) = assign.target.unwrap_parens() else {
        return Ok(None);
    };
    let MemberProp::Computed(key) = &target.property else {
        return Ok(None);
    };
    if is_literal_key(key) {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(
        ViolationData::new(
            "object_injection".to_string(),
            "objectInjectionSink",
            "Assigning through a dynamic key can reach `__proto__` and pollute the prototype."
                .to_string(),
            Some("Validate the key against a known set, or use a `Map`.".to_string()),
        ),
        assign.span,
        Fix::empty(),
    )))
}

fn is_literal_key(key: &Expr) -> bool {
    match key.unwrap_parens() {
        Expr::String(_) | Expr::Number(_) | Expr::Bool(_) => true,
        Expr::Template(template) => template.expressions.is_empty(),
        _ => false,
    }
}
