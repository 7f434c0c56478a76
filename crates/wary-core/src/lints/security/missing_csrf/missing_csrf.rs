use crate::checker::Checker;
use crate::context::PatternSet;
use crate::diagnostic::{Diagnostic, Fix, Suggestion, ViolationData};
use crate::syntax::ast::{CallExpr, Expr};

/// ## What it does
///
/// Checks Express-style route registrations for state-changing methods
/// (`app.post(...)`, `router.delete(...)`, ...) that have no CSRF
/// middleware anywhere in their handler chain.
///
/// ## Why is this bad?
///
/// A state-changing endpoint without CSRF protection can be triggered from
/// any third-party page the victim visits, with the victim's cookies
/// attached.
///
/// ## Example
///
/// ```js
/// app.post("/transfer", handler);
/// ```
///
/// Use instead:
/// ```js
/// app.post("/transfer", csrf(), handler);
/// ```
///
/// Any argument after the path counts, whether it is a middleware call
/// (`csrf()`), a bare reference (`csrfProtection`), or sits before or after
/// other middleware. The accepted names come from `middleware-patterns`.
/// The rule carries a suggestion that inserts `csrf(), ` before the final
/// handler; it is not auto-applied because the middleware still has to be
/// imported and configured.
pub fn missing_csrf(call: &CallExpr, checker: &Checker) -> anyhow::Result<Option<Diagnostic>> {
    let options = &checker.rule_options.missing_csrf;

    let Expr::Member(callee) = call.callee.unwrap_parens() else {
        return Ok(None);
    };
    let Some(method) = callee.static_property() else {
        return Ok(None);
    };
    if !options.route_methods.iter().any(|candidate| candidate == method) {
        return Ok(None);
    }
    let Some(object) = callee.object.as_identifier() else {
        return Ok(None);
    };
    if !options.object_names.iter().any(|candidate| candidate == &object.name) {
        return Ok(None);
    }

    // Needs at least a path and one handler to be a route registration.
    if call.arguments.len() < 2 {
        return Ok(None);
    }
    let handlers = &call.arguments[1..];
    if handlers
        .iter()
        .any(|handler| is_csrf_middleware(handler, &options.middleware_patterns))
    {
        return Ok(None);
    }
    let Some(last_handler) = call.arguments.last() else {
        return Ok(None);
    };

    let insert_at = last_handler.span().start;
    let suggestion = Suggestion {
        message_id: "addCsrfMiddleware",
        body: "Add `csrf()` before the final handler.".to_string(),
        fix: Fix {
            content: "csrf(), ".to_string(),
            start: insert_at,
            end: insert_at,
            to_skip: false,
        },
    };

    Ok(Some(
        Diagnostic::new(
            ViolationData::new(
                "missing_csrf".to_string(),
                "missingCsrfProtection",
                format!("This `{method}` route has no CSRF middleware in its handler chain."),
                None,
            ),
            call.span,
            Fix::empty(),
        )
        .with_suggestion(suggestion),
    ))
}

/// A handler argument counts as CSRF middleware whether it is invoked
/// (`csrf()`), referenced (`csrfProtection`), or reached through a member
/// (`security.verifyCsrf`).
fn is_csrf_middleware(handler: &Expr, patterns: &PatternSet) -> bool {
    match handler.unwrap_parens() {
        Expr::Call(call) => match call.callee.unwrap_parens() {
            Expr::Identifier(name) => patterns.matches(&name.name),
            Expr::Member(member) => {
                member.static_property().is_some_and(|name| patterns.matches(name))
            }
            _ => false,
        },
        Expr::Identifier(name) => patterns.matches(&name.name),
        Expr::Member(member) => {
            member.static_property().is_some_and(|name| patterns.matches(name))
        }
        _ => false,
    }
}
