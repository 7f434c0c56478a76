use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::ast::{AssignExpr, Expr, MemberExpr};
use crate::utils::static_callee_path;

/// ## What it does
///
/// Checks for assignments to `document.cookie`, and (with
/// `allow-reading = false`) for reads of it.
///
/// ## Why is this bad?
///
/// Writing `document.cookie` directly encodes nothing, sets no flags, and
/// silently produces broken cookies; security attributes like `Secure` or
/// `SameSite` are easy to forget. Reads get the whole cookie string,
/// including values the code has no business seeing.
///
/// ## Example
///
/// ```js
/// document.cookie = "session=" + token;
/// ```
fn is_document_cookie(member: &MemberExpr, checker: &Checker) -> bool {
    if member.static_property() != Some("cookie") {
        return false;
    }
    match static_callee_path(&member.object) {
        Some(path) => {
            matches!(path.as_str(), "document" | "window.document" | "globalThis.document")
                && !(path == "document" && checker.scopes.is_shadowed("document"))
        }
        None => false,
    }
}

pub fn document_cookie_write(
    assign: &AssignExpr,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    let Expr::Member(target) = assign.target.unwrap_parens() else {
        return Ok(None);
    };
    if !is_document_cookie(target, checker) {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(
        ViolationData::new(
            "no_document_cookie".to_string(),
            "noDocumentCookie",
            "Assigning to `document.cookie` directly is error-prone.".to_string(),
            Some("Use the Cookie Store API or a cookie library instead.".to_string()),
        ),
        assign.span,
        Fix::empty(),
    )))
}

pub fn document_cookie_read(
    member: &MemberExpr,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    if checker.rule_options.no_document_cookie.allow_reading {
        return Ok(None);
    }
    if !is_document_cookie(member, checker) {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(
        ViolationData::new(
            "no_document_cookie".to_string(),
            "documentCookieRead",
            "Reading `document.cookie` exposes every cookie on the page.".to_string(),
            Some("Use the Cookie Store API or a cookie library instead.".to_string()),
        ),
        member.span,
        Fix::empty(),
    )))
}
