use crate::checker::Checker;
use crate::rule_set::Rule;
use crate::syntax::ast::AssignExpr;

use crate::lints::security::no_document_cookie::no_document_cookie::document_cookie_write;
use crate::lints::security::object_injection::object_injection::object_injection;

pub fn assignment(assign: &AssignExpr, checker: &mut Checker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::NoDocumentCookie) {
        let diagnostic = document_cookie_write(assign, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::ObjectInjection) {
        let diagnostic = object_injection(assign, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    Ok(())
}
