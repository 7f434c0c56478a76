use crate::checker::Checker;
use crate::rule_set::Rule;
use crate::syntax::ast::MemberExpr;

use crate::lints::security::no_document_cookie::no_document_cookie::document_cookie_read;

pub fn member(member_expr: &MemberExpr, checker: &mut Checker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::NoDocumentCookie) {
        let diagnostic = document_cookie_read(member_expr, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    Ok(())
}
