use crate::checker::Checker;
use crate::rule_set::Rule;
use crate::syntax::ast::ImportDecl;

use crate::lints::architecture::deep_relative_import::deep_relative_import::deep_relative_import;
use crate::lints::architecture::internal_module_import::internal_module_import::internal_module_import;

pub fn import(decl: &ImportDecl, checker: &mut Checker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::InternalModuleImport) {
        let diagnostic =
            internal_module_import(&decl.source.value, decl.source.span, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::DeepRelativeImport) {
        let diagnostic = deep_relative_import(&decl.source.value, decl.source.span, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    Ok(())
}
