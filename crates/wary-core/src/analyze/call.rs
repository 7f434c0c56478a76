use crate::checker::Checker;
use crate::rule_set::Rule;
use crate::syntax::ast::CallExpr;

use crate::lints::architecture::deep_relative_import::deep_relative_import::deep_relative_import;
use crate::lints::architecture::internal_module_import::internal_module_import::internal_module_import;
use crate::lints::quality::no_console_spaces::no_console_spaces::no_console_spaces;
use crate::lints::security::dynamic_require::dynamic_require::dynamic_require;
use crate::lints::security::missing_csrf::missing_csrf::missing_csrf;
use crate::lints::security::no_eval::no_eval::no_eval_call;
use crate::lints::security::redos_regex::redos_regex::redos_regex_constructor;
use crate::lints::security::unsafe_regex::unsafe_regex::unsafe_regex_call;
use crate::utils::{callee_base_name, static_string_value};

pub fn call(call_expr: &CallExpr, checker: &mut Checker) -> anyhow::Result<()> {
    if checker.is_rule_enabled(Rule::NoEval) {
        let diagnostic = no_eval_call(call_expr, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::DynamicRequire) {
        let diagnostic = dynamic_require(call_expr, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::UnsafeRegex) {
        let diagnostic = unsafe_regex_call(call_expr, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::RedosRegex) {
        let diagnostic =
            redos_regex_constructor(&call_expr.callee, &call_expr.arguments, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::MissingCsrf) {
        let diagnostic = missing_csrf(call_expr, checker)?;
        checker.report_diagnostic(diagnostic);
    }
    if checker.is_rule_enabled(Rule::NoConsoleSpaces) {
        let diagnostics = no_console_spaces(call_expr, checker)?;
        checker.report_diagnostics(diagnostics);
    }

    // `require("pkg/internal")` with a static path goes through the same
    // import-depth rules as `import` declarations.
    if callee_base_name(&call_expr.callee).as_deref() == Some("require")
        && !checker.scopes.is_shadowed("require")
        && let Some(argument) = call_expr.arguments.first()
        && let Some(module) = static_string_value(argument, false)
    {
        let argument_span = argument.span();
        if checker.is_rule_enabled(Rule::InternalModuleImport) {
            let diagnostic =
                internal_module_import(&module, argument_span, checker)?;
            checker.report_diagnostic(diagnostic);
        }
        if checker.is_rule_enabled(Rule::DeepRelativeImport) {
            let diagnostic = deep_relative_import(&module, argument_span, checker)?;
            checker.report_diagnostic(diagnostic);
        }
    }

    Ok(())
}
