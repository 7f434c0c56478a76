use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::ast::CallExpr;
use crate::utils::{is_static_string, static_callee_path};

/// ## What it does
///
/// Checks for `require()` calls whose module path is not a compile-time
/// string.
///
/// ## Why is this bad?
///
/// `require(expr)` loads whatever module the expression evaluates to at
/// runtime. Static analysis, bundlers, and reviewers cannot see what gets
/// loaded, and attacker-influenced input can traverse to arbitrary files.
///
/// ## Example
///
/// ```js
/// const handler = require(`./handlers/${name}`);
/// ```
///
/// Config and build scripts legitimately do this; list those contexts in
/// `allow-contexts` to skip them.
pub fn dynamic_require(call: &CallExpr, checker: &Checker) -> anyhow::Result<Option<Diagnostic>> {
    if static_callee_path(&call.callee).as_deref() != Some("require")
        || checker.scopes.is_shadowed("require")
    {
        return Ok(None);
    }
    let Some(argument) = call.arguments.first() else {
        return Ok(None);
    };
    if is_static_string(argument, true) {
        return Ok(None);
    }
    if checker
        .rule_options
        .dynamic_require
        .allow_contexts
        .contains(&checker.file_context)
    {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(
        ViolationData::new(
            "dynamic_require".to_string(),
            "dynamicRequire",
            "`require()` with a dynamic module path loads code the linter cannot see.".to_string(),
            Some("Require a fixed set of modules, or map names through an allowlist.".to_string()),
        ),
        call.span,
        Fix::empty(),
    )))
}
