use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::Span;

/// ## What it does
///
/// Checks relative imports that climb more than `max-depth` (default 2)
/// `../` segments.
///
/// ## Why is this bad?
///
/// `../../../utils/log` encodes the directory layout of three ancestor
/// levels into this file. Moving either end silently breaks the path, and
/// the import says nothing about which part of the codebase it lands in.
///
/// ## Example
///
/// ```js
/// import log from '../../../shared/log';
/// ```
///
/// Prefer a path alias (`#shared/log`) or moving the shared code closer.
pub fn deep_relative_import(
    module: &str,
    range: Span,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    if !module.starts_with('.') {
        return Ok(None);
    }
    let depth = module.split('/').filter(|segment| *segment == "..").count();
    let max_depth = checker.rule_options.deep_relative_import.max_depth;
    if depth <= max_depth {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(
        ViolationData::new(
            "deep_relative_import".to_string(),
            "deepRelativeImport",
            format!("This import climbs {depth} directories (max allowed {max_depth})."),
            Some("Add a path alias or move the shared module closer.".to_string()),
        ),
        range,
        Fix::empty(),
    )))
}
