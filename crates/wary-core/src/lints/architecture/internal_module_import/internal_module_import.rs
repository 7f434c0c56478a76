use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, Suggestion, ViolationData};
use crate::rule_options::internal_module_import::ImportStrategy;
use crate::syntax::Span;

/// ## What it does
///
/// Checks imports (and static `require()` calls) that reach deeper into a
/// package than `max-depth` path segments allows. With the default depth of
/// 0, `lodash/get` is already flagged.
///
/// ## Why is this bad?
///
/// A package's deep paths are internal layout, not API. They move or
/// disappear between minor versions, and importing them couples the
/// project to implementation detail the package never promised.
///
/// ## Example
///
/// ```js
/// import get from 'lodash/get';
/// ```
///
/// Use instead:
/// ```js
/// import get from 'lodash';
/// ```
///
/// `strategy` decides what happens: `warn` only reports, `autofix` rewrites
/// the path to the package root (preserving quote style), `suggest` offers
/// the same rewrite without applying it. Packages whose deep paths are
/// public API (e.g. `lodash/fp`) belong in `allow`.
pub fn internal_module_import(
    module: &str,
    range: Span,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    // Relative and absolute paths are deep_relative_import's department.
    if module.starts_with('.') || module.starts_with('/') {
        return Ok(None);
    }
    let options = &checker.rule_options.internal_module_import;
    if options.allow.matches(module) {
        return Ok(None);
    }

    let segments: Vec<&str> = module.split('/').filter(|segment| !segment.is_empty()).collect();
    // Scoped packages occupy two segments: `@scope/name`.
    let package_len = if module.starts_with('@') { 2 } else { 1 };
    if segments.len() < package_len {
        return Ok(None);
    }
    let depth = segments.len() - package_len;
    if depth <= options.max_depth {
        return Ok(None);
    }
    let package = segments[..package_len].join("/");

    let quote = range.text(checker.source).chars().next().unwrap_or('\'');
    let rewrite = Fix {
        content: format!("{quote}{package}{quote}"),
        start: range.start,
        end: range.end,
        to_skip: false,
    };

    let message = ViolationData::new(
        "internal_module_import".to_string(),
        "internalModuleImport",
        format!("`{module}` reaches inside `{package}`; deep paths are not stable API."),
        Some(format!("Import from `{package}` directly.")),
    );

    let diagnostic = match options.strategy {
        ImportStrategy::Warn => Diagnostic::new(message, range, Fix::empty()),
        ImportStrategy::Autofix => Diagnostic::new(message, range, rewrite),
        ImportStrategy::Suggest => Diagnostic::new(message, range, Fix::empty())
            .with_suggestion(Suggestion {
                message_id: "importFromRoot",
                body: format!("Import from `{package}` instead."),
                fix: rewrite,
            }),
    };

    Ok(Some(diagnostic))
}
