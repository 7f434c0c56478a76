use crate::checker::Checker;
use crate::rule_set::Rule;

use crate::lints::comments::outdated_suppression::outdated_suppression::outdated_suppression;

/// Document-level pass, run after the tree walk.
///
/// Filters out suppressed diagnostics (marking the directives that did the
/// suppressing as used), then reports directives that suppressed nothing.
/// Order matters: a directive only counts as used once a real diagnostic
/// hit it.
pub fn check_document(checker: &mut Checker) -> anyhow::Result<()> {
    let diagnostics = std::mem::take(&mut checker.diagnostics);
    let suppression = &mut checker.suppression;

    let retained: Vec<_> = diagnostics
        .into_iter()
        .filter(|diagnostic| {
            match Rule::from_name(&diagnostic.message.name) {
                Some(rule) => !suppression.is_suppressed(rule, diagnostic.range.start),
                None => true,
            }
        })
        .collect();
    checker.diagnostics = retained;

    if checker.is_rule_enabled(Rule::OutdatedSuppression) {
        let diagnostics = outdated_suppression(checker)?;
        checker.report_diagnostics(diagnostics);
    }

    Ok(())
}
