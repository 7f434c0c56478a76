use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::utils::comment_removal_span;

/// ## What it does
///
/// Reports `wary-ignore` directives that no longer suppress anything, with a
/// safe fix that deletes the stale comment.
///
/// ## Why is this bad?
///
/// A suppression that outlives the finding it silenced hides the next real
/// finding on that line. Removing it keeps the suppression inventory honest.
pub fn outdated_suppression(checker: &Checker) -> anyhow::Result<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();

    for directive in checker.suppression.unused_directives() {
        let removal = comment_removal_span(checker.source, directive.comment_span);
        diagnostics.push(Diagnostic::new(
            ViolationData::new(
                "outdated_suppression".to_string(),
                "outdatedSuppression",
                format!(
                    "Suppression of `{}` no longer matches any finding.",
                    directive.rule.name()
                ),
                Some("Delete the stale comment.".to_string()),
            ),
            directive.comment_span,
            Fix {
                content: String::new(),
                start: removal.start,
                end: removal.end,
                to_skip: false,
            },
        ));
    }

    Ok(diagnostics)
}
