//! Comment-based suppression for lint rules.
//!
//! This module extracts `// wary-ignore` comments from a parsed file and
//! decides which diagnostics should be dropped. A plain `wary-ignore <rule>`
//! directive covers its own line and the directly following line; the
//! `-file` form covers the whole file.

use crate::directive::{DirectiveParseResult, LintDirective, parse_comment_directive};
use crate::rule_set::Rule;
use crate::syntax::Span;
use crate::syntax::ast::{Comment, CommentKind, Program};
use crate::utils::{find_new_lines, find_row};

/// One valid suppression directive found in the file.
#[derive(Debug, Clone)]
pub struct SuppressionDirective {
    pub rule: Rule,
    pub file_wide: bool,
    /// 0-indexed line the comment sits on.
    pub line: usize,
    pub comment_span: Span,
    /// Set when the directive actually suppressed a diagnostic.
    pub used: bool,
}

/// A comment that tried to be a directive but is malformed. These are inert:
/// they suppress nothing.
#[derive(Debug, Clone)]
pub struct InvalidDirective {
    pub kind: DirectiveParseResult,
    pub comment_span: Span,
}

/// Tracks which diagnostics should be dropped based on comments.
#[derive(Debug, Clone, Default)]
pub struct SuppressionManager {
    pub directives: Vec<SuppressionDirective>,
    pub invalid: Vec<InvalidDirective>,
    /// Line comments as (0-indexed line, body text), kept for the
    /// intentional-comment allowance some rules offer.
    line_comments: Vec<(usize, String)>,
    new_lines: Vec<usize>,
}

impl SuppressionManager {
    pub fn from_program(program: &Program, source: &str) -> Self {
        let new_lines = find_new_lines(source);
        let mut manager = Self {
            directives: Vec::new(),
            invalid: Vec::new(),
            line_comments: Vec::new(),
            new_lines,
        };

        for comment in &program.comments {
            manager.record_comment(comment);
        }

        manager
    }

    fn record_comment(&mut self, comment: &Comment) {
        let line = find_row(comment.span.start, &self.new_lines);
        if comment.kind == CommentKind::Line {
            self.line_comments.push((line, comment.text.clone()));
        }

        match parse_comment_directive(&comment.text) {
            Some(DirectiveParseResult::Valid(directive)) => {
                let (rule, file_wide) = match directive {
                    LintDirective::Ignore(rule) => (rule, false),
                    LintDirective::IgnoreFile(rule) => (rule, true),
                };
                self.directives.push(SuppressionDirective {
                    rule,
                    file_wide,
                    line,
                    comment_span: comment.span,
                    used: false,
                });
            }
            Some(kind) => {
                self.invalid.push(InvalidDirective { kind, comment_span: comment.span });
            }
            None => {}
        }
    }

    /// Whether a diagnostic for `rule` starting at byte `offset` is covered
    /// by a directive. Matching directives are marked used.
    pub fn is_suppressed(&mut self, rule: Rule, offset: usize) -> bool {
        let line = find_row(offset, &self.new_lines);
        let mut suppressed = false;
        for directive in &mut self.directives {
            if directive.rule != rule {
                continue;
            }
            if directive.file_wide || directive.line == line || directive.line + 1 == line {
                directive.used = true;
                suppressed = true;
            }
        }
        suppressed
    }

    /// Whether a line comment within one line of byte `offset` contains any
    /// of `keywords` (case-insensitive substring match). Used by rules with
    /// an `allow-with-comment` option.
    pub fn has_intentional_comment_near(&self, offset: usize, keywords: &[String]) -> bool {
        let line = find_row(offset, &self.new_lines);
        self.line_comments.iter().any(|(comment_line, text)| {
            comment_line.abs_diff(line) <= 1 && {
                let lowered = text.to_lowercase();
                keywords.iter().any(|keyword| lowered.contains(&keyword.to_lowercase()))
            }
        })
    }

    /// Directives that suppressed nothing, for the `outdated_suppression`
    /// rule to report once all other diagnostics are filtered.
    pub fn unused_directives(&self) -> impl Iterator<Item = &SuppressionDirective> {
        self.directives.iter().filter(|directive| !directive.used)
    }
}
