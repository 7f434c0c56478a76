use std::path::Path;

use crate::context::{FileContext, classify_path};
use crate::diagnostic::Diagnostic;
use crate::rule_options::ResolvedRuleOptions;
use crate::rule_set::{Rule, RuleSet};
use crate::scope::ScopeStack;
use crate::suppression::SuppressionManager;

// The object that collects diagnostics during the tree walk. One per
// analyzed file.
#[derive(Debug)]
pub struct Checker<'a> {
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // A set of rules to apply. Each rule carries metadata about whether it
    // has a safe fix, unsafe fix, or no fix.
    pub rule_set: RuleSet,
    // Per-rule options resolved from configuration
    pub rule_options: ResolvedRuleOptions,
    // Tracks comment-based suppression directives like `// wary-ignore`
    pub suppression: SuppressionManager,
    // Best-effort lexical scopes, for shadowed-builtin detection
    pub scopes: ScopeStack,
    // The source text, for quote-style preservation and fix building
    pub source: &'a str,
    // The file being checked
    pub path: &'a Path,
    // Where the file lives (tests/config/build/runtime)
    pub file_context: FileContext,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(
        source: &'a str,
        path: &'a Path,
        suppression: SuppressionManager,
        rule_options: ResolvedRuleOptions,
    ) -> Self {
        Self {
            diagnostics: vec![],
            rule_set: RuleSet::empty(),
            rule_options,
            suppression,
            scopes: ScopeStack::new(),
            source,
            path,
            file_context: classify_path(path),
        }
    }

    // This takes an Option<Diagnostic> because each lint rule reports a
    // Some(Diagnostic) or None.
    pub(crate) fn report_diagnostic(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }

    // For rules that can flag several places in one node.
    pub(crate) fn report_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.rule_set.contains(&rule)
    }
}
