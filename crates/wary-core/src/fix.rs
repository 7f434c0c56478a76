use serde::Serialize;

use crate::diagnostic::Diagnostic;

/// A single textual replacement produced by a rule.
///
/// `start`/`end` are byte offsets into the file as it was when the rule ran.
/// Fixes emitted by one pass must be disjoint; overlapping fixes are skipped
/// by [`apply_fixes`] and picked up again on the next fix iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub content: String,
    pub start: usize,
    pub end: usize,
    /// Set when applying the edit would destroy something the rule cannot
    /// see (e.g. a comment inside the replaced range). The diagnostic is
    /// still reported, the edit is withheld.
    pub to_skip: bool,
}

impl Fix {
    pub fn empty() -> Self {
        Self { content: String::new(), start: 0, end: 0, to_skip: false }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.start == 0 && self.end == 0
    }

    fn length_change(&self) -> i64 {
        self.content.len() as i64 - (self.end - self.start) as i64
    }
}

/// A proposed edit that is surfaced to a human instead of auto-applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub message_id: &'static str,
    pub body: String,
    pub fix: Fix,
}

/// Apply all applicable fixes to `contents` in one pass.
///
/// Fixes are applied in source order; a fix whose start lies before the end
/// of the previously applied edit is skipped for this pass. Returns whether
/// any fix was skipped (so the caller knows another pass is needed) and the
/// rewritten text.
pub fn apply_fixes(diagnostics: &[Diagnostic], contents: &str) -> (bool, String) {
    let mut fixes: Vec<&Fix> = diagnostics
        .iter()
        .map(|diagnostic| &diagnostic.fix)
        .filter(|fix| !fix.is_empty() && !fix.to_skip)
        .collect();
    fixes.sort_by_key(|fix| (fix.start, fix.end));

    let mut new_content = contents.to_string();
    let mut diff_length: i64 = 0;
    let mut last_modified_pos: i64 = 0;
    let mut has_skipped_fixes = false;

    for fix in fixes {
        let start = fix.start as i64 + diff_length;
        let end = fix.end as i64 + diff_length;

        if start < last_modified_pos {
            has_skipped_fixes = true;
            continue;
        }

        let start_usize = start as usize;
        let end_usize = end as usize;
        if end_usize > new_content.len()
            || !new_content.is_char_boundary(start_usize)
            || !new_content.is_char_boundary(end_usize)
        {
            // Stale span; drop the edit rather than corrupt the file.
            has_skipped_fixes = true;
            continue;
        }

        diff_length += fix.length_change();
        new_content.replace_range(start_usize..end_usize, &fix.content);
        last_modified_pos = end as i64 + fix.length_change();
    }

    (has_skipped_fixes, new_content)
}
