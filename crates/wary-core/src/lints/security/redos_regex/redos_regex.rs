use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::lints::security::unsafe_regex::unsafe_regex::is_regexp_constructor;
use crate::syntax::Span;
use crate::syntax::ast::Expr;
use crate::utils::static_string_value;

/// ## What it does
///
/// Flags regex patterns with a quantified group that itself contains a
/// quantifier (`(a+)+`), or adjacent unbounded wildcard runs (`.*.*`).
///
/// ## Why is this bad?
///
/// These shapes are the classic catastrophic-backtracking patterns: on a
/// crafted non-matching input the engine explores exponentially many ways
/// to split the text, freezing the event loop (ReDoS).
///
/// ## Example
///
/// ```js
/// /(a+)+$/.test(userInput);
/// ```
///
/// The check is a syntactic screen, not an exhaustive ReDoS analysis; it
/// over-reports on purpose and safe-but-flagged patterns should be
/// suppressed with a directive.
fn build(range: Span) -> Diagnostic {
    Diagnostic::new(
        ViolationData::new(
            "redos_regex".to_string(),
            "vulnerableRegExp",
            "This pattern can backtrack exponentially on crafted input.".to_string(),
            Some("Bound the inner repetition or restructure the pattern.".to_string()),
        ),
        range,
        Fix::empty(),
    )
}

pub fn redos_regex_literal(pattern: &str, range: Span) -> anyhow::Result<Option<Diagnostic>> {
    if is_vulnerable(pattern) {
        Ok(Some(build(range)))
    } else {
        Ok(None)
    }
}

pub fn redos_regex_constructor(
    callee: &Expr,
    arguments: &[Expr],
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    if !is_regexp_constructor(callee, checker) {
        return Ok(None);
    }
    let Some(argument) = arguments.first() else {
        return Ok(None);
    };
    let Some(pattern) = static_string_value(argument, true) else {
        return Ok(None);
    };
    if is_vulnerable(&pattern) {
        Ok(Some(build(argument.span())))
    } else {
        Ok(None)
    }
}

/// Syntactic screen for catastrophic backtracking.
fn is_vulnerable(pattern: &str) -> bool {
    has_nested_quantifier(pattern) || has_adjacent_wildcards(pattern)
}

/// A group that carries a quantifier both inside and immediately after it,
/// e.g. `(a+)*` or `(\d{2,})+`.
fn has_nested_quantifier(pattern: &str) -> bool {
    // Each stack entry: does this group contain a quantifier so far?
    let mut stack: Vec<bool> = Vec::new();
    let mut in_class = false;
    let bytes = pattern.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'[' if !in_class => in_class = true,
            b']' if in_class => in_class = false,
            _ if in_class => {}
            b'(' => stack.push(false),
            b')' => {
                let quantified_inside = stack.pop().unwrap_or(false);
                let followed_by_quantifier =
                    matches!(bytes.get(i + 1), Some(b'*' | b'+' | b'{' | b'?'));
                if quantified_inside
                    && followed_by_quantifier
                    && !matches!(bytes.get(i + 1), Some(b'?'))
                {
                    return true;
                }
                // The inner quantifier also counts for the enclosing group.
                if quantified_inside && let Some(parent) = stack.last_mut() {
                    *parent = true;
                }
            }
            b'*' | b'+' | b'{' => {
                if let Some(group) = stack.last_mut() {
                    *group = true;
                }
            }
            _ => {}
        }
        i += 1;
    }
    false
}

/// Two unbounded wildcard runs back to back, e.g. `.*.*` or `.+.+`.
fn has_adjacent_wildcards(pattern: &str) -> bool {
    ["*.*", "*.+", "+.*", "+.+"]
        .iter()
        .any(|pair| pattern.contains(&format!(".{pair}")))
}

#[cfg(test)]
mod pattern_tests {
    use super::*;

    #[test]
    fn nested_quantifiers_are_vulnerable() {
        assert!(is_vulnerable("(a+)+"));
        assert!(is_vulnerable("(a+)*$"));
        assert!(is_vulnerable("(\\d{2,})+"));
        assert!(is_vulnerable("((ab)*c)+"));
    }

    #[test]
    fn adjacent_wildcards_are_vulnerable() {
        assert!(is_vulnerable(".*.*"));
        assert!(is_vulnerable("a.+.+b"));
    }

    #[test]
    fn plain_patterns_are_clean() {
        assert!(!is_vulnerable("a+b*c?"));
        assert!(!is_vulnerable("(abc)+"));
        assert!(!is_vulnerable("^[a-z]+$"));
        assert!(!is_vulnerable("(a+)?"));
        assert!(!is_vulnerable("[.+]+"));
    }
}
