//! Parsing of suppression comment directives.
//!
//! This module handles parsing `// wary-ignore` comments to determine
//! which rules should be suppressed.

use crate::rule_set::Rule;

/// A parsed lint directive from a comment
#[derive(Debug, PartialEq, Clone)]
pub enum LintDirective {
    /// Skip a rule on this line or the next: `// wary-ignore <rule>: <reason>`
    Ignore(Rule),
    /// Skip an entire file for a rule: `// wary-ignore-file <rule>: <reason>`
    IgnoreFile(Rule),
}

/// Result of parsing a comment that looks like a suppression directive.
///
/// This reports valid lint directives but also those that are invalid for any
/// reason (blanket suppression, wrong rule name, no explanation). We do this
/// here to parse and collect potential errors in comments in a single pass.
///
/// Information on the invalid comments is then reported when we run the checks.
#[derive(Debug, PartialEq, Clone)]
pub enum DirectiveParseResult {
    /// A valid, complete directive
    Valid(LintDirective),
    /// Comment is `// wary-ignore` without specifying a rule
    BlanketSuppression,
    /// Rule is valid but explanation is missing (no colon or empty after colon)
    MissingExplanation,
    /// Rule name is not recognized
    InvalidRuleName,
}

/// Parse a comment directive.
///
/// Supported formats:
///
/// ```text
/// // wary-ignore <rule>: <reason>
/// // wary-ignore-file <rule>: <reason>
/// ```
///
/// `text` is the comment body without the leading `//` or `/*` marker.
///
/// Notes:
/// - Rule name must be valid (validated against known rules)
/// - Explanation is mandatory
/// - One rule per directive
///
/// Returns:
/// - `Some(Valid(directive))` - A valid directive was found
/// - `Some(BlanketSuppression)` - No rule was specified
/// - `None` - Not a suppression comment at all
pub fn parse_comment_directive(text: &str) -> Option<DirectiveParseResult> {
    let text = text.trim_start();

    let rest = text.strip_prefix("wary-ignore")?;

    if let Some(after_file) = rest.strip_prefix("-file") {
        if after_file.is_empty() || after_file.trim_start().starts_with(':') {
            return Some(DirectiveParseResult::BlanketSuppression);
        }
        let after_file = after_file.strip_prefix(' ')?;
        match parse_rule_with_explanation(after_file) {
            RuleParseResult::Valid(rule) => {
                Some(DirectiveParseResult::Valid(LintDirective::IgnoreFile(rule)))
            }
            RuleParseResult::MissingExplanation => Some(DirectiveParseResult::MissingExplanation),
            RuleParseResult::InvalidRuleName => Some(DirectiveParseResult::InvalidRuleName),
            RuleParseResult::Invalid => None,
        }
    } else if let Some(after_ignore) = rest.strip_prefix(' ') {
        // If the rule name is missing it's a blanket suppression
        if after_ignore.trim_start().starts_with(':') {
            Some(DirectiveParseResult::BlanketSuppression)
        } else {
            match parse_rule_with_explanation(after_ignore) {
                RuleParseResult::Valid(rule) => {
                    Some(DirectiveParseResult::Valid(LintDirective::Ignore(rule)))
                }
                RuleParseResult::MissingExplanation => {
                    Some(DirectiveParseResult::MissingExplanation)
                }
                RuleParseResult::InvalidRuleName => Some(DirectiveParseResult::InvalidRuleName),
                RuleParseResult::Invalid => None,
            }
        }
    } else if rest.is_empty() || rest.starts_with(':') {
        // `// wary-ignore` or `// wary-ignore: reason`
        Some(DirectiveParseResult::BlanketSuppression)
    } else {
        // Not a directive (e.g. `// wary-ignorefoo`)
        None
    }
}

/// Result of parsing a rule with explanation
enum RuleParseResult {
    /// Valid rule with explanation
    Valid(Rule),
    /// Valid rule but missing explanation
    MissingExplanation,
    /// Rule name is not recognized
    InvalidRuleName,
    /// Invalid (empty rule name or other structural issue)
    Invalid,
}

/// Parse a rule name followed by `: <reason>`
fn parse_rule_with_explanation(text: &str) -> RuleParseResult {
    let Some(colon_pos) = text.find(':') else {
        let rule_name = text.trim();
        if rule_name.is_empty() {
            return RuleParseResult::Invalid;
        }
        return match Rule::from_name(rule_name) {
            Some(_) => RuleParseResult::MissingExplanation,
            None => RuleParseResult::InvalidRuleName,
        };
    };

    let rule_name = text[..colon_pos].trim();
    if rule_name.is_empty() {
        return RuleParseResult::Invalid;
    }

    let Some(rule) = Rule::from_name(rule_name) else {
        return RuleParseResult::InvalidRuleName;
    };

    let explanation = text[colon_pos + 1..].trim();
    if explanation.is_empty() {
        return RuleParseResult::MissingExplanation;
    }

    RuleParseResult::Valid(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_ignore() {
        assert_eq!(
            parse_comment_directive(" wary-ignore no_eval: trusted input"),
            Some(DirectiveParseResult::Valid(LintDirective::Ignore(Rule::NoEval)))
        );
    }

    #[test]
    fn parses_valid_ignore_file() {
        assert_eq!(
            parse_comment_directive(" wary-ignore-file max_complexity: generated code"),
            Some(DirectiveParseResult::Valid(LintDirective::IgnoreFile(
                Rule::MaxComplexity
            )))
        );
    }

    #[test]
    fn blanket_suppression_is_flagged() {
        assert_eq!(
            parse_comment_directive(" wary-ignore"),
            Some(DirectiveParseResult::BlanketSuppression)
        );
        assert_eq!(
            parse_comment_directive(" wary-ignore: some reason"),
            Some(DirectiveParseResult::BlanketSuppression)
        );
    }

    #[test]
    fn missing_explanation_is_flagged() {
        assert_eq!(
            parse_comment_directive(" wary-ignore no_eval"),
            Some(DirectiveParseResult::MissingExplanation)
        );
        assert_eq!(
            parse_comment_directive(" wary-ignore no_eval:   "),
            Some(DirectiveParseResult::MissingExplanation)
        );
    }

    #[test]
    fn invalid_rule_name_is_flagged() {
        assert_eq!(
            parse_comment_directive(" wary-ignore no_evall: oops"),
            Some(DirectiveParseResult::InvalidRuleName)
        );
    }

    #[test]
    fn ordinary_comments_are_not_directives() {
        assert_eq!(parse_comment_directive(" just a comment"), None);
        assert_eq!(parse_comment_directive(" wary-ignorefoo"), None);
    }
}
