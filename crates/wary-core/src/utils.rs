use memchr::memchr_iter;

use crate::diagnostic::Diagnostic;
use crate::location::Location;
use crate::syntax::Span;
use crate::syntax::ast::{BinaryOp, Expr, MemberProp, Program};

/// Macro to unwrap an Option or return Ok(None) early.
///
/// This is a common pattern in lint rules where we want to return early
/// if a value is None without creating an error.
///
/// # Example
/// ```ignore
/// let x = unwrap_or_return_none!(some_optional_value);
/// ```
#[macro_export]
macro_rules! unwrap_or_return_none {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => return Ok(None),
        }
    };
}

/// Find the positions of the new line characters in the source text.
pub fn find_new_lines(source: &str) -> Vec<usize> {
    memchr_iter(b'\n', source.as_bytes()).collect()
}

/// 0-indexed line containing byte `start`.
pub fn find_row(start: usize, loc_new_lines: &[usize]) -> usize {
    loc_new_lines.partition_point(|&pos| pos < start)
}

/// Takes the start of the range of a Diagnostic and the indices for the new
/// lines. Returns the (row, col) position of the Diagnostic in the file.
///
/// Note that the row position is 1-indexed but the column position is 0-indexed.
pub fn find_row_col(start: usize, loc_new_lines: &[usize]) -> (usize, usize) {
    let n_new_lines = find_row(start, loc_new_lines);
    let col = match n_new_lines.checked_sub(1).and_then(|i| loc_new_lines.get(i)) {
        Some(last_new_line) => start - last_new_line - 1,
        None => start,
    };
    (n_new_lines + 1, col)
}

/// Takes a vector of `Diagnostic`s, all of which come with a range, and convert
/// this range into actual (row, col) location using the position of new lines.
pub fn compute_lints_location(
    diagnostics: Vec<Diagnostic>,
    loc_new_lines: &[usize],
) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            let (row, col) = find_row_col(diagnostic.range.start, loc_new_lines);
            diagnostic.location = Some(Location::new(row, col));
            diagnostic
        })
        .collect()
}

/// Resolve an expression to a compile-time string, if it is one.
///
/// Static means: a string literal, a template literal with no interpolation,
/// a parenthesized static expression, or (when `allow_concat` is set) a `+`
/// of two static expressions. Anything else is treated as dynamic.
pub fn static_string_value(expr: &Expr, allow_concat: bool) -> Option<String> {
    match expr {
        Expr::String(lit) => Some(lit.value.clone()),
        Expr::Template(template) if template.expressions.is_empty() => {
            Some(template.cooked_text())
        }
        Expr::Paren(paren) => static_string_value(&paren.expression, allow_concat),
        Expr::Binary(binary) if allow_concat && binary.op == BinaryOp::Add => {
            let left = static_string_value(&binary.left, allow_concat)?;
            let right = static_string_value(&binary.right, allow_concat)?;
            Some(left + &right)
        }
        _ => None,
    }
}

pub fn is_static_string(expr: &Expr, allow_concat: bool) -> bool {
    static_string_value(expr, allow_concat).is_some()
}

/// Return the dotted path of a callee expression, e.g. `window.eval` or
/// `app.post`. Computed members and anything that is not a plain chain of
/// identifiers resolve to `None`.
pub fn static_callee_path(expr: &Expr) -> Option<String> {
    match expr.unwrap_parens() {
        Expr::Identifier(identifier) => Some(identifier.name.clone()),
        Expr::Member(member) => {
            let object = static_callee_path(&member.object)?;
            match &member.property {
                MemberProp::Static(property) => Some(format!("{object}.{}", property.name)),
                MemberProp::Computed(_) => None,
            }
        }
        _ => None,
    }
}

/// The last segment of a callee path: `window.eval` -> `eval`.
pub fn callee_base_name(expr: &Expr) -> Option<String> {
    let path = static_callee_path(expr)?;
    Some(path.rsplit('.').next().unwrap_or(&path).to_string())
}

/// Checks if any comment sits inside the given range. This is used to not
/// provide a fix when comments are present to avoid destroying them.
pub fn span_contains_comment(program: &Program, span: Span) -> bool {
    program
        .comments
        .iter()
        .any(|comment| comment.span.start >= span.start && comment.span.end <= span.end)
}

/// The span to delete when removing a comment: the whole line (including its
/// newline) when the comment is alone on it, otherwise the comment plus the
/// whitespace separating it from the code before it.
pub fn comment_removal_span(source: &str, comment: Span) -> Span {
    let line_start = source[..comment.start].rfind('\n').map_or(0, |pos| pos + 1);
    let before = &source[line_start..comment.start];

    if before.chars().all(char::is_whitespace) {
        let end = source[comment.end..]
            .find('\n')
            .map_or(source.len(), |pos| comment.end + pos + 1);
        Span::new(line_start, end)
    } else {
        let trailing_ws = before.len() - before.trim_end().len();
        Span::new(comment.start - trailing_ws, comment.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::syntax::ast::Stmt;

    fn first_expr(code: &str) -> Expr {
        let program = parse(code).unwrap();
        match program.body.into_iter().next() {
            Some(Stmt::Expression(stmt)) => stmt.expression,
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn row_col_is_one_indexed_row_zero_indexed_col() {
        let source = "foo();\nbar();\n";
        let new_lines = find_new_lines(source);
        assert_eq!(find_row_col(0, &new_lines), (1, 0));
        assert_eq!(find_row_col(7, &new_lines), (2, 0));
        assert_eq!(find_row_col(11, &new_lines), (2, 4));
    }

    #[test]
    fn static_strings() {
        assert_eq!(
            static_string_value(&first_expr("\"abc\";"), false),
            Some("abc".to_string())
        );
        assert_eq!(
            static_string_value(&first_expr("`abc`;"), false),
            Some("abc".to_string())
        );
        assert_eq!(static_string_value(&first_expr("`a${b}c`;"), false), None);
        assert_eq!(
            static_string_value(&first_expr("\"a\" + \"b\";"), true),
            Some("ab".to_string())
        );
        assert_eq!(static_string_value(&first_expr("\"a\" + b;"), true), None);
        assert_eq!(static_string_value(&first_expr("\"a\" + \"b\";"), false), None);
    }

    #[test]
    fn callee_paths() {
        assert_eq!(
            static_callee_path(&first_expr("window.eval;")),
            Some("window.eval".to_string())
        );
        assert_eq!(
            static_callee_path(&first_expr("security.middleware.csrf;")),
            Some("security.middleware.csrf".to_string())
        );
        assert_eq!(static_callee_path(&first_expr("a[b];")), None);
        assert_eq!(callee_base_name(&first_expr("globalThis.eval;")), Some("eval".to_string()));
    }

    #[test]
    fn removal_span_takes_whole_line_when_alone() {
        let source = "foo();\n// gone\nbar();\n";
        let comment = Span::new(7, 14);
        assert_eq!(comment_removal_span(source, comment), Span::new(7, 15));

        let trailing = "foo(); // gone\n";
        let comment = Span::new(7, 14);
        assert_eq!(comment_removal_span(trailing, comment), Span::new(6, 14));
    }
}
