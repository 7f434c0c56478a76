pub(crate) mod redos_regex;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_no_lint_redos_regex() {
        expect_no_lint("var re = /abc/;", "redos_regex");
        expect_no_lint("var re = /(abc)+/;", "redos_regex");
        expect_no_lint("var re = /^[a-z]+$/;", "redos_regex");
        expect_no_lint("var re = /a+b*c?/;", "redos_regex");
        expect_no_lint("new RegExp('(abc)+')", "redos_regex");

        // Dynamic patterns are unsafe_regex's department.
        expect_no_lint("new RegExp(userInput)", "redos_regex");
    }

    #[test]
    fn test_lint_redos_literal() {
        expect_lint("var re = /(a+)+$/;", "backtrack exponentially", "redos_regex");
        expect_lint("var re = /(\\d+)*x/;", "backtrack exponentially", "redos_regex");
        expect_lint("var re = /.*.*=/;", "backtrack exponentially", "redos_regex");
        expect_lint("if (/(a+)+/.test(input)) { block(); }", "backtrack exponentially", "redos_regex");
    }

    #[test]
    fn test_lint_redos_constructor() {
        expect_lint("new RegExp('(a+)+')", "backtrack exponentially", "redos_regex");
        expect_lint("RegExp('a.+.+b')", "backtrack exponentially", "redos_regex");
    }

    #[test]
    fn test_redos_constructor_highlight() {
        // The argument is underlined, not the whole constructor call.
        expect_diagnostic_highlight("new RegExp('(a+)+');", "redos_regex", "'(a+)+'");
    }
}
