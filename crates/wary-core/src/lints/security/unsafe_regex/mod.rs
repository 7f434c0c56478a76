pub(crate) mod unsafe_regex;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_no_lint_unsafe_regex() {
        expect_no_lint("new RegExp('abc')", "unsafe_regex");
        expect_no_lint("RegExp('a+b*')", "unsafe_regex");
        expect_no_lint("new RegExp('^[a-z]+$', 'i')", "unsafe_regex");
        expect_no_lint("new RegExp('colou?' + 'r')", "unsafe_regex");

        // A regex literal argument was already validated by the parser.
        expect_no_lint("new RegExp(/abc/)", "unsafe_regex");

        // A local binding shadows the global.
        expect_no_lint("function f(RegExp) { new RegExp(input); }", "unsafe_regex");

        expect_no_lint("new Matcher(input)", "unsafe_regex");
        expect_no_lint("new RegExp()", "unsafe_regex");
    }

    #[test]
    fn test_lint_dynamic_pattern() {
        expect_lint("new RegExp(userInput)", "dynamic pattern", "unsafe_regex");
        expect_lint("RegExp(userInput)", "dynamic pattern", "unsafe_regex");
        expect_lint("new RegExp('^' + userInput)", "dynamic pattern", "unsafe_regex");
        expect_lint("new RegExp(`${base}$`)", "dynamic pattern", "unsafe_regex");
        expect_lint("window.RegExp(userInput)", "dynamic pattern", "unsafe_regex");
    }

    #[test]
    fn test_lint_invalid_pattern() {
        expect_lint("new RegExp('[unclosed')", "does not compile", "unsafe_regex");
        expect_lint("new RegExp('a{2,1}')", "does not compile", "unsafe_regex");

        let diagnostics = check_code("new RegExp('[unclosed')", "unsafe_regex");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message.message_id, "invalidRegExp");
    }
}
