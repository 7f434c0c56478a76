pub(crate) mod max_complexity;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_no_lint_max_complexity() {
        expect_no_lint("function f(x) { return x + 1; }", "max_complexity");
        expect_no_lint(
            "function f(x) { if (x) { return 1; } for (var i = 0; i < x; i++) { g(i); } return 2; }",
            "max_complexity",
        );
        expect_no_lint("const f = (x) => x + 1;", "max_complexity");
        // Only function bodies are measured, not top-level code.
        expect_no_lint("if (a) { b(); } else { c(); }", "max_complexity");
    }

    #[test]
    fn test_lint_max_complexity() {
        let settings = toml_settings("[lint.max-complexity]\nmax = 1\n");

        let diagnostics = check_code_with_settings(
            "function decide(x) { if (x) { return 1; } return 2; }",
            "max_complexity",
            settings.clone(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message.body,
            "Function `decide` has a complexity of 2 (max allowed is 1)."
        );

        let lints = |code: &str| check_code_with_settings(code, "max_complexity", settings.clone());

        // Logical operators, ternaries, and loops all count.
        assert_eq!(lints("function f(a, b) { return a && b; }").len(), 1);

        let arrow = lints("const pick = (x) => x ? 1 : 2;");
        assert!(arrow[0].message.body.starts_with("This function has a complexity of 2"));

        let method = lints("class A { render(x) { if (x) { return 1; } return 2; } }");
        assert!(method[0].message.body.starts_with("Method `render` has a complexity of 2"));
    }

    #[test]
    fn test_nested_functions_count_once() {
        let settings = toml_settings("[lint.max-complexity]\nmax = 2\n");

        // The nested declaration adds one point to the parent; its own body
        // is measured separately and stays under the limit here.
        expect_no_lint_with_settings(
            "function outer() { function inner(x) { if (x) { g(); } } }",
            "max_complexity",
            settings.clone(),
        );

        // Branching inside the nested function does not inflate the parent.
        let code =
            "function outer() { var h = function (x) { if (x && g(x)) { return 1; } return 2; }; }";
        let diagnostics = check_code_with_settings(code, "max_complexity", settings);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.body.starts_with("This function"));
    }
}
