pub(crate) mod dynamic_require;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_no_lint_dynamic_require() {
        expect_no_lint("require('./module')", "dynamic_require");
        expect_no_lint("require(\"lodash\")", "dynamic_require");
        expect_no_lint("require('./mod' + 'ule')", "dynamic_require");
        expect_no_lint("require(`./module`)", "dynamic_require");
        expect_no_lint("require()", "dynamic_require");

        // A local binding shadows the global.
        expect_no_lint("function f(require) { require(name); }", "dynamic_require");

        // Not the require we are looking for.
        expect_no_lint("loader.require(name)", "dynamic_require");
    }

    #[test]
    fn test_lint_dynamic_require() {
        expect_lint("require(name)", "dynamic module path", "dynamic_require");
        expect_lint(
            "require(`./handlers/${name}`)",
            "dynamic module path",
            "dynamic_require",
        );
        expect_lint("require('./plugins/' + name)", "dynamic module path", "dynamic_require");
    }

    #[test]
    fn test_dynamic_require_allow_contexts() {
        let settings =
            toml_settings("[lint.dynamic-require]\nallow-contexts = [\"build\", \"config\"]\n");

        let code = "require('./tasks/' + name)";
        assert!(
            check_code_at_path(code, "dynamic_require", "scripts/release.js", Some(settings.clone()))
                .is_empty()
        );
        assert!(
            check_code_at_path(code, "dynamic_require", "config/db.js", Some(settings.clone()))
                .is_empty()
        );

        // Runtime files are still checked.
        let diagnostics =
            check_code_at_path(code, "dynamic_require", "src/app.js", Some(settings));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_dynamic_require_contexts_off_by_default() {
        // Without allow-contexts, even build scripts are reported.
        let diagnostics = check_code_at_path(
            "require('./tasks/' + name)",
            "dynamic_require",
            "scripts/release.js",
            None,
        );
        assert_eq!(diagnostics.len(), 1);
    }
}
