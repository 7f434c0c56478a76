pub(crate) mod missing_csrf;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_no_lint_missing_csrf() {
        // Reads don't mutate state.
        expect_no_lint("app.get('/users', handler)", "missing_csrf");
        expect_no_lint("app.head('/users', handler)", "missing_csrf");

        // Protected chains, wherever the middleware sits.
        expect_no_lint("app.post('/transfer', csrf(), handler)", "missing_csrf");
        expect_no_lint("app.post('/transfer', handler, csrf())", "missing_csrf");
        expect_no_lint("app.post('/transfer', auth, csurf(), handler)", "missing_csrf");
        expect_no_lint("app.post('/transfer', csrfProtection, handler)", "missing_csrf");
        expect_no_lint("app.post('/transfer', security.verifyCsrf, handler)", "missing_csrf");
        expect_no_lint("router.delete('/item', doubleCsrf({}), handler)", "missing_csrf");

        // Not a route registration.
        expect_no_lint("app.post('/transfer')", "missing_csrf");
        expect_no_lint("queue.post('/job', handler)", "missing_csrf");
        expect_no_lint("post('/transfer', handler)", "missing_csrf");
    }

    #[test]
    fn test_lint_missing_csrf() {
        expect_lint("app.post('/transfer', handler)", "no CSRF middleware", "missing_csrf");
        expect_lint("app.put('/user', handler)", "no CSRF middleware", "missing_csrf");
        expect_lint("app.patch('/user', handler)", "no CSRF middleware", "missing_csrf");
        expect_lint("router.delete('/item', handler)", "no CSRF middleware", "missing_csrf");
        expect_lint(
            "app.post('/transfer', logger, validate, handler)",
            "no CSRF middleware",
            "missing_csrf",
        );
    }

    #[test]
    fn test_missing_csrf_suggestion() {
        let source = "app.post(\"/transfer\", handler);";
        let diagnostics = check_code(source, "missing_csrf");
        assert_eq!(diagnostics.len(), 1);
        // The fix is surfaced as a suggestion, never auto-applied.
        assert!(diagnostics[0].fix.is_empty());

        let suggestion = &diagnostics[0].suggestions[0];
        assert_eq!(suggestion.message_id, "addCsrfMiddleware");

        let mut with_fix = diagnostics[0].clone();
        with_fix.fix = suggestion.fix.clone();
        let (_, fixed) = crate::fix::apply_fixes(&[with_fix], source);
        assert_eq!(fixed, "app.post(\"/transfer\", csrf(), handler);");
    }

    #[test]
    fn test_missing_csrf_custom_patterns() {
        let settings = toml_settings(
            "[lint.missing-csrf]\nextend-middleware-patterns = [\"requireAuth\"]\n",
        );
        expect_no_lint_with_settings(
            "app.post('/transfer', requireAuth, handler)",
            "missing_csrf",
            settings.clone(),
        );
        // The defaults still apply alongside the extension.
        expect_no_lint_with_settings(
            "app.post('/transfer', csrf(), handler)",
            "missing_csrf",
            settings,
        );
    }

    #[test]
    fn test_missing_csrf_custom_methods_and_objects() {
        let settings = toml_settings(
            "[lint.missing-csrf]\nroute-methods = [\"post\"]\nobject-names = [\"api\"]\n",
        );
        let diagnostics = check_code_with_settings(
            "api.post('/transfer', handler)",
            "missing_csrf",
            settings.clone(),
        );
        assert_eq!(diagnostics.len(), 1);

        // `app` is no longer in the object list, `put` no longer a method.
        expect_no_lint_with_settings(
            "app.post('/transfer', handler)",
            "missing_csrf",
            settings.clone(),
        );
        expect_no_lint_with_settings("api.put('/transfer', handler)", "missing_csrf", settings);
    }
}
