pub(crate) mod deep_relative_import;

#[cfg(test)]
mod tests {
    use crate::utils_test::*;

    #[test]
    fn test_no_lint_deep_relative_import() {
        expect_no_lint("import a from './sibling';", "deep_relative_import");
        expect_no_lint("import a from '../parent';", "deep_relative_import");
        expect_no_lint("import a from '../../grandparent/mod';", "deep_relative_import");
        expect_no_lint("const a = require('../../grandparent/mod');", "deep_relative_import");

        // Package imports are internal_module_import's department.
        expect_no_lint("import a from 'lodash/get';", "deep_relative_import");
    }

    #[test]
    fn test_lint_deep_relative_import() {
        expect_lint(
            "import log from '../../../shared/log';",
            "climbs 3 directories",
            "deep_relative_import",
        );
        expect_lint(
            "const log = require('../../../../shared/log');",
            "climbs 4 directories",
            "deep_relative_import",
        );
    }

    #[test]
    fn test_deep_relative_import_max_depth() {
        let settings = toml_settings("[lint.deep-relative-import]\nmax-depth = 0\n");
        let diagnostics = check_code_with_settings(
            "import a from '../parent';",
            "deep_relative_import",
            settings.clone(),
        );
        assert_eq!(diagnostics.len(), 1);

        expect_no_lint_with_settings("import a from './sibling';", "deep_relative_import", settings);
    }
}
