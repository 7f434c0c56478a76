//! `wary.toml` parsing and discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::rule_options::deep_relative_import::DeepRelativeImportOptions;
use crate::rule_options::dynamic_require::DynamicRequireOptions;
use crate::rule_options::internal_module_import::InternalModuleImportOptions;
use crate::rule_options::max_complexity::MaxComplexityOptions;
use crate::rule_options::missing_csrf::MissingCsrfOptions;
use crate::rule_options::no_document_cookie::NoDocumentCookieOptions;
use crate::rule_options::no_eval::NoEvalOptions;
use crate::rule_options::object_injection::ObjectInjectionOptions;
use crate::rule_options::{ResolvedRuleOptions, RuleOptionsInput};

#[derive(Clone, Debug, PartialEq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    pub lint: Option<LintTomlOptions>,
}

/// The `[lint]` table of `wary.toml`, plus one `[lint.<rule>]` sub-table per
/// rule that takes options.
#[derive(Clone, Debug, PartialEq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LintTomlOptions {
    pub select: Option<Vec<String>>,
    pub extend_select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    /// If set, only these rules may apply fixes.
    pub fixable: Option<Vec<String>>,
    pub unfixable: Option<Vec<String>>,
    /// Glob patterns excluded from file discovery, on top of the defaults.
    pub exclude: Option<Vec<String>>,

    pub no_eval: Option<NoEvalOptions>,
    pub dynamic_require: Option<DynamicRequireOptions>,
    pub no_document_cookie: Option<NoDocumentCookieOptions>,
    pub object_injection: Option<ObjectInjectionOptions>,
    pub missing_csrf: Option<MissingCsrfOptions>,
    pub internal_module_import: Option<InternalModuleImportOptions>,
    pub deep_relative_import: Option<DeepRelativeImportOptions>,
    pub max_complexity: Option<MaxComplexityOptions>,
}

impl LintTomlOptions {
    pub fn resolve_rule_options(&self) -> anyhow::Result<ResolvedRuleOptions> {
        ResolvedRuleOptions::resolve(&RuleOptionsInput {
            no_eval: self.no_eval.as_ref(),
            dynamic_require: self.dynamic_require.as_ref(),
            no_document_cookie: self.no_document_cookie.as_ref(),
            object_injection: self.object_injection.as_ref(),
            missing_csrf: self.missing_csrf.as_ref(),
            internal_module_import: self.internal_module_import.as_ref(),
            deep_relative_import: self.deep_relative_import.as_ref(),
            max_complexity: self.max_complexity.as_ref(),
        })
    }
}

/// Parse the `wary.toml` at `path`.
pub fn parse_wary_toml(path: &Path) -> anyhow::Result<TomlOptions> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Walk upward from `start` (a file or directory) looking for a `wary.toml`.
pub fn find_wary_toml(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_dir() { start } else { start.parent()? };
    loop {
        let candidate = dir.join("wary.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
[lint]
select = ["no_eval"]
extend-select = []
ignore = []
exclude = ["dist/**"]

[lint.no-eval]
extend-additional-functions = ["execScript"]
allow-with-comment = true

[lint.missing-csrf]
extend-middleware-patterns = ["requireAuth"]

[lint.internal-module-import]
max-depth = 0
strategy = "autofix"
"#;
        let options: TomlOptions = toml::from_str(toml).unwrap();
        let lint = options.lint.unwrap();
        assert_eq!(lint.select, Some(vec!["no_eval".to_string()]));
        let resolved = lint.resolve_rule_options().unwrap();
        assert!(resolved.no_eval.allow_with_comment);
        assert!(
            resolved
                .no_eval
                .additional_functions
                .contains(&"execScript".to_string())
        );
        assert!(resolved.missing_csrf.middleware_patterns.matches("requireAuth"));
        assert!(resolved.missing_csrf.middleware_patterns.matches("csrf"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = "[lint]\nselct = []\n";
        assert!(toml::from_str::<TomlOptions>(toml).is_err());

        let toml = "[lint.no-eval]\nallow-with-coment = true\n";
        assert!(toml::from_str::<TomlOptions>(toml).is_err());
    }

    #[test]
    fn base_and_extend_conflict_is_reported_at_resolution() {
        let toml = r#"
[lint.no-eval]
additional-functions = ["a"]
extend-additional-functions = ["b"]
"#;
        let options: TomlOptions = toml::from_str(toml).unwrap();
        assert!(options.lint.unwrap().resolve_rule_options().is_err());
    }

    #[test]
    fn discovers_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("wary.toml"), "[lint]\n").unwrap();

        let found = find_wary_toml(&nested).unwrap();
        assert_eq!(found, dir.path().join("wary.toml"));
    }
}
