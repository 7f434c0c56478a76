pub mod deep_relative_import;
pub mod dynamic_require;
pub mod internal_module_import;
pub mod max_complexity;
pub mod missing_csrf;
pub mod no_document_cookie;
pub mod no_eval;
pub mod object_injection;

use deep_relative_import::{DeepRelativeImportOptions, ResolvedDeepRelativeImportOptions};
use dynamic_require::{DynamicRequireOptions, ResolvedDynamicRequireOptions};
use internal_module_import::{InternalModuleImportOptions, ResolvedInternalModuleImportOptions};
use max_complexity::{MaxComplexityOptions, ResolvedMaxComplexityOptions};
use missing_csrf::{MissingCsrfOptions, ResolvedMissingCsrfOptions};
use no_document_cookie::{NoDocumentCookieOptions, ResolvedNoDocumentCookieOptions};
use no_eval::{NoEvalOptions, ResolvedNoEvalOptions};
use object_injection::{ObjectInjectionOptions, ResolvedObjectInjectionOptions};

/// Resolve a pair of `field` / `extend-field` options against a set of defaults.
///
/// - If both are `Some`, returns an error.
/// - If `base` is `Some`, uses it as the full replacement.
/// - If `extend` is `Some`, appends it to the defaults.
/// - If neither is set, returns the defaults.
///
/// `rule_section` and `field_name` are used for the error message, e.g.
/// `"missing-csrf"` and `"middleware-patterns"`.
pub fn resolve_with_extend(
    base: Option<&Vec<String>>,
    extend: Option<&Vec<String>>,
    defaults: &[&str],
    rule_section: &str,
    field_name: &str,
) -> anyhow::Result<Vec<String>> {
    if base.is_some() && extend.is_some() {
        return Err(anyhow::anyhow!(
            "Cannot specify both `{field_name}` and `extend-{field_name}` \
             in `[lint.{rule_section}]`."
        ));
    }

    if let Some(values) = base {
        Ok(values.clone())
    } else {
        let mut list: Vec<String> = defaults.iter().map(|s| (*s).to_string()).collect();
        if let Some(values) = extend {
            list.extend(values.iter().cloned());
        }
        Ok(list)
    }
}

/// Resolved per-rule options, ready for use during linting.
///
/// To add options for a new rule:
/// 1. Create `rule_options/<rule_name>.rs` with the TOML and resolved types.
/// 2. Add a field to `ResolvedRuleOptions` and a resolve line in `resolve()`.
/// 3. Add the TOML field to `LinterTomlOptions` in `toml.rs` and pass it to
///    `resolve()` in `into_settings()`.
#[derive(Clone, Debug)]
pub struct ResolvedRuleOptions {
    pub no_eval: ResolvedNoEvalOptions,
    pub dynamic_require: ResolvedDynamicRequireOptions,
    pub no_document_cookie: ResolvedNoDocumentCookieOptions,
    pub object_injection: ResolvedObjectInjectionOptions,
    pub missing_csrf: ResolvedMissingCsrfOptions,
    pub internal_module_import: ResolvedInternalModuleImportOptions,
    pub deep_relative_import: ResolvedDeepRelativeImportOptions,
    pub max_complexity: ResolvedMaxComplexityOptions,
}

#[derive(Clone, Debug, Default)]
pub struct RuleOptionsInput<'a> {
    pub no_eval: Option<&'a NoEvalOptions>,
    pub dynamic_require: Option<&'a DynamicRequireOptions>,
    pub no_document_cookie: Option<&'a NoDocumentCookieOptions>,
    pub object_injection: Option<&'a ObjectInjectionOptions>,
    pub missing_csrf: Option<&'a MissingCsrfOptions>,
    pub internal_module_import: Option<&'a InternalModuleImportOptions>,
    pub deep_relative_import: Option<&'a DeepRelativeImportOptions>,
    pub max_complexity: Option<&'a MaxComplexityOptions>,
}

impl ResolvedRuleOptions {
    pub fn resolve(input: &RuleOptionsInput<'_>) -> anyhow::Result<Self> {
        Ok(Self {
            no_eval: ResolvedNoEvalOptions::resolve(input.no_eval)?,
            dynamic_require: ResolvedDynamicRequireOptions::resolve(input.dynamic_require)?,
            no_document_cookie: ResolvedNoDocumentCookieOptions::resolve(
                input.no_document_cookie,
            )?,
            object_injection: ResolvedObjectInjectionOptions::resolve(input.object_injection)?,
            missing_csrf: ResolvedMissingCsrfOptions::resolve(input.missing_csrf)?,
            internal_module_import: ResolvedInternalModuleImportOptions::resolve(
                input.internal_module_import,
            )?,
            deep_relative_import: ResolvedDeepRelativeImportOptions::resolve(
                input.deep_relative_import,
            )?,
            max_complexity: ResolvedMaxComplexityOptions::resolve(input.max_complexity)?,
        })
    }
}

impl Default for ResolvedRuleOptions {
    fn default() -> Self {
        Self::resolve(&RuleOptionsInput::default())
            .expect("default rule options should always resolve")
    }
}
