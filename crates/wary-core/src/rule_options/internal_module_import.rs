use super::resolve_with_extend;
use crate::context::PatternSet;

/// What to do about an import that reaches inside a package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStrategy {
    /// Report only.
    #[default]
    Warn,
    /// Rewrite the import to the package root.
    Autofix,
    /// Attach the rewrite as a suggestion instead of applying it.
    Suggest,
}

/// TOML options for `[lint.internal-module-import]`.
///
/// `max-depth` is the number of path segments past the package name an
/// import may reach (0 means `lodash/get` is already too deep). `allow`
/// lists module patterns (anchored regexes) exempt from the check, e.g.
/// `lodash/fp`.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct InternalModuleImportOptions {
    pub max_depth: Option<usize>,
    pub strategy: Option<ImportStrategy>,
    pub allow: Option<Vec<String>>,
    pub extend_allow: Option<Vec<String>>,
}

/// Resolved options for the `internal_module_import` rule.
#[derive(Clone, Debug)]
pub struct ResolvedInternalModuleImportOptions {
    pub max_depth: usize,
    pub strategy: ImportStrategy,
    pub allow: PatternSet,
}

impl ResolvedInternalModuleImportOptions {
    pub fn resolve(options: Option<&InternalModuleImportOptions>) -> anyhow::Result<Self> {
        let (max_depth, strategy, allow_base, allow_extend) = match options {
            Some(opts) => (
                opts.max_depth.unwrap_or(0),
                opts.strategy.unwrap_or_default(),
                opts.allow.as_ref(),
                opts.extend_allow.as_ref(),
            ),
            None => (0, ImportStrategy::default(), None, None),
        };

        let allow = resolve_with_extend(
            allow_base,
            allow_extend,
            &[],
            "internal-module-import",
            "allow",
        )?;

        Ok(Self { max_depth, strategy, allow: PatternSet::compile(&allow) })
    }
}
