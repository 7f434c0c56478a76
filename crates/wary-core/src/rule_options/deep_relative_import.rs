/// TOML options for `[lint.deep-relative-import]`.
///
/// `max-depth` is the number of `../` segments an import may climb before
/// being flagged.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DeepRelativeImportOptions {
    pub max_depth: Option<usize>,
}

/// Resolved options for the `deep_relative_import` rule.
#[derive(Clone, Debug)]
pub struct ResolvedDeepRelativeImportOptions {
    pub max_depth: usize,
}

impl ResolvedDeepRelativeImportOptions {
    pub fn resolve(options: Option<&DeepRelativeImportOptions>) -> anyhow::Result<Self> {
        let max_depth = options.and_then(|opts| opts.max_depth).unwrap_or(2);
        Ok(Self { max_depth })
    }
}
