/// TOML options for `[lint.max-complexity]`.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct MaxComplexityOptions {
    pub max: Option<usize>,
}

/// Resolved options for the `max_complexity` rule.
#[derive(Clone, Debug)]
pub struct ResolvedMaxComplexityOptions {
    pub max: usize,
}

impl ResolvedMaxComplexityOptions {
    pub fn resolve(options: Option<&MaxComplexityOptions>) -> anyhow::Result<Self> {
        let max = options.and_then(|opts| opts.max).unwrap_or(10);
        Ok(Self { max })
    }
}
