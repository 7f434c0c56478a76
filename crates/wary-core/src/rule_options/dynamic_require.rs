use crate::context::FileContext;

/// TOML options for `[lint.dynamic-require]`.
///
/// `allow-contexts` lists file contexts (`"tests"`, `"config"`, `"build"`)
/// in which dynamic requires are tolerated.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DynamicRequireOptions {
    pub allow_contexts: Option<Vec<String>>,
}

/// Resolved options for the `dynamic_require` rule, ready for use during
/// linting.
#[derive(Clone, Debug)]
pub struct ResolvedDynamicRequireOptions {
    pub allow_contexts: Vec<FileContext>,
}

impl ResolvedDynamicRequireOptions {
    pub fn resolve(options: Option<&DynamicRequireOptions>) -> anyhow::Result<Self> {
        let names = options
            .and_then(|opts| opts.allow_contexts.clone())
            .unwrap_or_default();

        let allow_contexts = names
            .iter()
            .map(|name| {
                FileContext::from_name(name).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Unknown context `{name}` in `[lint.dynamic-require]` `allow-contexts`. \
                         Expected one of: tests, config, build, runtime."
                    )
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { allow_contexts })
    }
}
