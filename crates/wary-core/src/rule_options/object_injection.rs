/// TOML options for `[lint.object-injection]`.
///
/// With `ignore-tests` (the default), files classified as tests are skipped:
/// dynamic property writes are overwhelmingly fixture setup there.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ObjectInjectionOptions {
    pub ignore_tests: Option<bool>,
}

/// Resolved options for the `object_injection` rule.
#[derive(Clone, Debug)]
pub struct ResolvedObjectInjectionOptions {
    pub ignore_tests: bool,
}

impl ResolvedObjectInjectionOptions {
    pub fn resolve(options: Option<&ObjectInjectionOptions>) -> anyhow::Result<Self> {
        let ignore_tests = options
            .and_then(|opts| opts.ignore_tests)
            .unwrap_or(true);
        Ok(Self { ignore_tests })
    }
}
