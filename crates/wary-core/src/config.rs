use std::path::PathBuf;

use rustc_hash::FxHashSet;

use crate::rule_options::ResolvedRuleOptions;
use crate::rule_set::RuleSet;
use crate::toml::TomlOptions;

/// Rule selection and fix flags as they arrive from the command line.
/// Selectors are comma-separated strings; empty means "not passed".
#[derive(Debug, Clone, Default)]
pub struct ArgsConfig {
    pub files: Vec<PathBuf>,
    pub fix: bool,
    pub unsafe_fixes: bool,
    pub select: String,
    pub extend_select: String,
    pub ignore: String,
    pub no_default_exclude: bool,
}

/// Everything `check()` needs, resolved from CLI args and `wary.toml`.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub rules_to_apply: RuleSet,
    pub rule_options: ResolvedRuleOptions,
    pub apply_fixes: bool,
    pub apply_unsafe_fixes: bool,
    /// If set, only these rules may apply fixes.
    pub fixable: Option<FxHashSet<String>>,
    pub unfixable: FxHashSet<String>,
}

fn parse_selector_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|selector| !selector.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merge CLI arguments with the discovered `wary.toml` (if any) into a
/// `Config`. CLI selectors override their file counterparts.
pub fn build_config(
    args: &ArgsConfig,
    toml: Option<TomlOptions>,
    paths: Vec<PathBuf>,
) -> anyhow::Result<Config> {
    let lint = toml.and_then(|options| options.lint).unwrap_or_default();

    let cli_select = parse_selector_list(&args.select);
    let cli_extend_select = parse_selector_list(&args.extend_select);
    let cli_ignore = parse_selector_list(&args.ignore);

    let select = if cli_select.is_empty() {
        lint.select.clone().unwrap_or_default()
    } else {
        cli_select
    };
    let extend_select = if cli_extend_select.is_empty() {
        lint.extend_select.clone().unwrap_or_default()
    } else {
        cli_extend_select
    };
    let ignore = if cli_ignore.is_empty() {
        lint.ignore.clone().unwrap_or_default()
    } else {
        cli_ignore
    };

    let rules_to_apply = RuleSet::from_selection(&select, &extend_select, &ignore)?;
    let rule_options = lint.resolve_rule_options()?;

    Ok(Config {
        paths,
        rules_to_apply,
        rule_options,
        apply_fixes: args.fix,
        apply_unsafe_fixes: args.unsafe_fixes,
        fixable: lint
            .fixable
            .map(|fixable| fixable.into_iter().collect::<FxHashSet<String>>()),
        unfixable: lint.unfixable.unwrap_or_default().into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_set::Rule;

    #[test]
    fn cli_select_overrides_toml() {
        let toml: TomlOptions =
            toml::from_str("[lint]\nselect = [\"max_complexity\"]\n").unwrap();
        let args = ArgsConfig { select: "no_eval".to_string(), ..Default::default() };
        let config = build_config(&args, Some(toml), vec![]).unwrap();
        assert!(config.rules_to_apply.contains(&Rule::NoEval));
        assert!(!config.rules_to_apply.contains(&Rule::MaxComplexity));
    }

    #[test]
    fn defaults_apply_without_any_selection() {
        let config = build_config(&ArgsConfig::default(), None, vec![]).unwrap();
        assert!(config.rules_to_apply.contains(&Rule::NoEval));
        assert!(!config.rules_to_apply.contains(&Rule::ObjectInjection));
    }

    #[test]
    fn unknown_cli_rule_is_an_error() {
        let args = ArgsConfig { select: "no_evil".to_string(), ..Default::default() };
        assert!(build_config(&args, None, vec![]).is_err());
    }
}
