use rustc_hash::FxHashSet;

/// The closed set of rules the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // security
    NoEval,
    DynamicRequire,
    UnsafeRegex,
    RedosRegex,
    NoDocumentCookie,
    ObjectInjection,
    MissingCsrf,
    // architecture
    InternalModuleImport,
    DeepRelativeImport,
    // quality
    NoConsoleSpaces,
    MaxComplexity,
    // comments
    OutdatedSuppression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultStatus {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixStatus {
    #[default]
    None,
    Safe,
    Unsafe,
}

pub const ALL_RULES: [Rule; 12] = [
    Rule::NoEval,
    Rule::DynamicRequire,
    Rule::UnsafeRegex,
    Rule::RedosRegex,
    Rule::NoDocumentCookie,
    Rule::ObjectInjection,
    Rule::MissingCsrf,
    Rule::InternalModuleImport,
    Rule::DeepRelativeImport,
    Rule::NoConsoleSpaces,
    Rule::MaxComplexity,
    Rule::OutdatedSuppression,
];

pub const RULE_GROUPS: [&str; 4] = ["security", "architecture", "quality", "comments"];

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NoEval => "no_eval",
            Rule::DynamicRequire => "dynamic_require",
            Rule::UnsafeRegex => "unsafe_regex",
            Rule::RedosRegex => "redos_regex",
            Rule::NoDocumentCookie => "no_document_cookie",
            Rule::ObjectInjection => "object_injection",
            Rule::MissingCsrf => "missing_csrf",
            Rule::InternalModuleImport => "internal_module_import",
            Rule::DeepRelativeImport => "deep_relative_import",
            Rule::NoConsoleSpaces => "no_console_spaces",
            Rule::MaxComplexity => "max_complexity",
            Rule::OutdatedSuppression => "outdated_suppression",
        }
    }

    pub fn from_name(name: &str) -> Option<Rule> {
        ALL_RULES.iter().copied().find(|rule| rule.name() == name)
    }

    pub fn group(&self) -> &'static str {
        match self {
            Rule::NoEval
            | Rule::DynamicRequire
            | Rule::UnsafeRegex
            | Rule::RedosRegex
            | Rule::NoDocumentCookie
            | Rule::ObjectInjection
            | Rule::MissingCsrf => "security",
            Rule::InternalModuleImport | Rule::DeepRelativeImport => "architecture",
            Rule::NoConsoleSpaces | Rule::MaxComplexity => "quality",
            Rule::OutdatedSuppression => "comments",
        }
    }

    pub fn default_status(&self) -> DefaultStatus {
        match self {
            // Too noisy to turn on for everyone.
            Rule::ObjectInjection => DefaultStatus::Disabled,
            _ => DefaultStatus::Enabled,
        }
    }

    pub fn fix_status(&self) -> FixStatus {
        match self {
            Rule::NoConsoleSpaces | Rule::OutdatedSuppression => FixStatus::Safe,
            // Only fixes when `strategy = "autofix"`; the rewrite changes
            // which file is loaded, so it is opt-in.
            Rule::InternalModuleImport => FixStatus::Unsafe,
            _ => FixStatus::None,
        }
    }

    pub fn has_safe_fix(&self) -> bool {
        self.fix_status() == FixStatus::Safe
    }

    pub fn has_unsafe_fix(&self) -> bool {
        self.fix_status() == FixStatus::Unsafe
    }

    pub fn has_no_fix(&self) -> bool {
        self.fix_status() == FixStatus::None
    }

    pub fn is_enabled_by_default(&self) -> bool {
        self.default_status() == DefaultStatus::Enabled
    }
}

/// The set of rules enabled for a run.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: FxHashSet<Rule>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self { rules: FxHashSet::default() }
    }

    pub fn default_rules() -> Self {
        Self {
            rules: ALL_RULES
                .iter()
                .copied()
                .filter(Rule::is_enabled_by_default)
                .collect(),
        }
    }

    pub fn all() -> Self {
        Self { rules: ALL_RULES.iter().copied().collect() }
    }

    pub fn insert(&mut self, rule: Rule) {
        self.rules.insert(rule);
    }

    pub fn remove(&mut self, rule: Rule) {
        self.rules.remove(&rule);
    }

    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Expand one `select`/`ignore` entry: an exact rule name, or a group
    /// name meaning every rule in that group.
    pub fn resolve_selector(selector: &str) -> Result<Vec<Rule>, UnknownRule> {
        if RULE_GROUPS.contains(&selector) {
            return Ok(ALL_RULES
                .iter()
                .copied()
                .filter(|rule| rule.group() == selector)
                .collect());
        }
        match Rule::from_name(selector) {
            Some(rule) => Ok(vec![rule]),
            None => Err(UnknownRule { name: selector.to_string() }),
        }
    }

    /// Build the enabled set from configuration. `select` replaces the
    /// defaults entirely; `extend_select` adds on top; `ignore` always wins.
    pub fn from_selection(
        select: &[String],
        extend_select: &[String],
        ignore: &[String],
    ) -> Result<Self, UnknownRule> {
        let mut set = if select.is_empty() {
            Self::default_rules()
        } else {
            let mut set = Self::empty();
            for selector in select {
                for rule in Self::resolve_selector(selector)? {
                    set.insert(rule);
                }
            }
            set
        };
        for selector in extend_select {
            for rule in Self::resolve_selector(selector)? {
                set.insert(rule);
            }
        }
        for selector in ignore {
            for rule in Self::resolve_selector(selector)? {
                set.remove(rule);
            }
        }
        Ok(set)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown rule or group: `{name}`")]
pub struct UnknownRule {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for rule in ALL_RULES {
            assert_eq!(Rule::from_name(rule.name()), Some(rule));
        }
        assert_eq!(Rule::from_name("not_a_rule"), None);
    }

    #[test]
    fn group_selector_expands() {
        let rules = RuleSet::resolve_selector("architecture").unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.contains(&Rule::InternalModuleImport));
        assert!(rules.contains(&Rule::DeepRelativeImport));
    }

    #[test]
    fn defaults_exclude_noisy_rules() {
        let set = RuleSet::default_rules();
        assert!(set.contains(&Rule::NoEval));
        assert!(!set.contains(&Rule::ObjectInjection));
    }

    #[test]
    fn ignore_wins_over_select() {
        let set = RuleSet::from_selection(
            &["security".to_string()],
            &[],
            &["no_eval".to_string()],
        )
        .unwrap();
        assert!(!set.contains(&Rule::NoEval));
        assert!(set.contains(&Rule::DynamicRequire));
    }

    #[test]
    fn unknown_selector_is_an_error() {
        assert!(RuleSet::from_selection(&["nope".to_string()], &[], &[]).is_err());
    }
}
