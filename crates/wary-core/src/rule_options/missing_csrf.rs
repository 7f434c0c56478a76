use super::resolve_with_extend;
use crate::context::PatternSet;

/// Middleware names that count as CSRF protection.
const DEFAULT_MIDDLEWARE_PATTERNS: &[&str] =
    &["csrf", "csurf", "csrfProtection", "doubleCsrf", "verifyCsrf"];

/// Route-registering methods that mutate state and therefore need protection.
const DEFAULT_ROUTE_METHODS: &[&str] = &["post", "put", "delete", "patch"];

/// Receiver names treated as an Express-style app or router.
const DEFAULT_OBJECT_NAMES: &[&str] = &["app", "router"];

/// TOML options for `[lint.missing-csrf]`.
///
/// `middleware-patterns` fully replaces the default list of middleware names
/// that count as CSRF protection; `extend-middleware-patterns` adds to it.
/// Specifying both is an error. Patterns are anchored regexes matched
/// against the middleware name.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct MissingCsrfOptions {
    pub middleware_patterns: Option<Vec<String>>,
    pub extend_middleware_patterns: Option<Vec<String>>,
    pub route_methods: Option<Vec<String>>,
    pub object_names: Option<Vec<String>>,
}

/// Resolved options for the `missing_csrf` rule, ready for use during linting.
#[derive(Clone, Debug)]
pub struct ResolvedMissingCsrfOptions {
    pub middleware_patterns: PatternSet,
    pub route_methods: Vec<String>,
    pub object_names: Vec<String>,
}

impl ResolvedMissingCsrfOptions {
    pub fn resolve(options: Option<&MissingCsrfOptions>) -> anyhow::Result<Self> {
        let (patterns_base, patterns_extend, route_methods, object_names) = match options {
            Some(opts) => (
                opts.middleware_patterns.as_ref(),
                opts.extend_middleware_patterns.as_ref(),
                opts.route_methods.clone(),
                opts.object_names.clone(),
            ),
            None => (None, None, None, None),
        };

        let patterns = resolve_with_extend(
            patterns_base,
            patterns_extend,
            DEFAULT_MIDDLEWARE_PATTERNS,
            "missing-csrf",
            "middleware-patterns",
        )?;

        Ok(Self {
            middleware_patterns: PatternSet::compile(&patterns),
            route_methods: route_methods.unwrap_or_else(|| {
                DEFAULT_ROUTE_METHODS.iter().map(|s| (*s).to_string()).collect()
            }),
            object_names: object_names.unwrap_or_else(|| {
                DEFAULT_OBJECT_NAMES.iter().map(|s| (*s).to_string()).collect()
            }),
        })
    }
}
