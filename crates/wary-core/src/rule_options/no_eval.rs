use super::resolve_with_extend;

/// Keywords that mark a nearby comment as an intentional, reviewed use.
const DEFAULT_INTENTIONAL_KEYWORDS: &[&str] = &["intentional", "reviewed", "safe"];

/// TOML options for `[lint.no-eval]`.
///
/// `additional-functions` fully replaces the (empty) default list of extra
/// eval-like functions to flag; `extend-additional-functions` adds to it.
/// Specifying both is an error. With `allow-with-comment`, a line comment
/// within one line of the call containing one of `intentional-keywords`
/// silences the diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct NoEvalOptions {
    pub additional_functions: Option<Vec<String>>,
    pub extend_additional_functions: Option<Vec<String>>,
    pub allow_with_comment: Option<bool>,
    pub intentional_keywords: Option<Vec<String>>,
    pub extend_intentional_keywords: Option<Vec<String>>,
}

/// Resolved options for the `no_eval` rule, ready for use during linting.
#[derive(Clone, Debug)]
pub struct ResolvedNoEvalOptions {
    pub additional_functions: Vec<String>,
    pub allow_with_comment: bool,
    pub intentional_keywords: Vec<String>,
}

impl ResolvedNoEvalOptions {
    pub fn resolve(options: Option<&NoEvalOptions>) -> anyhow::Result<Self> {
        let (functions_base, functions_extend, allow_with_comment, keywords_base, keywords_extend) =
            match options {
                Some(opts) => (
                    opts.additional_functions.as_ref(),
                    opts.extend_additional_functions.as_ref(),
                    opts.allow_with_comment.unwrap_or(false),
                    opts.intentional_keywords.as_ref(),
                    opts.extend_intentional_keywords.as_ref(),
                ),
                None => (None, None, false, None, None),
            };

        let additional_functions = resolve_with_extend(
            functions_base,
            functions_extend,
            &[],
            "no-eval",
            "additional-functions",
        )?;

        let intentional_keywords = resolve_with_extend(
            keywords_base,
            keywords_extend,
            DEFAULT_INTENTIONAL_KEYWORDS,
            "no-eval",
            "intentional-keywords",
        )?;

        Ok(Self { additional_functions, allow_with_comment, intentional_keywords })
    }
}
