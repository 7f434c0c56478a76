/// TOML options for `[lint.no-document-cookie]`.
///
/// Reading `document.cookie` is allowed by default; set
/// `allow-reading = false` to flag reads too.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct NoDocumentCookieOptions {
    pub allow_reading: Option<bool>,
}

/// Resolved options for the `no_document_cookie` rule.
#[derive(Clone, Debug)]
pub struct ResolvedNoDocumentCookieOptions {
    pub allow_reading: bool,
}

impl ResolvedNoDocumentCookieOptions {
    pub fn resolve(options: Option<&NoDocumentCookieOptions>) -> anyhow::Result<Self> {
        let allow_reading = options
            .and_then(|opts| opts.allow_reading)
            .unwrap_or(true);
        Ok(Self { allow_reading })
    }
}
