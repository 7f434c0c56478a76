use std::cmp::Ordering;
use std::path::PathBuf;

use annotate_snippets::{Level, Renderer, Snippet};
use serde::Serialize;

use crate::location::Location;
use crate::syntax::Span;

pub use crate::fix::{Fix, Suggestion};

/// The human-facing payload of a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationData {
    /// Rule name, e.g. `no_eval`.
    pub name: String,
    /// Stable identifier for the specific message a rule emitted, e.g.
    /// `evalWithExpression`. A rule may have several.
    pub message_id: &'static str,
    /// The message shown to the user.
    pub body: String,
    /// Optional help text rendered as a footer.
    pub help: Option<String>,
}

impl ViolationData {
    pub fn new(
        name: String,
        message_id: &'static str,
        body: String,
        help: Option<String>,
    ) -> Self {
        Self { name, message_id, body, help }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: ViolationData,
    /// Byte range of the offending code.
    pub range: Span,
    /// Row/column of `range.start`, computed once per file after checking.
    pub location: Option<Location>,
    pub filename: PathBuf,
    /// The auto-applicable fix, or `Fix::empty()` when the rule has none.
    pub fix: Fix,
    /// Edits surfaced to the user but never auto-applied.
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    pub fn new(message: ViolationData, range: Span, fix: Fix) -> Self {
        Self {
            message,
            range,
            location: None,
            filename: PathBuf::new(),
            fix,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    pub fn rule_name(&self) -> &str {
        &self.message.name
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.filename
            .cmp(&other.filename)
            .then(self.range.start.cmp(&other.range.start))
            .then(self.range.end.cmp(&other.range.end))
            .then(self.message.name.cmp(&other.message.name))
    }
}

/// Render one diagnostic the way the CLI prints it: file snippet with the
/// offending range underlined, plus any suggestion or help footers.
pub fn render_diagnostic(
    source: &str,
    origin: &str,
    rule_name: &str,
    diagnostic: &Diagnostic,
    renderer: &Renderer,
) -> String {
    let start = diagnostic.range.start.min(source.len());
    let end = diagnostic.range.end.min(source.len());

    let mut message = Level::Warning.title(rule_name).snippet(
        Snippet::source(source)
            .origin(origin)
            .fold(true)
            .annotation(Level::Warning.span(start..end).label(&diagnostic.message.body)),
    );

    if let Some(help) = &diagnostic.message.help {
        message = message.footer(Level::Help.title(help));
    }
    for suggestion in &diagnostic.suggestions {
        message = message.footer(Level::Help.title(&suggestion.body));
    }

    renderer.render(message).to_string()
}
