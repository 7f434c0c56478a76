use crate::check::check;
use crate::config::{ArgsConfig, build_config};
use crate::diagnostic::Diagnostic;
use crate::toml::TomlOptions;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Parse an inline `wary.toml` fragment for tests that exercise rule options.
pub fn toml_settings(contents: &str) -> TomlOptions {
    toml::from_str(contents).expect("invalid test settings")
}

fn run_check(
    file: &Path,
    rule: &str,
    fix: bool,
    unsafe_fixes: bool,
    settings: Option<TomlOptions>,
) -> Vec<Diagnostic> {
    let check_config = ArgsConfig {
        files: vec![file.to_path_buf()],
        fix,
        unsafe_fixes,
        select: rule.to_string(),
        extend_select: String::new(),
        ignore: String::new(),
        no_default_exclude: false,
    };

    let config = build_config(&check_config, settings, vec![file.to_path_buf()])
        .expect("Failed to build config");

    let results = check(config);

    for (_, result) in results {
        match result {
            Ok(diagnostics) => return diagnostics,
            Err(error) => panic!("check failed: {error}"),
        }
    }

    Vec::new()
}

/// Write a snippet to a throwaway `.js` file and lint it with a single rule
/// selected. The file name deliberately avoids words like `test` so the
/// snippet is classified as runtime code.
fn check_snippet(
    text: &str,
    rule: &str,
    fix: bool,
    unsafe_fixes: bool,
    settings: Option<TomlOptions>,
) -> Vec<Diagnostic> {
    let temp_file = Builder::new()
        .prefix("wary-snippet")
        .suffix(".js")
        .tempfile()
        .unwrap();

    fs::write(&temp_file, text).expect("Failed to write initial content");

    run_check(temp_file.path(), rule, fix, unsafe_fixes, settings)
}

/// Check if code has any diagnostics for the given rule
pub fn check_code(text: &str, rule: &str) -> Vec<Diagnostic> {
    check_snippet(text, rule, false, false, None)
}

/// Check if code has any diagnostics for the given rule, with custom settings
pub fn check_code_with_settings(text: &str, rule: &str, settings: TomlOptions) -> Vec<Diagnostic> {
    check_snippet(text, rule, false, false, Some(settings))
}

/// Lint a snippet placed at a specific relative path inside a temp directory,
/// for rules that change behavior with the file's location.
pub fn check_code_at_path(
    text: &str,
    rule: &str,
    relative_path: &str,
    settings: Option<TomlOptions>,
) -> Vec<Diagnostic> {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path: PathBuf = temp_dir.path().join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(&file_path, text).expect("Failed to write initial content");

    run_check(&file_path, rule, false, false, settings)
}

/// Convenience function to assert that code has no lint
pub fn expect_no_lint(text: &str, rule: &str) {
    let diagnostics = check_code(text, rule);
    assert!(
        diagnostics.is_empty(),
        "Expected no lint for rule '{rule}' on code: {text}\nGot: {diagnostics:?}"
    );
}

/// Convenience function to assert that code has no lint, with custom settings
pub fn expect_no_lint_with_settings(text: &str, rule: &str, settings: TomlOptions) {
    let diagnostics = check_code_with_settings(text, rule, settings);
    assert!(
        diagnostics.is_empty(),
        "Expected no lint for rule '{rule}' on code: {text}\nGot: {diagnostics:?}"
    );
}

/// Convenience function to assert that code produces a lint whose message
/// contains `msg`
pub fn expect_lint(text: &str, msg: &str, rule: &str) {
    let diagnostics = check_code(text, rule);
    assert!(
        diagnostics.iter().any(|diagnostic| diagnostic.message.body.contains(msg)),
        "Expected a lint containing '{msg}' for rule '{rule}' on code: {text}\nGot: {diagnostics:?}"
    );
}

fn apply_rule_fixes(
    text: &str,
    rule: &str,
    unsafe_fixes: bool,
    settings: Option<TomlOptions>,
) -> String {
    let temp_file = Builder::new()
        .prefix("wary-snippet")
        .suffix(".js")
        .tempfile()
        .unwrap();

    fs::write(&temp_file, text).expect("Failed to write initial content");

    let _diagnostics = run_check(temp_file.path(), rule, true, unsafe_fixes, settings);

    // Read the fixed content back
    fs::read_to_string(&temp_file).expect("Failed to read fixed content")
}

/// Get fixed text for a series of code snippets
pub fn get_fixed_text(text: Vec<&str>, rule: &str) -> String {
    get_fixed_text_with_settings(text, rule, None)
}

/// Get fixed text for a series of code snippets, with custom settings
pub fn get_fixed_text_with_settings(
    text: Vec<&str>,
    rule: &str,
    settings: Option<TomlOptions>,
) -> String {
    let mut output: String = String::new();

    for txt in text.iter() {
        let original_content = txt;
        let modified_content = apply_rule_fixes(txt, rule, false, settings.clone());

        output.push_str(
            format!("OLD:\n====\n{original_content}\nNEW:\n====\n{modified_content}\n\n").as_str(),
        );
    }

    output.trim_end().to_string()
}

/// Get fixed text with unsafe fixes for a series of code snippets
pub fn get_unsafe_fixed_text(text: Vec<&str>, rule: &str) -> String {
    get_unsafe_fixed_text_with_settings(text, rule, None)
}

/// Get fixed text with unsafe fixes for a series of code snippets, with
/// custom settings
pub fn get_unsafe_fixed_text_with_settings(
    text: Vec<&str>,
    rule: &str,
    settings: Option<TomlOptions>,
) -> String {
    let mut output: String = String::new();

    for txt in text.iter() {
        let original_content = txt;
        let modified_content = apply_rule_fixes(txt, rule, true, settings.clone());

        output.push_str(
            format!("OLD:\n====\n{original_content}\nNEW:\n====\n{modified_content}\n\n").as_str(),
        );
    }

    output.trim_end().to_string()
}

/// Extract the highlighted text based on the diagnostic range for a given rule
///
/// This runs the linter on the provided code and returns the exact text that
/// the diagnostic underlines, which may differ from the range its fix edits.
pub fn expect_diagnostic_highlight(text: &str, rule: &str, expected_highlight: &str) {
    let diagnostics = check_code(text, rule);

    if diagnostics.is_empty() {
        panic!("No diagnostics found for rule '{rule}' on code: {text}");
    }
    if diagnostics.len() > 1 {
        panic!(
            "Multiple diagnostics found for rule '{rule}' on code: {text}. Expected exactly one."
        );
    }

    let range = diagnostics[0].range;
    if range.end > text.len() || range.start > range.end {
        panic!(
            "Invalid range [{}, {}) for text of length {} on code: {}",
            range.start,
            range.end,
            text.len(),
            text
        );
    }

    let highlighted = &text[range.start..range.end];
    assert_eq!(
        highlighted, expected_highlight,
        "Expected highlight '{expected_highlight}' but got '{highlighted}' for rule '{rule}' on code: {text}"
    );
}

/// Format diagnostics as they would appear in the console for snapshot testing
pub fn format_diagnostics(text: &str, rule: &str) -> String {
    format_diagnostics_with_settings(text, rule, None)
}

/// Format diagnostics as they would appear in the console for snapshot testing,
/// with custom settings.
///
/// This uses the shared `render_diagnostic()` (same rendering logic as the
/// CLI) to format diagnostics with line numbers, highlighted ranges, and
/// suggestion footers.
pub fn format_diagnostics_with_settings(
    text: &str,
    rule: &str,
    settings: Option<TomlOptions>,
) -> String {
    use annotate_snippets::Renderer;

    use crate::diagnostic::render_diagnostic;

    let diagnostics = check_snippet(text, rule, false, false, settings);

    if diagnostics.is_empty() {
        return "All checks passed!".to_string();
    }

    // Force plain rendering for consistent snapshots (no colors)
    let renderer = Renderer::plain();

    let mut output = String::new();

    for diagnostic in &diagnostics {
        let rendered =
            render_diagnostic(text, "<test>", &diagnostic.message.name, diagnostic, &renderer);
        output.push_str(&format!("{rendered}\n"));
    }

    output.push_str(&format!(
        "Found {} error{}.",
        diagnostics.len(),
        if diagnostics.len() == 1 { "" } else { "s" }
    ));

    output
}
