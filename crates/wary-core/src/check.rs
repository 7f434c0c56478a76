use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::analyze::document::check_document;
use crate::analyze::statement::check_statement;
pub use crate::checker::Checker;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, Fix};
use crate::error::ParseError;
use crate::fix::apply_fixes;
use crate::fs::relativize_path;
use crate::parser::parse;
use crate::rule_set::Rule;
use crate::suppression::SuppressionManager;
use crate::utils::{compute_lints_location, find_new_lines};

/// Cap on the rewrite-and-recheck loop in `lint_fix`. Overlapping fixes are
/// deferred a round at a time, so a file that still has skipped fixes after
/// this many rounds is left as-is rather than looping forever.
const MAX_FIX_ITERATIONS: usize = 10;

pub fn check(config: Config) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    // Wrap config in Arc to avoid expensive clones in parallel execution
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config));
            (relativize_path(file), res)
        })
        .collect()
}

pub fn check_path(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    if config.apply_fixes || config.apply_unsafe_fixes {
        lint_fix(path, config)
    } else {
        lint_only(path, config)
    }
}

pub fn lint_only(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);
    let contents = fs::read_to_string(Path::new(&path))
        .with_context(|| format!("Failed to read file: {path}"))?;

    let checks = get_checks(&contents, &PathBuf::from(&path), &config)
        .with_context(|| format!("Failed to get checks for file: {path}"))?;

    Ok(checks)
}

pub fn lint_fix(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);

    let mut has_skipped_fixes = true;
    let mut checks: Vec<Diagnostic>;
    let mut iterations = 0;

    loop {
        let contents = fs::read_to_string(Path::new(&path))
            .with_context(|| format!("Failed to read file: {path}"))?;

        checks = get_checks(&contents, &PathBuf::from(&path), &config)
            .with_context(|| format!("Failed to get checks for file: {path}"))?;

        if !has_skipped_fixes || iterations >= MAX_FIX_ITERATIONS {
            break;
        }
        iterations += 1;

        let (new_has_skipped_fixes, fixed_text) = apply_fixes(&checks, &contents);
        has_skipped_fixes = new_has_skipped_fixes;

        fs::write(&path, fixed_text).with_context(|| format!("Failed to write file: {path}"))?;
    }

    Ok(checks)
}

// Takes the JavaScript code as a string, parses it, and obtains a (possibly
// empty) vector of `Diagnostic`s.
//
// If there are diagnostics to report, this is also where their range in the
// string is converted to their location (row, column).
pub fn get_checks(contents: &str, file: &Path, config: &Config) -> Result<Vec<Diagnostic>> {
    let program = match parse(contents) {
        Ok(program) => program,
        Err(source) => return Err(ParseError::new(file.to_path_buf(), source).into()),
    };

    let suppression = SuppressionManager::from_program(&program, contents);

    let mut checker = Checker::new(contents, file, suppression, config.rule_options.clone());
    checker.rule_set = config.rules_to_apply.clone();

    // Statement-level checks. This gathers all violations, no matter whether
    // they are suppressed or not. They are filtered out in the next step
    // (this is also Ruff's approach).
    checker.scopes.push(&[], &program.body);
    for stmt in &program.body {
        check_statement(stmt, &mut checker)?;
    }
    checker.scopes.pop();

    // Document-level checks: suppression filtering plus the rules that need
    // the whole file, like unused-suppression reporting. This must run after
    // the statement walk because it consumes the used/unused directive state.
    check_document(&mut checker)?;

    // Some rules have a fix available in their implementation but should not
    // apply it in this run, e.g. because they are listed in `unfixable`, left
    // out of `fixable`, or their fix is unsafe and `--unsafe-fixes` was not
    // passed. Strip those fixes here, before `apply_fixes()` ever sees them.
    let rules_without_fix = checker
        .rule_set
        .iter()
        .filter(|rule| rule.has_no_fix())
        .map(|rule| rule.name().to_string())
        .collect::<Vec<String>>();

    let diagnostics: Vec<Diagnostic> = checker
        .diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            diagnostic.filename = file.to_path_buf();
            if rules_without_fix.contains(&diagnostic.message.name) {
                diagnostic.fix = Fix::empty();
            }
            if config.unfixable.contains(&diagnostic.message.name) {
                diagnostic.fix = Fix::empty();
            }
            if let Some(ref fixable_set) = config.fixable
                && !fixable_set.contains(&diagnostic.message.name)
            {
                diagnostic.fix = Fix::empty();
            }
            if !config.apply_unsafe_fixes
                && Rule::from_name(&diagnostic.message.name)
                    .is_some_and(|rule| rule.has_unsafe_fix())
            {
                diagnostic.fix = Fix::empty();
            }
            if diagnostic.fix.to_skip {
                diagnostic.fix = Fix::empty();
            }
            diagnostic
        })
        .collect();

    let loc_new_lines = find_new_lines(contents);
    let mut diagnostics = compute_lints_location(diagnostics, &loc_new_lines);
    diagnostics.sort();

    Ok(diagnostics)
}
