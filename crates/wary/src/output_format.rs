use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use annotate_snippets::Renderer;
use anyhow::Result;
use colored::Colorize;
use wary_core::diagnostic::{Diagnostic, render_diagnostic};
use wary_core::rule_set::Rule;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Annotated snippets of the offending source code
    #[default]
    Full,
    /// One line per violation
    Concise,
    /// Machine-readable JSON
    Json,
}

/// How emitters report files that could not be checked at all.
fn emit_errors(writer: &mut dyn Write, errors: &[(String, anyhow::Error)]) -> Result<()> {
    for (path, error) in errors {
        writeln!(writer, "{}: {path}: {error:#}", "Error".red().bold())?;
    }
    Ok(())
}

pub trait Emitter {
    fn emit(
        &self,
        writer: &mut dyn Write,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> Result<()>;
}

/// Default human-readable output: one annotated snippet per violation.
pub struct FullEmitter {
    pub no_color: bool,
}

impl Emitter for FullEmitter {
    fn emit(
        &self,
        writer: &mut dyn Write,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> Result<()> {
        emit_errors(writer, errors)?;

        let renderer = if self.no_color {
            Renderer::plain()
        } else {
            Renderer::styled()
        };

        // Diagnostics are sorted by file, so cache the last file read.
        let mut sources: HashMap<PathBuf, String> = HashMap::new();
        for diagnostic in diagnostics {
            let source = sources
                .entry(diagnostic.filename.clone())
                .or_insert_with(|| {
                    std::fs::read_to_string(&diagnostic.filename).unwrap_or_default()
                });
            let origin = diagnostic.filename.display().to_string();
            let rendered = render_diagnostic(
                source.as_str(),
                &origin,
                diagnostic.rule_name(),
                diagnostic,
                &renderer,
            );
            writeln!(writer, "{rendered}\n")?;
        }
        Ok(())
    }
}

/// `path:row:col: rule message`, one line per violation.
pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit(
        &self,
        writer: &mut dyn Write,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> Result<()> {
        emit_errors(writer, errors)?;

        for diagnostic in diagnostics {
            let (row, column) = diagnostic
                .location
                .as_ref()
                .map_or((0, 0), |location| (location.row, location.column));
            writeln!(
                writer,
                "{}:{row}:{column}: {} {}",
                diagnostic.filename.display(),
                diagnostic.rule_name().bold(),
                diagnostic.message.body,
            )?;
        }
        Ok(())
    }
}

/// Serializes the violations as a JSON array. Unreadable files are reported
/// on stderr so the JSON stays well-formed.
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit(
        &self,
        writer: &mut dyn Write,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> Result<()> {
        for (path, error) in errors {
            eprintln!("{}: {path}: {error:#}", "Error".red().bold());
        }
        serde_json::to_writer_pretty(&mut *writer, &diagnostics)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// The closing lines of a human-readable report: violation count plus hints
/// about fixes that were not applied.
pub fn print_summary(
    diagnostics: &[&Diagnostic],
    has_errors: bool,
    fix_requested: bool,
    unsafe_fixes: bool,
) {
    if diagnostics.is_empty() {
        if !has_errors {
            println!("{}", "All checks passed!".green().bold());
        }
        return;
    }

    if diagnostics.len() == 1 {
        println!("Found 1 error.");
    } else {
        println!("Found {} errors.", diagnostics.len());
    }

    let fixable = diagnostics
        .iter()
        .filter(|diagnostic| !diagnostic.fix.is_empty())
        .count();
    if fixable > 0 && !fix_requested {
        println!("{fixable} fixable with the `--fix` option.");
    }

    let hidden_unsafe = diagnostics
        .iter()
        .filter(|diagnostic| {
            diagnostic.fix.is_empty()
                && !unsafe_fixes
                && Rule::from_name(diagnostic.rule_name()).is_some_and(|rule| rule.has_unsafe_fix())
        })
        .count();
    if hidden_unsafe > 0 {
        println!(
            "{hidden_unsafe} hidden fix(es) can be enabled with the `--unsafe-fixes` option."
        );
    }
}

pub fn print_notes(notes: &[String]) {
    if notes.is_empty() {
        return;
    }
    println!();
    for note in notes {
        println!("{note}");
    }
}
