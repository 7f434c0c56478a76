use std::env;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use wary_core::config::{ArgsConfig, build_config};
use wary_core::diagnostic::Diagnostic;
use wary_core::fs::discover_files;
use wary_core::toml::{TomlOptions, find_wary_toml, parse_wary_toml};

use crate::args::CheckCommand;
use crate::output_format::{self, print_notes, print_summary};
use crate::statistics::print_statistics;
use crate::status::ExitStatus;

use output_format::{ConciseEmitter, Emitter, FullEmitter, JsonEmitter, OutputFormat};

pub fn check(args: CheckCommand, no_color: bool) -> Result<ExitStatus> {
    let start = if args.with_timing {
        Some(std::time::Instant::now())
    } else {
        None
    };

    let input_paths: Vec<PathBuf> = args.files.iter().map(PathBuf::from).collect();
    let cwd = env::current_dir().ok();

    // Look for the nearest wary.toml, starting from the first input path.
    let config_path = input_paths.first().and_then(|path| {
        let start = if path.is_absolute() {
            path.clone()
        } else {
            cwd.as_ref()?.join(path)
        };
        find_wary_toml(&start)
    });

    let toml: Option<TomlOptions> = match &config_path {
        Some(path) => Some(parse_wary_toml(path)?),
        None => None,
    };

    // Track if we're using a config from a parent directory
    let parent_config_path = config_path.filter(|path| {
        match (path.parent(), &cwd) {
            (Some(config_dir), Some(current_dir)) => config_dir != current_dir,
            _ => false,
        }
    });

    let exclude = toml
        .as_ref()
        .and_then(|options| options.lint.as_ref())
        .and_then(|lint| lint.exclude.clone())
        .unwrap_or_default();

    let paths = discover_files(&input_paths, &exclude, args.no_default_exclude)?;

    if paths.is_empty() {
        println!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No JavaScript files found under the given path(s)."
                .white()
                .bold()
        );
        return Ok(ExitStatus::Success);
    }

    let check_config = ArgsConfig {
        files: input_paths,
        fix: args.fix,
        unsafe_fixes: args.unsafe_fixes,
        select: args.select.clone(),
        extend_select: args.extend_select.clone(),
        ignore: args.ignore.clone(),
        no_default_exclude: args.no_default_exclude,
    };

    let config = build_config(&check_config, toml, paths)?;
    let file_results = wary_core::check::check(config);

    let mut all_errors = Vec::new();
    let mut all_diagnostics = Vec::new();

    for (path, result) in file_results {
        match result {
            Ok(diagnostics) => {
                if !diagnostics.is_empty() {
                    all_diagnostics.push((path, diagnostics));
                }
            }
            Err(e) => {
                all_errors.push((path, e));
            }
        }
    }

    // Flatten all diagnostics into a single vector and sort globally
    let mut all_diagnostics_flat: Vec<&Diagnostic> = all_diagnostics
        .iter()
        .flat_map(|(_path, diagnostics)| diagnostics.iter())
        .collect();

    all_diagnostics_flat.sort();

    if args.statistics {
        return print_statistics(&all_diagnostics_flat);
    }

    let mut stdout = std::io::stdout();

    match args.output_format {
        OutputFormat::Concise => {
            ConciseEmitter.emit(&mut stdout, &all_diagnostics_flat, &all_errors)?;
        }
        OutputFormat::Json => {
            JsonEmitter.emit(&mut stdout, &all_diagnostics_flat, &all_errors)?;
        }
        OutputFormat::Full => {
            FullEmitter { no_color }.emit(&mut stdout, &all_diagnostics_flat, &all_errors)?;
        }
    }

    // For human-readable formats, print the summary and notes. Skip for JSON
    // to avoid corrupting structured output.
    if matches!(
        args.output_format,
        OutputFormat::Full | OutputFormat::Concise
    ) {
        print_summary(
            &all_diagnostics_flat,
            !all_errors.is_empty(),
            args.fix,
            args.unsafe_fixes,
        );

        let mut notes: Vec<String> = Vec::new();
        if let Some(start) = start {
            notes.push(format!("Checked files in: {:?}", start.elapsed()));
        }
        if let Some(config_path) = parent_config_path {
            notes.push(format!("Used '{}'", config_path.display()));
        }
        print_notes(&notes);
    }

    if !all_errors.is_empty() {
        return Ok(ExitStatus::Error);
    }

    if all_diagnostics.is_empty() {
        return Ok(ExitStatus::Success);
    }

    Ok(ExitStatus::Failure)
}
