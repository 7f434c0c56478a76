//! File discovery and path helpers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use path_absolutize::Absolutize;

/// Extensions wary checks.
/// Extensions discovered as JavaScript. `.jsx` files are walked too, but JSX
/// element syntax is not parsed: a file that uses it surfaces as a per-file
/// parse error rather than being skipped silently.
pub const JS_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx"];

/// Directories and files excluded from discovery unless the user opts out.
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", "dist", "build", "*.min.js"];

pub fn has_js_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| JS_EXTENSIONS.contains(&extension))
}

/// Expand the input paths into the list of files to check.
///
/// Directories are walked with gitignore semantics; `exclude` adds
/// user-supplied glob patterns on top of [`DEFAULT_EXCLUDES`]. Files named
/// explicitly on the command line are always checked, excludes or not.
pub fn discover_files(
    paths: &[PathBuf],
    exclude: &[String],
    no_default_exclude: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        let mut overrides = OverrideBuilder::new(path);
        if !no_default_exclude {
            for pattern in DEFAULT_EXCLUDES {
                overrides
                    .add(&format!("!{pattern}"))
                    .with_context(|| format!("Invalid default exclude pattern: {pattern}"))?;
            }
        }
        for pattern in exclude {
            overrides
                .add(&format!("!{pattern}"))
                .with_context(|| format!("Invalid exclude pattern: {pattern}"))?;
        }
        let overrides = overrides.build().context("Failed to build exclude patterns")?;

        let walker = WalkBuilder::new(path).overrides(overrides).build();
        for entry in walker {
            let entry = entry?;
            let entry_path = entry.path();
            if entry.file_type().is_some_and(|file_type| file_type.is_file())
                && has_js_extension(entry_path)
            {
                files.push(entry_path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Render a path relative to the current directory when possible, for
/// stable, short output.
pub fn relativize_path(path: &Path) -> String {
    if let Ok(current_dir) = std::env::current_dir()
        && let Ok(absolute) = path.absolutize()
        && let Ok(relative) = absolute.strip_prefix(&current_dir)
    {
        return relative.display().to_string();
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_only_js_files_and_skips_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("node_modules/dep")).unwrap();
        fs::write(root.join("src/app.js"), "foo();\n").unwrap();
        fs::write(root.join("src/app.jsx"), "foo();\n").unwrap();
        fs::write(root.join("src/lib.min.js"), "foo();\n").unwrap();
        fs::write(root.join("src/readme.md"), "# hi\n").unwrap();
        fs::write(root.join("node_modules/dep/index.js"), "foo();\n").unwrap();

        let files = discover_files(&[root.to_path_buf()], &[], false).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|file| file.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["app.js", "app.jsx"]);
    }

    #[test]
    fn user_excludes_apply() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("generated")).unwrap();
        fs::write(root.join("app.js"), "foo();\n").unwrap();
        fs::write(root.join("generated/out.js"), "foo();\n").unwrap();

        let files =
            discover_files(&[root.to_path_buf()], &["generated/**".to_string()], false).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.js"));
    }

    #[test]
    fn explicit_file_is_always_included() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("lib.min.js");
        fs::write(&file, "foo();\n").unwrap();

        let files = discover_files(&[file.clone()], &[], false).unwrap();
        assert_eq!(files, vec![file]);
    }
}
