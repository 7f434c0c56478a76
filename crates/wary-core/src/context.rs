//! File-context classification.
//!
//! Several rules relax themselves depending on where a file lives: code
//! under `tests/` is allowed things production code is not, config and
//! build scripts legitimately do dynamic requires, and so on. Paths
//! classify into exactly one context; the first matching bucket wins, in
//! the order tests, config, build.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileContext {
    Tests,
    Config,
    Build,
    Runtime,
}

impl FileContext {
    pub fn name(&self) -> &'static str {
        match self {
            FileContext::Tests => "tests",
            FileContext::Config => "config",
            FileContext::Build => "build",
            FileContext::Runtime => "runtime",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tests" => Some(FileContext::Tests),
            "config" => Some(FileContext::Config),
            "build" => Some(FileContext::Build),
            "runtime" => Some(FileContext::Runtime),
            _ => None,
        }
    }
}

pub fn classify_path(path: &Path) -> FileContext {
    let components: Vec<&str> = path
        .components()
        .filter_map(|component| component.as_os_str().to_str())
        .collect();
    let file_name = components.last().copied().unwrap_or("");

    if file_name.contains(".test.")
        || file_name.contains(".spec.")
        || components
            .iter()
            .any(|component| matches!(*component, "__tests__" | "test" | "tests"))
    {
        return FileContext::Tests;
    }

    if file_name.contains(".config.")
        || components
            .iter()
            .any(|component| matches!(*component, ".config" | "config"))
    {
        return FileContext::Config;
    }

    if file_name.starts_with("gulpfile")
        || file_name.contains("webpack")
        || components
            .iter()
            .any(|component| matches!(*component, "build" | "dist" | "scripts"))
    {
        return FileContext::Build;
    }

    FileContext::Runtime
}

/// A set of user-supplied regex patterns, compiled once. Each pattern is
/// anchored and matched against the whole candidate. A pattern that fails
/// to compile is dropped (it never matches) instead of failing the run.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    regexes: Vec<Regex>,
}

impl PatternSet {
    pub fn compile(patterns: &[String]) -> Self {
        let regexes = patterns
            .iter()
            .filter_map(|pattern| match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(regex) => Some(regex),
                Err(error) => {
                    tracing::warn!("invalid pattern `{pattern}` ignored: {error}");
                    None
                }
            })
            .collect();
        Self { regexes }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regexes.iter().any(|regex| regex.is_match(candidate))
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn classifies_test_paths() {
        assert_eq!(classify_path(&PathBuf::from("src/app.test.js")), FileContext::Tests);
        assert_eq!(classify_path(&PathBuf::from("src/__tests__/app.js")), FileContext::Tests);
        assert_eq!(classify_path(&PathBuf::from("tests/app.js")), FileContext::Tests);
    }

    #[test]
    fn classifies_config_and_build_paths() {
        assert_eq!(classify_path(&PathBuf::from("webpack.config.js")), FileContext::Config);
        assert_eq!(classify_path(&PathBuf::from("config/db.js")), FileContext::Config);
        assert_eq!(classify_path(&PathBuf::from("scripts/release.js")), FileContext::Build);
        assert_eq!(classify_path(&PathBuf::from("gulpfile.js")), FileContext::Build);
    }

    #[test]
    fn everything_else_is_runtime() {
        assert_eq!(classify_path(&PathBuf::from("src/server.js")), FileContext::Runtime);
    }

    #[test]
    fn invalid_pattern_never_matches() {
        let set = PatternSet::compile(&["[".to_string(), "lodash/fp".to_string()]);
        assert!(!set.matches("["));
        assert!(set.matches("lodash/fp"));
        assert!(!set.matches("lodash/fp/extra"));
    }
}
