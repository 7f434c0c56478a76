use std::path::PathBuf;

use crate::parser::SyntaxError;

/// A file could not be checked because it failed to parse.
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", .filename.display())]
pub struct ParseError {
    pub filename: PathBuf,
    #[source]
    pub source: SyntaxError,
}

impl ParseError {
    pub fn new(filename: PathBuf, source: SyntaxError) -> Self {
        Self { filename, source }
    }
}
