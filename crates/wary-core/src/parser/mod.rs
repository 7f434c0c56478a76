//! A compact recursive-descent parser for the JavaScript subset the lint
//! rules inspect.
//!
//! The goal is faithful node shapes and spans for the constructs rules match
//! on (calls, members, imports, templates, regex literals, functions), not a
//! complete grammar. Anything outside the subset is a [`SyntaxError`]; the
//! driver reports that per file and moves on.

mod lexer;
mod parser;

pub use lexer::{Lexer, TemplatePart, Token, TokenKind};
pub use parser::Parser;

use crate::syntax::Program;

/// A parse failure with a byte offset into the source.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} (byte {offset})")]
pub struct SyntaxError {
    pub message: String,
    pub offset: usize,
}

/// Parse a whole file.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    Parser::parse_source(source)
}
