use crate::parser::SyntaxError;
use crate::syntax::{Comment, CommentKind, Span};

/// One interpolation-or-text part of a template literal.
///
/// Expression parts keep the raw source span of the `${...}` interior; the
/// parser re-lexes them so nested templates and strings work without the
/// lexer having to recurse into the parser.
#[derive(Debug, Clone)]
pub enum TemplatePart {
    Cooked { value: String, span: Span },
    Expr { span: Span },
}

#[derive(Debug, Clone)]
pub enum TokenKind {
    Identifier(String),
    String(String),
    Number(f64),
    Template(Vec<TemplatePart>),
    Regex { pattern: String, flags: String },
    Punct(&'static str),
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_punct(&self, p: &str) -> bool {
        matches!(&self.kind, TokenKind::Punct(s) if *s == p)
    }

    pub fn is_keyword(&self, kw: &str) -> bool {
        matches!(&self.kind, TokenKind::Identifier(s) if s == kw)
    }

    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(s) => Some(s),
            _ => None,
        }
    }
}

/// Multi-character punctuators, longest first so greedy matching is correct.
const PUNCTS: &[&str] = &[
    "...", "===", "!==", ">>>=", ">>>", "<<=", ">>=", "**=", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "{", "}", "(", ")", "[", "]", ";", ",", ".", "<", ">", "+",
    "-", "*", "/", "%", "&", "|", "^", "!", "~", "?", ":", "=",
];

/// Keywords after which a `/` starts a regular expression literal rather
/// than a division.
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case", "do",
    "else", "yield", "await",
];

pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Added to every produced span, so embedded fragments (template
    /// interpolations) report file-absolute offsets.
    base: usize,
    pub comments: Vec<Comment>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, base: usize) -> Self {
        Self { source, bytes: source.as_bytes(), pos: 0, base, comments: Vec::new() }
    }

    pub fn tokenize(mut self) -> Result<(Vec<Token>, Vec<Comment>), SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token(tokens.last())?;
            let eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if eof {
                break;
            }
        }
        Ok((tokens, self.comments))
    }

    fn span(&self, start: usize) -> Span {
        Span::new(start + self.base, self.pos + self.base)
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError { message: message.into(), offset: self.pos + self.base }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        loop {
            match self.peek() {
                Some(b) if b.is_ascii_whitespace() => {
                    self.pos += 1;
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    let start = self.pos;
                    self.pos += 2;
                    let text_start = self.pos;
                    while let Some(b) = self.peek() {
                        if b == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                    self.comments.push(Comment {
                        text: self.source[text_start..self.pos].to_string(),
                        kind: CommentKind::Line,
                        span: self.span(start),
                    });
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    let start = self.pos;
                    self.pos += 2;
                    let text_start = self.pos;
                    let mut closed = false;
                    while self.pos < self.bytes.len() {
                        if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                            closed = true;
                            break;
                        }
                        self.pos += 1;
                    }
                    if !closed {
                        return Err(self.error("unterminated block comment"));
                    }
                    let text_end = self.pos;
                    self.pos += 2;
                    self.comments.push(Comment {
                        text: self.source[text_start..text_end].to_string(),
                        kind: CommentKind::Block,
                        span: self.span(start),
                    });
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self, previous: Option<&Token>) -> Result<Token, SyntaxError> {
        self.skip_trivia()?;

        let start = self.pos;
        let Some(b) = self.peek() else {
            return Ok(Token { kind: TokenKind::Eof, span: self.span(start) });
        };

        if b == b'/' && self.regex_allowed(previous) {
            return self.lex_regex();
        }

        match b {
            b'"' | b'\'' => self.lex_string(b),
            b'`' => self.lex_template(),
            b'0'..=b'9' => self.lex_number(),
            b'.' if matches!(self.peek_at(1), Some(b'0'..=b'9')) => self.lex_number(),
            _ if is_identifier_start(b) => {
                while let Some(c) = self.peek() {
                    if is_identifier_part(c) {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                // Multi-byte identifier characters are consumed wholesale so
                // the lexer never splits a UTF-8 sequence.
                while self.pos < self.bytes.len() && !self.source.is_char_boundary(self.pos) {
                    self.pos += 1;
                }
                let text = self.source[start..self.pos].to_string();
                Ok(Token { kind: TokenKind::Identifier(text), span: self.span(start) })
            }
            _ => {
                for punct in PUNCTS {
                    if self.source[self.pos..].starts_with(punct) {
                        self.pos += punct.len();
                        return Ok(Token { kind: TokenKind::Punct(punct), span: self.span(start) });
                    }
                }
                Err(self.error(format!("unexpected character `{}`", b as char)))
            }
        }
    }

    /// Whether a `/` at the current position starts a regex literal.
    ///
    /// Heuristic based on the previous significant token: after a value
    /// (identifier, literal, `)`, `]`) a slash is division, anywhere else it
    /// opens a regex. Keywords such as `return` count as non-values.
    fn regex_allowed(&self, previous: Option<&Token>) -> bool {
        match previous.map(|t| &t.kind) {
            None => true,
            Some(TokenKind::Punct(p)) => !matches!(*p, ")" | "]" | "++" | "--"),
            Some(TokenKind::Identifier(name)) => {
                REGEX_PRECEDING_KEYWORDS.contains(&name.as_str())
            }
            Some(TokenKind::String(_))
            | Some(TokenKind::Number(_))
            | Some(TokenKind::Template(_))
            | Some(TokenKind::Regex { .. }) => false,
            Some(TokenKind::Eof) => true,
        }
    }

    fn lex_regex(&mut self) -> Result<Token, SyntaxError> {
        let start = self.pos;
        self.pos += 1; // opening slash
        let pattern_start = self.pos;
        let mut in_class = false;
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error("unterminated regular expression"));
            };
            match b {
                b'\\' => {
                    self.pos += 2;
                }
                b'[' => {
                    in_class = true;
                    self.pos += 1;
                }
                b']' => {
                    in_class = false;
                    self.pos += 1;
                }
                b'/' if !in_class => break,
                b'\n' => return Err(self.error("unterminated regular expression")),
                _ => {
                    self.pos += 1;
                }
            }
        }
        let pattern = self.source[pattern_start..self.pos].to_string();
        self.pos += 1; // closing slash
        let flags_start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphabetic() {
                self.pos += 1;
            } else {
                break;
            }
        }
        let flags = self.source[flags_start..self.pos].to_string();
        Ok(Token { kind: TokenKind::Regex { pattern, flags }, span: self.span(start) })
    }

    fn lex_string(&mut self, quote: u8) -> Result<Token, SyntaxError> {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error("unterminated string literal"));
            };
            match b {
                b'\\' => {
                    self.pos += 1;
                    value.push(self.cook_escape()?);
                }
                b'\n' => return Err(self.error("unterminated string literal")),
                _ if b == quote => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    let c = self.char_at_pos();
                    value.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        Ok(Token { kind: TokenKind::String(value), span: self.span(start) })
    }

    fn char_at_pos(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\u{FFFD}')
    }

    /// Resolve the character after a backslash. Unknown escapes keep the
    /// escaped character, matching how engines treat them.
    fn cook_escape(&mut self) -> Result<char, SyntaxError> {
        let Some(b) = self.peek() else {
            return Err(self.error("unterminated escape sequence"));
        };
        let cooked = match b {
            b'n' => '\n',
            b't' => '\t',
            b'r' => '\r',
            b'0' => '\0',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'v' => '\u{b}',
            b'x' => {
                self.pos += 1;
                return self.cook_hex_escape(2);
            }
            b'u' => {
                self.pos += 1;
                if self.peek() == Some(b'{') {
                    self.pos += 1;
                    let digits_start = self.pos;
                    while self.peek().is_some_and(|c| c != b'}') {
                        self.pos += 1;
                    }
                    let digits = &self.source[digits_start..self.pos];
                    if self.peek() != Some(b'}') {
                        return Err(self.error("unterminated unicode escape"));
                    }
                    self.pos += 1;
                    let code = u32::from_str_radix(digits, 16)
                        .map_err(|_| self.error("invalid unicode escape"))?;
                    return Ok(char::from_u32(code).unwrap_or('\u{FFFD}'));
                }
                return self.cook_hex_escape(4);
            }
            _ => {
                let c = self.char_at_pos();
                self.pos += c.len_utf8();
                return Ok(c);
            }
        };
        self.pos += 1;
        Ok(cooked)
    }

    fn cook_hex_escape(&mut self, len: usize) -> Result<char, SyntaxError> {
        let start = self.pos;
        for _ in 0..len {
            if !self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                return Err(self.error("invalid hex escape"));
            }
            self.pos += 1;
        }
        let code = u32::from_str_radix(&self.source[start..self.pos], 16)
            .map_err(|_| self.error("invalid hex escape"))?;
        Ok(char::from_u32(code).unwrap_or('\u{FFFD}'))
    }

    fn lex_template(&mut self) -> Result<Token, SyntaxError> {
        let start = self.pos;
        self.pos += 1; // backtick
        let mut parts = Vec::new();
        let mut cooked = String::new();
        let mut cooked_start = self.pos;
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error("unterminated template literal"));
            };
            match b {
                b'`' => {
                    parts.push(TemplatePart::Cooked {
                        value: std::mem::take(&mut cooked),
                        span: Span::new(cooked_start + self.base, self.pos + self.base),
                    });
                    self.pos += 1;
                    break;
                }
                b'\\' => {
                    self.pos += 1;
                    cooked.push(self.cook_escape()?);
                }
                b'$' if self.peek_at(1) == Some(b'{') => {
                    parts.push(TemplatePart::Cooked {
                        value: std::mem::take(&mut cooked),
                        span: Span::new(cooked_start + self.base, self.pos + self.base),
                    });
                    self.pos += 2;
                    let expr_start = self.pos;
                    self.skip_interpolation()?;
                    parts.push(TemplatePart::Expr {
                        span: Span::new(expr_start + self.base, self.pos + self.base),
                    });
                    self.pos += 1; // closing brace
                    cooked_start = self.pos;
                }
                _ => {
                    let c = self.char_at_pos();
                    cooked.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        Ok(Token { kind: TokenKind::Template(parts), span: self.span(start) })
    }

    /// Advance to the `}` closing a `${`, skipping nested braces, strings and
    /// templates so the interpolation span is exact.
    fn skip_interpolation(&mut self) -> Result<(), SyntaxError> {
        let mut depth = 0usize;
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error("unterminated template interpolation"));
            };
            match b {
                b'{' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                    self.pos += 1;
                }
                b'"' | b'\'' => {
                    self.skip_plain_string(b)?;
                }
                b'`' => {
                    self.skip_nested_template()?;
                }
                _ => {
                    self.pos += 1;
                }
            }
        }
    }

    fn skip_plain_string(&mut self, quote: u8) -> Result<(), SyntaxError> {
        self.pos += 1;
        loop {
            match self.peek() {
                Some(b'\\') => self.pos += 2,
                Some(b) if b == quote => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => self.pos += 1,
                None => return Err(self.error("unterminated string literal")),
            }
        }
    }

    fn skip_nested_template(&mut self) -> Result<(), SyntaxError> {
        self.pos += 1;
        loop {
            match self.peek() {
                Some(b'\\') => self.pos += 2,
                Some(b'`') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(b'$') if self.peek_at(1) == Some(b'{') => {
                    self.pos += 2;
                    self.skip_interpolation()?;
                    self.pos += 1;
                }
                Some(_) => self.pos += 1,
                None => return Err(self.error("unterminated template literal")),
            }
        }
    }

    fn lex_number(&mut self) -> Result<Token, SyntaxError> {
        let start = self.pos;
        if self.peek() == Some(b'0')
            && matches!(self.peek_at(1), Some(b'x') | Some(b'X') | Some(b'b') | Some(b'B') | Some(b'o') | Some(b'O'))
        {
            let radix = match self.peek_at(1) {
                Some(b'x') | Some(b'X') => 16,
                Some(b'o') | Some(b'O') => 8,
                _ => 2,
            };
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_') {
                self.pos += 1;
            }
            let digits: String =
                self.source[digits_start..self.pos].chars().filter(|c| *c != '_').collect();
            let value = u64::from_str_radix(&digits, radix)
                .map_err(|_| self.error("invalid number literal"))?;
            return Ok(Token { kind: TokenKind::Number(value as f64), span: self.span(start) });
        }

        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == b'_') {
            self.pos += 1;
        }
        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit() || c == b'_') {
                self.pos += 1;
            }
        } else if self.peek() == Some(b'.') && self.bytes.get(start) != Some(&b'.') {
            // trailing-dot form `1.`
            self.pos += 1;
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let mut lookahead = 1;
            if matches!(self.peek_at(1), Some(b'+') | Some(b'-')) {
                lookahead = 2;
            }
            if self.peek_at(lookahead).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += lookahead;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }
        // BigInt suffix is tolerated and ignored.
        if self.peek() == Some(b'n') {
            self.pos += 1;
        }
        let text: String =
            self.source[start..self.pos].chars().filter(|c| *c != '_' && *c != 'n').collect();
        let value = text.parse::<f64>().map_err(|_| self.error("invalid number literal"))?;
        Ok(Token { kind: TokenKind::Number(value), span: self.span(start) })
    }
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_identifier_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}
