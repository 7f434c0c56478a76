use crate::parser::lexer::{Lexer, TemplatePart, Token, TokenKind};
use crate::parser::SyntaxError;
use crate::syntax::*;

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    comments: Vec<Comment>,
    /// `in` is not a binary operator while parsing a `for (...)` head.
    no_in: bool,
}

impl<'a> Parser<'a> {
    pub fn parse_source(source: &'a str) -> Result<Program, SyntaxError> {
        let (tokens, comments) = Lexer::new(source, 0).tokenize()?;
        let mut parser = Parser { source, tokens, pos: 0, comments, no_in: false };
        let mut body = Vec::new();
        while !parser.at_eof() {
            body.push(parser.parse_statement()?);
        }
        Ok(Program { body, comments: std::mem::take(&mut parser.comments) })
    }

    /// Parse one embedded expression fragment (a template interpolation).
    /// `span` addresses the fragment inside the outer source; produced spans
    /// stay file-absolute.
    fn parse_embedded(&mut self, span: Span) -> Result<Expr, SyntaxError> {
        let fragment = span.text(self.source);
        let (tokens, comments) = Lexer::new(fragment, span.start).tokenize()?;
        let mut parser = Parser { source: self.source, tokens, pos: 0, comments, no_in: false };
        let expr = parser.parse_expression()?;
        if !parser.at_eof() {
            return Err(parser.unexpected("end of interpolation"));
        }
        self.comments.extend(parser.comments);
        Ok(expr)
    }

    // ── token plumbing ──────────────────────────────────────────────────

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_ahead(&self, n: usize) -> &Token {
        &self.tokens[(self.pos + n).min(self.tokens.len() - 1)]
    }

    fn at_eof(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn eat_punct(&mut self, p: &str) -> bool {
        if self.current().is_punct(p) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, p: &str) -> Result<Token, SyntaxError> {
        if self.current().is_punct(p) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("`{p}`")))
        }
    }

    fn eat_keyword(&mut self, kw: &str) -> bool {
        if self.current().is_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        SyntaxError {
            message: format!("expected {expected}"),
            offset: self.current().span.start,
        }
    }

    fn parse_identifier(&mut self) -> Result<Identifier, SyntaxError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Identifier { name, span: token.span })
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    fn eat_semicolon(&mut self) {
        self.eat_punct(";");
    }

    // ── statements ──────────────────────────────────────────────────────

    fn parse_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let token = self.current().clone();
        if let Some(name) = token.identifier() {
            match name {
                "import" if !self.peek_ahead(1).is_punct("(") => return self.parse_import(),
                "export" => return self.parse_export(),
                "var" | "let" | "const" => {
                    // `let` is also a valid identifier; only treat it as a
                    // declaration when a binding follows.
                    if self.peek_ahead(1).identifier().is_some()
                        || self.peek_ahead(1).is_punct("[")
                        || self.peek_ahead(1).is_punct("{")
                    {
                        let decl = self.parse_var_decl()?;
                        self.eat_semicolon();
                        return Ok(Stmt::VarDecl(decl));
                    }
                }
                "function" => return self.parse_function_decl().map(Stmt::Function),
                "async" if self.peek_ahead(1).is_keyword("function") => {
                    self.advance();
                    return self.parse_function_decl().map(Stmt::Function);
                }
                "class" => return self.parse_class().map(Stmt::Class),
                "return" => {
                    self.advance();
                    let mut span = token.span;
                    let argument = if self.current().is_punct(";")
                        || self.current().is_punct("}")
                        || self.at_eof()
                    {
                        None
                    } else {
                        let expr = self.parse_expression()?;
                        span = span.cover(expr.span());
                        Some(expr)
                    };
                    self.eat_semicolon();
                    return Ok(Stmt::Return(ReturnStmt { argument, span }));
                }
                "if" => return self.parse_if(),
                "for" => return self.parse_for(),
                "while" => return self.parse_while(),
                "do" => return self.parse_do_while(),
                "try" => return self.parse_try(),
                "throw" => {
                    self.advance();
                    let argument = self.parse_expression()?;
                    let span = token.span.cover(argument.span());
                    self.eat_semicolon();
                    return Ok(Stmt::Throw(ThrowStmt { argument, span }));
                }
                "break" => {
                    self.advance();
                    self.eat_semicolon();
                    return Ok(Stmt::Break(token.span));
                }
                "continue" => {
                    self.advance();
                    self.eat_semicolon();
                    return Ok(Stmt::Continue(token.span));
                }
                _ => {}
            }
        }
        if token.is_punct("{") {
            return self.parse_block().map(Stmt::Block);
        }
        if token.is_punct(";") {
            self.advance();
            return Ok(Stmt::Empty(token.span));
        }
        let expression = self.parse_expression()?;
        let span = expression.span();
        self.eat_semicolon();
        Ok(Stmt::Expression(ExprStmt { expression, span }))
    }

    fn parse_block(&mut self) -> Result<BlockStmt, SyntaxError> {
        let open = self.expect_punct("{")?;
        let mut body = Vec::new();
        while !self.current().is_punct("}") && !self.at_eof() {
            body.push(self.parse_statement()?);
        }
        let close = self.expect_punct("}")?;
        Ok(BlockStmt { body, span: open.span.cover(close.span) })
    }

    fn parse_var_decl(&mut self) -> Result<VarDecl, SyntaxError> {
        let token = self.advance();
        let kind = match token.identifier() {
            Some("var") => VarKind::Var,
            Some("let") => VarKind::Let,
            _ => VarKind::Const,
        };
        let mut declarators = Vec::new();
        let mut span = token.span;
        loop {
            let name = self.parse_pattern()?;
            let mut decl_span = name.span();
            let init = if self.eat_punct("=") {
                let expr = self.parse_assignment()?;
                decl_span = decl_span.cover(expr.span());
                Some(expr)
            } else {
                None
            };
            span = span.cover(decl_span);
            declarators.push(VarDeclarator { name, init, span: decl_span });
            if !self.eat_punct(",") {
                break;
            }
        }
        Ok(VarDecl { kind, declarators, span })
    }

    /// A binding pattern. Destructuring forms are consumed with balanced
    /// delimiters and kept opaque.
    fn parse_pattern(&mut self) -> Result<Pattern, SyntaxError> {
        let token = self.current().clone();
        if token.identifier().is_some() {
            return Ok(Pattern::Identifier(self.parse_identifier()?));
        }
        if token.is_punct("[") || token.is_punct("{") {
            let span = self.skip_balanced()?;
            return Ok(Pattern::Other(span));
        }
        if token.is_punct("...") {
            self.advance();
            let inner = self.parse_pattern()?;
            return Ok(Pattern::Other(token.span.cover(inner.span())));
        }
        Err(self.unexpected("a binding pattern"))
    }

    /// Consume a balanced `[...]`/`{...}`/`(...)` group, returning its span.
    fn skip_balanced(&mut self) -> Result<Span, SyntaxError> {
        let open = self.advance();
        let close = match open.kind {
            TokenKind::Punct("[") => "]",
            TokenKind::Punct("{") => "}",
            TokenKind::Punct("(") => ")",
            _ => return Err(self.unexpected("an opening delimiter")),
        };
        let mut span = open.span;
        let mut depth = 1usize;
        while depth > 0 {
            if self.at_eof() {
                return Err(self.unexpected(&format!("`{close}`")));
            }
            let token = self.advance();
            span = span.cover(token.span);
            match token.kind {
                TokenKind::Punct("[") | TokenKind::Punct("{") | TokenKind::Punct("(") => depth += 1,
                TokenKind::Punct("]") | TokenKind::Punct("}") | TokenKind::Punct(")") => depth -= 1,
                _ => {}
            }
        }
        Ok(span)
    }

    fn parse_function_decl(&mut self) -> Result<FunctionDecl, SyntaxError> {
        let start = self.advance().span; // `function`
        self.eat_punct("*");
        let name = self.parse_identifier()?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(FunctionDecl { name, params, body: body.body, span: start.cover(body.span) })
    }

    fn parse_params(&mut self) -> Result<Vec<Pattern>, SyntaxError> {
        self.expect_punct("(")?;
        let mut params = Vec::new();
        while !self.current().is_punct(")") && !self.at_eof() {
            let pattern = self.parse_pattern()?;
            // default values are consumed but not modeled
            let pattern = if self.eat_punct("=") {
                let default = self.parse_assignment()?;
                Pattern::Other(pattern.span().cover(default.span()))
            } else {
                pattern
            };
            params.push(pattern);
            if !self.eat_punct(",") {
                break;
            }
        }
        self.expect_punct(")")?;
        Ok(params)
    }

    fn parse_class(&mut self) -> Result<ClassDecl, SyntaxError> {
        let start = self.advance().span; // `class`
        let name =
            if self.current().identifier().is_some_and(|n| n != "extends") && !self.current().is_punct("{") {
                Some(self.parse_identifier()?)
            } else {
                None
            };
        let superclass = if self.eat_keyword("extends") {
            Some(Box::new(self.parse_unary()?))
        } else {
            None
        };
        self.expect_punct("{")?;
        let mut methods = Vec::new();
        let mut end = start;
        while !self.current().is_punct("}") && !self.at_eof() {
            if self.eat_punct(";") {
                continue;
            }
            let method_start = self.current().span;
            let mut is_static = false;
            if self.current().is_keyword("static") && !self.peek_ahead(1).is_punct("(") {
                self.advance();
                is_static = true;
            }
            for modifier in ["async", "get", "set"] {
                if self.current().is_keyword(modifier) && !self.peek_ahead(1).is_punct("(") {
                    self.advance();
                }
            }
            self.eat_punct("*");
            let name_token = self.advance();
            let method_name = match &name_token.kind {
                TokenKind::Identifier(n) => n.clone(),
                TokenKind::String(v) => v.clone(),
                _ => return Err(self.unexpected("a method name")),
            };
            if self.current().is_punct("(") {
                let params = self.parse_params()?;
                let body = self.parse_block()?;
                end = body.span;
                methods.push(ClassMethod {
                    name: method_name,
                    params,
                    body: body.body,
                    is_static,
                    span: method_start.cover(body.span),
                });
            } else {
                // class field: `name = expr;`
                if self.eat_punct("=") {
                    let value = self.parse_assignment()?;
                    end = value.span();
                }
                self.eat_semicolon();
            }
        }
        let close = self.expect_punct("}")?;
        end = end.cover(close.span);
        Ok(ClassDecl { name, superclass, methods, span: start.cover(end) })
    }

    fn parse_if(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.advance().span; // `if`
        self.expect_punct("(")?;
        let test = self.parse_expression()?;
        self.expect_punct(")")?;
        let consequent = Box::new(self.parse_statement()?);
        let mut span = start.cover(consequent.span());
        let alternate = if self.eat_keyword("else") {
            let stmt = self.parse_statement()?;
            span = span.cover(stmt.span());
            Some(Box::new(stmt))
        } else {
            None
        };
        Ok(Stmt::If(IfStmt { test, consequent, alternate, span }))
    }

    fn parse_for(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.advance().span; // `for`
        self.expect_punct("(")?;

        let init: Option<Box<Stmt>> = if self.current().is_punct(";") {
            None
        } else if matches!(self.current().identifier(), Some("var" | "let" | "const")) {
            Some(Box::new(Stmt::VarDecl(self.parse_var_decl()?)))
        } else {
            self.no_in = true;
            let expr = self.parse_expression();
            self.no_in = false;
            let expr = expr?;
            let span = expr.span();
            Some(Box::new(Stmt::Expression(ExprStmt { expression: expr, span })))
        };

        if self.current().is_keyword("in") || self.current().is_keyword("of") {
            self.advance();
            let right = self.parse_expression()?;
            self.expect_punct(")")?;
            let body = Box::new(self.parse_statement()?);
            let span = start.cover(body.span());
            let left = init.ok_or_else(|| self.unexpected("a loop binding"))?;
            return Ok(Stmt::ForInOf(ForInOfStmt { left, right, body, span }));
        }

        self.expect_punct(";")?;
        let test = if self.current().is_punct(";") { None } else { Some(self.parse_expression()?) };
        self.expect_punct(";")?;
        let update =
            if self.current().is_punct(")") { None } else { Some(self.parse_expression()?) };
        self.expect_punct(")")?;
        let body = Box::new(self.parse_statement()?);
        let span = start.cover(body.span());
        Ok(Stmt::For(ForStmt { init, test, update, body, span }))
    }

    fn parse_while(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.advance().span; // `while`
        self.expect_punct("(")?;
        let test = self.parse_expression()?;
        self.expect_punct(")")?;
        let body = Box::new(self.parse_statement()?);
        let span = start.cover(body.span());
        Ok(Stmt::While(WhileStmt { test, body, span }))
    }

    fn parse_do_while(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.advance().span; // `do`
        let body = Box::new(self.parse_statement()?);
        if !self.eat_keyword("while") {
            return Err(self.unexpected("`while`"));
        }
        self.expect_punct("(")?;
        let test = self.parse_expression()?;
        let close = self.expect_punct(")")?;
        self.eat_semicolon();
        let span = start.cover(close.span);
        Ok(Stmt::DoWhile(DoWhileStmt { body, test, span }))
    }

    fn parse_try(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.advance().span; // `try`
        let block = self.parse_block()?;
        let mut span = start.cover(block.span);
        let handler = if self.current().is_keyword("catch") {
            let catch_start = self.advance().span;
            let param = if self.eat_punct("(") {
                let p = self.parse_pattern()?;
                self.expect_punct(")")?;
                Some(p)
            } else {
                None
            };
            let body = self.parse_block()?;
            span = span.cover(body.span);
            Some(CatchClause { param, body: body.body, span: catch_start.cover(body.span) })
        } else {
            None
        };
        let finalizer = if self.eat_keyword("finally") {
            let body = self.parse_block()?;
            span = span.cover(body.span);
            Some(body.body)
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            return Err(self.unexpected("`catch` or `finally`"));
        }
        Ok(Stmt::Try(TryStmt { block: block.body, handler, finalizer, span }))
    }

    fn parse_import(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.advance().span; // `import`

        // side-effect import: `import "mod";`
        if let TokenKind::String(value) = &self.current().kind {
            let value = value.clone();
            let token = self.advance();
            self.eat_semicolon();
            let source = StringLit { value, span: token.span };
            return Ok(Stmt::Import(ImportDecl {
                specifiers: Vec::new(),
                source,
                span: start.cover(token.span),
            }));
        }

        let mut specifiers = Vec::new();
        loop {
            if self.current().is_punct("*") {
                self.advance();
                if !self.eat_keyword("as") {
                    return Err(self.unexpected("`as`"));
                }
                specifiers.push(ImportSpecifier::Namespace(self.parse_identifier()?));
            } else if self.current().is_punct("{") {
                self.advance();
                while !self.current().is_punct("}") && !self.at_eof() {
                    let imported = self.parse_identifier()?;
                    let local = if self.eat_keyword("as") {
                        self.parse_identifier()?
                    } else {
                        imported.clone()
                    };
                    specifiers.push(ImportSpecifier::Named { imported, local });
                    if !self.eat_punct(",") {
                        break;
                    }
                }
                self.expect_punct("}")?;
            } else {
                specifiers.push(ImportSpecifier::Default(self.parse_identifier()?));
            }
            if !self.eat_punct(",") {
                break;
            }
        }

        if !self.eat_keyword("from") {
            return Err(self.unexpected("`from`"));
        }
        let token = self.current().clone();
        let TokenKind::String(value) = token.kind else {
            return Err(self.unexpected("a module path"));
        };
        self.advance();
        self.eat_semicolon();
        let source = StringLit { value, span: token.span };
        Ok(Stmt::Import(ImportDecl { specifiers, source, span: start.cover(token.span) }))
    }

    fn parse_export(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.advance().span; // `export`
        if self.eat_keyword("default") {
            // `export default <expr>` or a declaration
            if self.current().is_keyword("function")
                || self.current().is_keyword("class")
                || (self.current().is_keyword("async") && self.peek_ahead(1).is_keyword("function"))
            {
                let declaration = Box::new(self.parse_statement()?);
                let span = start.cover(declaration.span());
                return Ok(Stmt::Export(ExportStmt { declaration, span }));
            }
            let expression = self.parse_expression()?;
            let span = start.cover(expression.span());
            self.eat_semicolon();
            let inner_span = expression.span();
            let declaration =
                Box::new(Stmt::Expression(ExprStmt { expression, span: inner_span }));
            return Ok(Stmt::Export(ExportStmt { declaration, span }));
        }
        // `export { a, b }` re-exports are consumed opaquely.
        if self.current().is_punct("{") {
            let mut span = start.cover(self.skip_balanced()?);
            if self.eat_keyword("from") {
                let token = self.advance();
                span = span.cover(token.span);
            }
            self.eat_semicolon();
            return Ok(Stmt::Empty(span));
        }
        let declaration = Box::new(self.parse_statement()?);
        let span = start.cover(declaration.span());
        Ok(Stmt::Export(ExportStmt { declaration, span }))
    }

    // ── expressions ─────────────────────────────────────────────────────

    pub(crate) fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr, SyntaxError> {
        if let Some(arrow) = self.try_parse_arrow()? {
            return Ok(arrow);
        }
        let target = self.parse_conditional()?;
        let op = match &self.current().kind {
            TokenKind::Punct(p)
                if matches!(
                    *p,
                    "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "&=" | "|=" | "^=" | "**=" | "<<="
                        | ">>=" | ">>>=" | "&&=" | "||=" | "??="
                ) =>
            {
                p.to_string()
            }
            _ => return Ok(target),
        };
        self.advance();
        let value = self.parse_assignment()?;
        let span = target.span().cover(value.span());
        Ok(Expr::Assign(AssignExpr {
            op,
            target: Box::new(target),
            value: Box::new(value),
            span,
        }))
    }

    /// Arrow functions need lookahead: `x => ...`, `(a, b) => ...`,
    /// `async (a) => ...`. On any mismatch the position is restored and the
    /// caller parses normally.
    fn try_parse_arrow(&mut self) -> Result<Option<Expr>, SyntaxError> {
        let checkpoint = self.pos;
        let start = self.current().span;

        if self.current().is_keyword("async")
            && (self.peek_ahead(1).identifier().is_some() || self.peek_ahead(1).is_punct("("))
            && !self.peek_ahead(1).is_keyword("function")
        {
            self.advance();
        }

        let params = if self.current().identifier().is_some() && self.peek_ahead(1).is_punct("=>")
        {
            vec![Pattern::Identifier(self.parse_identifier()?)]
        } else if self.current().is_punct("(") {
            self.advance();
            let mut params = Vec::new();
            let ok = loop {
                if self.current().is_punct(")") {
                    self.advance();
                    break true;
                }
                if self.current().is_punct("...") {
                    let dots = self.advance().span;
                    match self.parse_pattern() {
                        Ok(p) => params.push(Pattern::Other(dots.cover(p.span()))),
                        Err(_) => break false,
                    }
                } else {
                    match self.parse_pattern() {
                        Ok(p) => {
                            if self.eat_punct("=") {
                                match self.parse_assignment() {
                                    Ok(default) => {
                                        params.push(Pattern::Other(p.span().cover(default.span())))
                                    }
                                    Err(_) => break false,
                                }
                            } else {
                                params.push(p);
                            }
                        }
                        Err(_) => break false,
                    }
                }
                if !self.eat_punct(",") && !self.current().is_punct(")") {
                    break false;
                }
            };
            if !ok || !self.current().is_punct("=>") {
                self.pos = checkpoint;
                return Ok(None);
            }
            params
        } else {
            self.pos = checkpoint;
            return Ok(None);
        };

        if !self.eat_punct("=>") {
            self.pos = checkpoint;
            return Ok(None);
        }

        let (body, end) = if self.current().is_punct("{") {
            let block = self.parse_block()?;
            (ArrowBody::Block(block.body), block.span)
        } else {
            let expr = self.parse_assignment()?;
            let span = expr.span();
            (ArrowBody::Expr(Box::new(expr)), span)
        };
        Ok(Some(Expr::Arrow(ArrowFunction { params, body, span: start.cover(end) })))
    }

    fn parse_conditional(&mut self) -> Result<Expr, SyntaxError> {
        let test = self.parse_binary(0)?;
        if !self.eat_punct("?") {
            return Ok(test);
        }
        let consequent = self.parse_assignment()?;
        self.expect_punct(":")?;
        let alternate = self.parse_assignment()?;
        let span = test.span().cover(alternate.span());
        Ok(Expr::Conditional(ConditionalExpr {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            span,
        }))
    }

    /// Precedence-climbing over binary and logical operators.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_unary()?;
        loop {
            let Some((prec, op_text)) = self.peek_binary_op() else { break };
            if prec < min_prec {
                break;
            }
            self.advance();
            // `**` is right-associative, everything else left.
            let next_min = if op_text == "**" { prec } else { prec + 1 };
            let right = self.parse_binary(next_min)?;
            let span = left.span().cover(right.span());
            left = match op_text {
                "&&" => Expr::Logical(LogicalExpr {
                    op: LogicalOp::And,
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                }),
                "||" => Expr::Logical(LogicalExpr {
                    op: LogicalOp::Or,
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                }),
                "??" => Expr::Logical(LogicalExpr {
                    op: LogicalOp::Nullish,
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                }),
                _ => Expr::Binary(BinaryExpr {
                    op: binary_op(op_text),
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                }),
            };
        }
        Ok(left)
    }

    fn peek_binary_op(&self) -> Option<(u8, &'static str)> {
        let text: &'static str = match &self.current().kind {
            TokenKind::Punct(p) => p,
            TokenKind::Identifier(name) if name == "in" && !self.no_in => "in",
            TokenKind::Identifier(name) if name == "instanceof" => "instanceof",
            _ => return None,
        };
        let prec = match text {
            "??" => 1,
            "||" => 2,
            "&&" => 3,
            "|" => 4,
            "^" => 5,
            "&" => 6,
            "==" | "!=" | "===" | "!==" => 7,
            "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 8,
            "<<" | ">>" | ">>>" => 9,
            "+" | "-" => 10,
            "*" | "/" | "%" => 11,
            "**" => 12,
            _ => return None,
        };
        Some((prec, text))
    }

    fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.current().clone();
        let op = match &token.kind {
            TokenKind::Punct("!") => Some(UnaryOp::Not),
            TokenKind::Punct("-") => Some(UnaryOp::Minus),
            TokenKind::Punct("+") => Some(UnaryOp::Plus),
            TokenKind::Punct("~") => Some(UnaryOp::BitNot),
            TokenKind::Identifier(name) if name == "typeof" => Some(UnaryOp::TypeOf),
            TokenKind::Identifier(name) if name == "void" => Some(UnaryOp::Void),
            TokenKind::Identifier(name) if name == "delete" => Some(UnaryOp::Delete),
            TokenKind::Identifier(name) if name == "await" => Some(UnaryOp::Await),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let argument = self.parse_unary()?;
            let span = token.span.cover(argument.span());
            return Ok(Expr::Unary(UnaryExpr { op, argument: Box::new(argument), span }));
        }
        if token.is_punct("++") || token.is_punct("--") {
            self.advance();
            let argument = self.parse_unary()?;
            let span = token.span.cover(argument.span());
            return Ok(Expr::Update(UpdateExpr {
                increment: token.is_punct("++"),
                prefix: true,
                argument: Box::new(argument),
                span,
            }));
        }
        let expr = self.parse_postfix()?;
        Ok(expr)
    }

    fn parse_postfix(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.parse_call_chain()?;
        if self.current().is_punct("++") || self.current().is_punct("--") {
            let token = self.advance();
            let span = expr.span().cover(token.span);
            return Ok(Expr::Update(UpdateExpr {
                increment: token.is_punct("++"),
                prefix: false,
                argument: Box::new(expr),
                span,
            }));
        }
        Ok(expr)
    }

    fn parse_call_chain(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = if self.current().is_keyword("new") {
            self.parse_new()?
        } else {
            self.parse_primary()?
        };
        loop {
            if self.current().is_punct("(") {
                let (arguments, close) = self.parse_arguments()?;
                let span = expr.span().cover(close);
                expr = Expr::Call(CallExpr { callee: Box::new(expr), arguments, span });
            } else if self.current().is_punct(".") || self.current().is_punct("?.") {
                let optional = self.current().is_punct("?.");
                self.advance();
                if optional && self.current().is_punct("(") {
                    let (arguments, close) = self.parse_arguments()?;
                    let span = expr.span().cover(close);
                    expr = Expr::Call(CallExpr { callee: Box::new(expr), arguments, span });
                } else if optional && self.current().is_punct("[") {
                    expr = self.parse_computed_member(expr, true)?;
                } else {
                    let property = self.parse_identifier()?;
                    let span = expr.span().cover(property.span);
                    expr = Expr::Member(MemberExpr {
                        object: Box::new(expr),
                        property: MemberProp::Static(property),
                        optional,
                        span,
                    });
                }
            } else if self.current().is_punct("[") {
                expr = self.parse_computed_member(expr, false)?;
            } else if matches!(self.current().kind, TokenKind::Template(_)) {
                // tagged template: modeled as a call with the template argument
                let template = self.parse_primary()?;
                let span = expr.span().cover(template.span());
                expr = Expr::Call(CallExpr {
                    callee: Box::new(expr),
                    arguments: vec![template],
                    span,
                });
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_computed_member(&mut self, object: Expr, optional: bool) -> Result<Expr, SyntaxError> {
        self.expect_punct("[")?;
        let property = self.parse_expression()?;
        let close = self.expect_punct("]")?;
        let span = object.span().cover(close.span);
        Ok(Expr::Member(MemberExpr {
            object: Box::new(object),
            property: MemberProp::Computed(Box::new(property)),
            optional,
            span,
        }))
    }

    fn parse_new(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.advance().span; // `new`
        let mut callee = self.parse_primary()?;
        // member accesses bind tighter than the `new` call
        loop {
            if self.current().is_punct(".") {
                self.advance();
                let property = self.parse_identifier()?;
                let span = callee.span().cover(property.span);
                callee = Expr::Member(MemberExpr {
                    object: Box::new(callee),
                    property: MemberProp::Static(property),
                    optional: false,
                    span,
                });
            } else {
                break;
            }
        }
        let (arguments, end) = if self.current().is_punct("(") {
            self.parse_arguments()?
        } else {
            (Vec::new(), callee.span())
        };
        let span = start.cover(end);
        Ok(Expr::New(NewExpr { callee: Box::new(callee), arguments, span }))
    }

    fn parse_arguments(&mut self) -> Result<(Vec<Expr>, Span), SyntaxError> {
        self.expect_punct("(")?;
        let mut arguments = Vec::new();
        while !self.current().is_punct(")") && !self.at_eof() {
            if self.current().is_punct("...") {
                let dots = self.advance().span;
                let argument = self.parse_assignment()?;
                let span = dots.cover(argument.span());
                arguments.push(Expr::Spread(SpreadExpr { argument: Box::new(argument), span }));
            } else {
                arguments.push(self.parse_assignment()?);
            }
            if !self.eat_punct(",") {
                break;
            }
        }
        let close = self.expect_punct(")")?;
        Ok((arguments, close.span))
    }

    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.current().clone();
        match &token.kind {
            TokenKind::String(value) => {
                self.advance();
                Ok(Expr::String(StringLit { value: value.clone(), span: token.span }))
            }
            TokenKind::Number(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::Number(NumberLit { value, span: token.span }))
            }
            TokenKind::Regex { pattern, flags } => {
                let (pattern, flags) = (pattern.clone(), flags.clone());
                self.advance();
                Ok(Expr::Regex(RegexLit { pattern, flags, span: token.span }))
            }
            TokenKind::Template(parts) => {
                let parts = parts.clone();
                self.advance();
                let mut quasis = Vec::new();
                let mut expressions = Vec::new();
                for part in parts {
                    match part {
                        TemplatePart::Cooked { value, span } => {
                            quasis.push(TemplateElement { cooked: value, span })
                        }
                        TemplatePart::Expr { span } => {
                            expressions.push(self.parse_embedded(span)?)
                        }
                    }
                }
                Ok(Expr::Template(TemplateLit { quasis, expressions, span: token.span }))
            }
            TokenKind::Punct("(") => {
                let open = self.advance().span;
                let expression = self.parse_expression()?;
                let close = self.expect_punct(")")?;
                Ok(Expr::Paren(ParenExpr {
                    expression: Box::new(expression),
                    span: open.cover(close.span),
                }))
            }
            TokenKind::Punct("[") => self.parse_array(),
            TokenKind::Punct("{") => self.parse_object(),
            TokenKind::Identifier(name) => match name.as_str() {
                "true" | "false" => {
                    self.advance();
                    Ok(Expr::Bool(BoolLit { value: name == "true", span: token.span }))
                }
                "null" | "undefined" => {
                    self.advance();
                    Ok(Expr::Null(token.span))
                }
                "function" => self.parse_function_expr(),
                "async" if self.peek_ahead(1).is_keyword("function") => {
                    self.advance();
                    self.parse_function_expr()
                }
                _ => {
                    self.advance();
                    Ok(Expr::Identifier(Identifier { name: name.clone(), span: token.span }))
                }
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_function_expr(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.advance().span; // `function`
        self.eat_punct("*");
        let name = if self.current().identifier().is_some() {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(Expr::Function(FunctionExpr {
            name,
            params,
            body: body.body,
            span: start.cover(body.span),
        }))
    }

    fn parse_array(&mut self) -> Result<Expr, SyntaxError> {
        let open = self.advance().span;
        let mut elements = Vec::new();
        while !self.current().is_punct("]") && !self.at_eof() {
            if self.eat_punct(",") {
                continue; // elision
            }
            if self.current().is_punct("...") {
                let dots = self.advance().span;
                let argument = self.parse_assignment()?;
                let span = dots.cover(argument.span());
                elements.push(Expr::Spread(SpreadExpr { argument: Box::new(argument), span }));
            } else {
                elements.push(self.parse_assignment()?);
            }
            if !self.eat_punct(",") {
                break;
            }
        }
        let close = self.expect_punct("]")?;
        Ok(Expr::Array(ArrayLit { elements, span: open.cover(close.span) }))
    }

    fn parse_object(&mut self) -> Result<Expr, SyntaxError> {
        let open = self.advance().span;
        let mut properties = Vec::new();
        while !self.current().is_punct("}") && !self.at_eof() {
            if self.current().is_punct("...") {
                let dots = self.advance().span;
                let value = self.parse_assignment()?;
                let span = dots.cover(value.span());
                properties.push(ObjectProperty { key: "...".to_string(), value, span });
            } else {
                let key_token = self.current().clone();
                let key = match &key_token.kind {
                    TokenKind::Identifier(n) => {
                        self.advance();
                        n.clone()
                    }
                    TokenKind::String(v) => {
                        self.advance();
                        v.clone()
                    }
                    TokenKind::Number(n) => {
                        self.advance();
                        n.to_string()
                    }
                    TokenKind::Punct("[") => {
                        let span = self.skip_balanced()?;
                        span.text(self.source).to_string()
                    }
                    _ => return Err(self.unexpected("a property key")),
                };
                let key_span = key_token.span;
                if self.eat_punct(":") {
                    let value = self.parse_assignment()?;
                    let span = key_span.cover(value.span());
                    properties.push(ObjectProperty { key, value, span });
                } else if self.current().is_punct("(") {
                    // method shorthand
                    let params = self.parse_params()?;
                    let body = self.parse_block()?;
                    let span = key_span.cover(body.span);
                    properties.push(ObjectProperty {
                        key,
                        value: Expr::Function(FunctionExpr {
                            name: None,
                            params,
                            body: body.body,
                            span,
                        }),
                        span,
                    });
                } else {
                    // shorthand `{ key }`
                    let value =
                        Expr::Identifier(Identifier { name: key.clone(), span: key_span });
                    properties.push(ObjectProperty { key, value, span: key_span });
                }
            }
            if !self.eat_punct(",") {
                break;
            }
        }
        let close = self.expect_punct("}")?;
        Ok(Expr::Object(ObjectLit { properties, span: open.cover(close.span) }))
    }
}

fn binary_op(text: &str) -> BinaryOp {
    match text {
        "+" => BinaryOp::Add,
        "-" => BinaryOp::Sub,
        "*" => BinaryOp::Mul,
        "/" => BinaryOp::Div,
        "%" => BinaryOp::Mod,
        "==" => BinaryOp::Eq,
        "===" => BinaryOp::StrictEq,
        "!=" => BinaryOp::NotEq,
        "!==" => BinaryOp::StrictNotEq,
        "<" => BinaryOp::Lt,
        ">" => BinaryOp::Gt,
        "<=" => BinaryOp::LtEq,
        ">=" => BinaryOp::GtEq,
        "in" => BinaryOp::In,
        "instanceof" => BinaryOp::InstanceOf,
        "&" => BinaryOp::BitAnd,
        "|" => BinaryOp::BitOr,
        "^" => BinaryOp::BitXor,
        "<<" => BinaryOp::Shl,
        ">>" => BinaryOp::Shr,
        ">>>" => BinaryOp::UShr,
        "**" => BinaryOp::Exp,
        _ => BinaryOp::Add,
    }
}
