use crate::syntax::Span;

/// A parsed file: top-level statements plus the comments collected while
/// lexing. Comments are kept out of the tree so rules that care about them
/// (suppression directives, intentional-comment allowances) can index them by
/// line without every other rule paying for it.
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

#[derive(Debug, Clone)]
pub struct Comment {
    /// Comment content without the `//` or `/* */` delimiters.
    pub text: String,
    pub kind: CommentKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExprStmt),
    VarDecl(VarDecl),
    Function(FunctionDecl),
    Return(ReturnStmt),
    If(IfStmt),
    For(ForStmt),
    ForInOf(ForInOfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    Block(BlockStmt),
    Try(TryStmt),
    Throw(ThrowStmt),
    Import(ImportDecl),
    Export(ExportStmt),
    Class(ClassDecl),
    Break(Span),
    Continue(Span),
    Empty(Span),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expression(s) => s.span,
            Stmt::VarDecl(s) => s.span,
            Stmt::Function(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::ForInOf(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::DoWhile(s) => s.span,
            Stmt::Block(s) => s.span,
            Stmt::Try(s) => s.span,
            Stmt::Throw(s) => s.span,
            Stmt::Import(s) => s.span,
            Stmt::Export(s) => s.span,
            Stmt::Class(s) => s.span,
            Stmt::Break(span) | Stmt::Continue(span) | Stmt::Empty(span) => *span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone)]
pub struct VarDeclarator {
    pub name: Pattern,
    pub init: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VarDecl {
    pub kind: VarKind,
    pub declarators: Vec<VarDeclarator>,
    pub span: Span,
}

/// Binding patterns. Destructuring is not resolved into individual bindings;
/// rules that consult the scope stack treat `Other` as declaring nothing.
#[derive(Debug, Clone)]
pub enum Pattern {
    Identifier(Identifier),
    Other(Span),
}

impl Pattern {
    pub fn name(&self) -> Option<&str> {
        match self {
            Pattern::Identifier(id) => Some(&id.name),
            Pattern::Other(_) => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Pattern::Identifier(id) => id.span,
            Pattern::Other(span) => *span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub params: Vec<Pattern>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub argument: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    pub alternate: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub test: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ForInOfStmt {
    pub left: Box<Stmt>,
    pub right: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub test: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub test: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TryStmt {
    pub block: Vec<Stmt>,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<Vec<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ThrowStmt {
    pub argument: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ImportSpecifier {
    /// `import foo from "mod"`
    Default(Identifier),
    /// `import * as foo from "mod"`
    Namespace(Identifier),
    /// `import { foo as bar } from "mod"`; `local` is the binding in scope.
    Named { imported: Identifier, local: Identifier },
}

impl ImportSpecifier {
    pub fn local_name(&self) -> &str {
        match self {
            ImportSpecifier::Default(id) | ImportSpecifier::Namespace(id) => &id.name,
            ImportSpecifier::Named { local, .. } => &local.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: StringLit,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExportStmt {
    /// `export <decl>` or `export default <expr>` lowered to a statement.
    pub declaration: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ClassMethod {
    pub name: String,
    pub params: Vec<Pattern>,
    pub body: Vec<Stmt>,
    pub is_static: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: Option<Identifier>,
    pub superclass: Option<Box<Expr>>,
    pub methods: Vec<ClassMethod>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(Identifier),
    String(StringLit),
    Number(NumberLit),
    Bool(BoolLit),
    Null(Span),
    Template(TemplateLit),
    Regex(RegexLit),
    Array(ArrayLit),
    Object(ObjectLit),
    Function(FunctionExpr),
    Arrow(ArrowFunction),
    Unary(UnaryExpr),
    Update(UpdateExpr),
    Binary(BinaryExpr),
    Logical(LogicalExpr),
    Conditional(ConditionalExpr),
    Assign(AssignExpr),
    Call(CallExpr),
    New(NewExpr),
    Member(MemberExpr),
    Paren(ParenExpr),
    Spread(SpreadExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier(e) => e.span,
            Expr::String(e) => e.span,
            Expr::Number(e) => e.span,
            Expr::Bool(e) => e.span,
            Expr::Null(span) => *span,
            Expr::Template(e) => e.span,
            Expr::Regex(e) => e.span,
            Expr::Array(e) => e.span,
            Expr::Object(e) => e.span,
            Expr::Function(e) => e.span,
            Expr::Arrow(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Update(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Logical(e) => e.span,
            Expr::Conditional(e) => e.span,
            Expr::Assign(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::New(e) => e.span,
            Expr::Member(e) => e.span,
            Expr::Paren(e) => e.span,
            Expr::Spread(e) => e.span,
        }
    }

    /// Strip any number of surrounding parentheses.
    pub fn unwrap_parens(&self) -> &Expr {
        let mut expr = self;
        while let Expr::Paren(inner) = expr {
            expr = &inner.expression;
        }
        expr
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self.unwrap_parens() {
            Expr::Identifier(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringLit> {
        match self.unwrap_parens() {
            Expr::String(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct StringLit {
    /// The cooked value, escapes resolved.
    pub value: String,
    pub span: Span,
}

impl StringLit {
    /// Quote character used in the source (`'`, `"`), falling back to `'`
    /// when the span cannot be resolved.
    pub fn quote(&self, source: &str) -> char {
        self.span.text(source).chars().next().unwrap_or('\'')
    }
}

#[derive(Debug, Clone)]
pub struct NumberLit {
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BoolLit {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TemplateElement {
    pub cooked: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TemplateLit {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expr>,
    pub span: Span,
}

impl TemplateLit {
    /// The concatenated cooked text of all quasis. Only meaningful when the
    /// template has no interpolations.
    pub fn cooked_text(&self) -> String {
        self.quasis.iter().map(|quasi| quasi.cooked.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct RegexLit {
    pub pattern: String,
    pub flags: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ArrayLit {
    pub elements: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ObjectProperty {
    /// Property key as written; computed keys keep their source text.
    pub key: String,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ObjectLit {
    pub properties: Vec<ObjectProperty>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub name: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ArrowBody {
    Block(Vec<Stmt>),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone)]
pub struct ArrowFunction {
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
    TypeOf,
    Void,
    Delete,
    Await,
    BitNot,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub argument: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct UpdateExpr {
    /// `++` when true, `--` otherwise.
    pub increment: bool,
    pub prefix: bool,
    pub argument: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    StrictEq,
    NotEq,
    StrictNotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    In,
    InstanceOf,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
    Exp,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
    Nullish,
}

#[derive(Debug, Clone)]
pub struct LogicalExpr {
    pub op: LogicalOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    pub test: Box<Expr>,
    pub consequent: Box<Expr>,
    pub alternate: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AssignExpr {
    /// The operator as written: `=`, `+=`, ...
    pub op: String,
    pub target: Box<Expr>,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct NewExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum MemberProp {
    /// `obj.name`
    Static(Identifier),
    /// `obj[expr]`
    Computed(Box<Expr>),
}

#[derive(Debug, Clone)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: MemberProp,
    /// `obj?.name` / `obj?.[expr]`
    pub optional: bool,
    pub span: Span,
}

impl MemberExpr {
    pub fn static_property(&self) -> Option<&str> {
        match &self.property {
            MemberProp::Static(id) => Some(&id.name),
            MemberProp::Computed(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParenExpr {
    pub expression: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct SpreadExpr {
    pub argument: Box<Expr>,
    pub span: Span,
}
