use crate::checker::Checker;
use crate::diagnostic::{Diagnostic, Fix, ViolationData};
use crate::syntax::Span;
use crate::syntax::ast::{Expr, MemberProp, Stmt};

/// ## What it does
///
/// Measures each function's cyclomatic complexity: 1 plus one point per
/// branching construct (`if`, loops, `catch`, ternary, `&&`/`||`/`??`)
/// and per nested function. Functions above `max` (default 10) are
/// reported once.
///
/// ## Why is this bad?
///
/// Every branch doubles the number of paths a reader (and a test suite)
/// has to cover. Past a threshold the function is cheaper to split than
/// to understand.
///
/// Nested functions add one point to their parent but their own bodies
/// are measured separately, so extracting a helper genuinely lowers the
/// parent's score.
pub enum FunctionBody<'a> {
    Block(&'a [Stmt]),
    Expr(&'a Expr),
}

pub fn max_complexity(
    label: &str,
    range: Span,
    body: FunctionBody<'_>,
    checker: &Checker,
) -> anyhow::Result<Option<Diagnostic>> {
    let max = checker.rule_options.max_complexity.max;
    let score = 1 + match body {
        FunctionBody::Block(stmts) => complexity_of_block(stmts),
        FunctionBody::Expr(expression) => complexity_of_expr(expression),
    };
    if score <= max {
        return Ok(None);
    }

    Ok(Some(Diagnostic::new(
        ViolationData::new(
            "max_complexity".to_string(),
            "maxComplexity",
            format!("{label} has a complexity of {score} (max allowed is {max})."),
            Some("Split the branching into smaller functions.".to_string()),
        ),
        range,
        Fix::empty(),
    )))
}

fn complexity_of_block(stmts: &[Stmt]) -> usize {
    stmts.iter().map(complexity_of_stmt).sum()
}

fn complexity_of_stmt(stmt: &Stmt) -> usize {
    match stmt {
        Stmt::Expression(expr_stmt) => complexity_of_expr(&expr_stmt.expression),
        Stmt::VarDecl(decl) => decl
            .declarators
            .iter()
            .filter_map(|declarator| declarator.init.as_ref())
            .map(complexity_of_expr)
            .sum(),
        // A nested declaration costs one point; its body is scored on its own.
        Stmt::Function(_) => 1,
        Stmt::Return(ret) => ret.argument.as_ref().map_or(0, complexity_of_expr),
        Stmt::If(if_stmt) => {
            1 + complexity_of_expr(&if_stmt.test)
                + complexity_of_stmt(&if_stmt.consequent)
                + if_stmt.alternate.as_deref().map_or(0, complexity_of_stmt)
        }
        Stmt::For(for_stmt) => {
            1 + for_stmt.init.as_deref().map_or(0, complexity_of_stmt)
                + for_stmt.test.as_ref().map_or(0, complexity_of_expr)
                + for_stmt.update.as_ref().map_or(0, complexity_of_expr)
                + complexity_of_stmt(&for_stmt.body)
        }
        Stmt::ForInOf(for_stmt) => {
            1 + complexity_of_expr(&for_stmt.right) + complexity_of_stmt(&for_stmt.body)
        }
        Stmt::While(while_stmt) => {
            1 + complexity_of_expr(&while_stmt.test) + complexity_of_stmt(&while_stmt.body)
        }
        Stmt::DoWhile(do_while) => {
            1 + complexity_of_expr(&do_while.test) + complexity_of_stmt(&do_while.body)
        }
        Stmt::Block(block) => complexity_of_block(&block.body),
        Stmt::Try(try_stmt) => {
            complexity_of_block(&try_stmt.block)
                + try_stmt
                    .handler
                    .as_ref()
                    .map_or(0, |handler| 1 + complexity_of_block(&handler.body))
                + try_stmt
                    .finalizer
                    .as_ref()
                    .map_or(0, |finalizer| complexity_of_block(finalizer))
        }
        Stmt::Throw(throw) => complexity_of_expr(&throw.argument),
        Stmt::Export(export) => complexity_of_stmt(&export.declaration),
        Stmt::Class(class) => class.methods.len(),
        Stmt::Import(_) | Stmt::Break(_) | Stmt::Continue(_) | Stmt::Empty(_) => 0,
    }
}

fn complexity_of_expr(expr: &Expr) -> usize {
    match expr {
        Expr::Conditional(conditional) => {
            1 + complexity_of_expr(&conditional.test)
                + complexity_of_expr(&conditional.consequent)
                + complexity_of_expr(&conditional.alternate)
        }
        Expr::Logical(logical) => {
            1 + complexity_of_expr(&logical.left) + complexity_of_expr(&logical.right)
        }
        // Nested functions count one point; their bodies are their own problem.
        Expr::Function(_) | Expr::Arrow(_) => 1,
        Expr::Binary(binary) => {
            complexity_of_expr(&binary.left) + complexity_of_expr(&binary.right)
        }
        Expr::Unary(unary) => complexity_of_expr(&unary.argument),
        Expr::Update(update) => complexity_of_expr(&update.argument),
        Expr::Assign(assign) => {
            complexity_of_expr(&assign.target) + complexity_of_expr(&assign.value)
        }
        Expr::Call(call) => {
            complexity_of_expr(&call.callee)
                + call.arguments.iter().map(complexity_of_expr).sum::<usize>()
        }
        Expr::New(new_expr) => {
            complexity_of_expr(&new_expr.callee)
                + new_expr.arguments.iter().map(complexity_of_expr).sum::<usize>()
        }
        Expr::Member(member) => {
            complexity_of_expr(&member.object)
                + match &member.property {
                    MemberProp::Computed(property) => complexity_of_expr(property),
                    MemberProp::Static(_) => 0,
                }
        }
        Expr::Paren(paren) => complexity_of_expr(&paren.expression),
        Expr::Spread(spread) => complexity_of_expr(&spread.argument),
        Expr::Template(template) => {
            template.expressions.iter().map(complexity_of_expr).sum()
        }
        Expr::Array(array) => array.elements.iter().map(complexity_of_expr).sum(),
        Expr::Object(object) => {
            object.properties.iter().map(|property| complexity_of_expr(&property.value)).sum()
        }
        Expr::Identifier(_)
        | Expr::String(_)
        | Expr::Number(_)
        | Expr::Bool(_)
        | Expr::Null(_)
        | Expr::Regex(_) => 0,
    }
}
