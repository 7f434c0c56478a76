use crate::analyze::expression::check_expression;
use crate::analyze::function::{check_class_method, check_function_decl};
use crate::analyze::import;
use crate::checker::Checker;
use crate::syntax::ast::Stmt;

pub fn check_statement(stmt: &Stmt, checker: &mut Checker) -> anyhow::Result<()> {
    match stmt {
        Stmt::Expression(expr_stmt) => check_expression(&expr_stmt.expression, checker)?,
        Stmt::VarDecl(decl) => {
            for declarator in &decl.declarators {
                if let Some(init) = &declarator.init {
                    check_expression(init, checker)?;
                }
            }
        }
        Stmt::Function(function) => check_function_decl(function, checker)?,
        Stmt::Return(ret) => {
            if let Some(argument) = &ret.argument {
                check_expression(argument, checker)?;
            }
        }
        Stmt::If(if_stmt) => {
            check_expression(&if_stmt.test, checker)?;
            check_statement(&if_stmt.consequent, checker)?;
            if let Some(alternate) = &if_stmt.alternate {
                check_statement(alternate, checker)?;
            }
        }
        Stmt::For(for_stmt) => {
            if let Some(init) = &for_stmt.init {
                check_statement(init, checker)?;
            }
            if let Some(test) = &for_stmt.test {
                check_expression(test, checker)?;
            }
            if let Some(update) = &for_stmt.update {
                check_expression(update, checker)?;
            }
            check_statement(&for_stmt.body, checker)?;
        }
        Stmt::ForInOf(for_stmt) => {
            check_statement(&for_stmt.left, checker)?;
            check_expression(&for_stmt.right, checker)?;
            check_statement(&for_stmt.body, checker)?;
        }
        Stmt::While(while_stmt) => {
            check_expression(&while_stmt.test, checker)?;
            check_statement(&while_stmt.body, checker)?;
        }
        Stmt::DoWhile(do_while) => {
            check_statement(&do_while.body, checker)?;
            check_expression(&do_while.test, checker)?;
        }
        Stmt::Block(block) => {
            for stmt in &block.body {
                check_statement(stmt, checker)?;
            }
        }
        Stmt::Try(try_stmt) => {
            for stmt in &try_stmt.block {
                check_statement(stmt, checker)?;
            }
            if let Some(handler) = &try_stmt.handler {
                for stmt in &handler.body {
                    check_statement(stmt, checker)?;
                }
            }
            if let Some(finalizer) = &try_stmt.finalizer {
                for stmt in finalizer {
                    check_statement(stmt, checker)?;
                }
            }
        }
        Stmt::Throw(throw) => check_expression(&throw.argument, checker)?,
        Stmt::Import(decl) => import::import(decl, checker)?,
        Stmt::Export(export) => check_statement(&export.declaration, checker)?,
        Stmt::Class(class) => {
            if let Some(superclass) = &class.superclass {
                check_expression(superclass, checker)?;
            }
            for method in &class.methods {
                check_class_method(method, checker)?;
            }
        }
        Stmt::Break(_) | Stmt::Continue(_) | Stmt::Empty(_) => {}
    }
    Ok(())
}
