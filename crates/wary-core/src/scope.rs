//! Best-effort lexical scope tracking.
//!
//! Rules that look for builtins (`eval`, `RegExp`, `require`, ...) need to
//! know when a user declaration shadows the global. A shallow pre-scan of
//! each function body (and the program itself) collects the names declared
//! there: `var`/`let`/`const`, function declarations, parameters, imports
//! and catch parameters. Destructuring patterns declare nothing; this is a
//! documented approximation, not full binding analysis.

use rustc_hash::FxHashSet;

use crate::syntax::ast::{Pattern, Stmt};

#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<FxHashSet<String>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a function (or program) scope, hoisting the names its body and
    /// parameters declare.
    pub fn push(&mut self, params: &[Pattern], body: &[Stmt]) {
        let mut names = FxHashSet::default();
        for param in params {
            if let Some(name) = param.name() {
                names.insert(name.to_string());
            }
        }
        collect_declared_names(body, &mut names);
        self.scopes.push(names);
    }

    pub fn pop(&mut self) {
        self.scopes.pop();
    }

    /// Whether `name` is declared in any enclosing scope, i.e. a builtin of
    /// that name is shadowed here.
    pub fn is_shadowed(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.contains(name))
    }
}

/// Shallow scan: recurses into blocks and control flow, stops at function
/// boundaries (their bodies declare into their own scope).
fn collect_declared_names(body: &[Stmt], names: &mut FxHashSet<String>) {
    for stmt in body {
        match stmt {
            Stmt::VarDecl(decl) => {
                for declarator in &decl.declarators {
                    if let Some(name) = declarator.name.name() {
                        names.insert(name.to_string());
                    }
                }
            }
            Stmt::Function(function) => {
                names.insert(function.name.name.clone());
            }
            Stmt::Class(class) => {
                if let Some(name) = &class.name {
                    names.insert(name.name.clone());
                }
            }
            Stmt::Import(import) => {
                for specifier in &import.specifiers {
                    names.insert(specifier.local_name().to_string());
                }
            }
            Stmt::Block(block) => collect_declared_names(&block.body, names),
            Stmt::If(if_stmt) => {
                collect_declared_names(std::slice::from_ref(&if_stmt.consequent), names);
                if let Some(alternate) = &if_stmt.alternate {
                    collect_declared_names(std::slice::from_ref(alternate), names);
                }
            }
            Stmt::For(for_stmt) => {
                if let Some(init) = &for_stmt.init {
                    collect_declared_names(std::slice::from_ref(init), names);
                }
                collect_declared_names(std::slice::from_ref(&for_stmt.body), names);
            }
            Stmt::ForInOf(for_stmt) => {
                collect_declared_names(std::slice::from_ref(&for_stmt.left), names);
                collect_declared_names(std::slice::from_ref(&for_stmt.body), names);
            }
            Stmt::While(while_stmt) => {
                collect_declared_names(std::slice::from_ref(&while_stmt.body), names);
            }
            Stmt::DoWhile(do_while) => {
                collect_declared_names(std::slice::from_ref(&do_while.body), names);
            }
            Stmt::Try(try_stmt) => {
                collect_declared_names(&try_stmt.block, names);
                if let Some(handler) = &try_stmt.handler {
                    if let Some(param) = &handler.param
                        && let Some(name) = param.name()
                    {
                        names.insert(name.to_string());
                    }
                    collect_declared_names(&handler.body, names);
                }
                if let Some(finalizer) = &try_stmt.finalizer {
                    collect_declared_names(finalizer, names);
                }
            }
            Stmt::Export(export) => {
                collect_declared_names(std::slice::from_ref(&export.declaration), names);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn program_scope(code: &str) -> ScopeStack {
        let program = parse(code).unwrap();
        let mut scopes = ScopeStack::new();
        scopes.push(&[], &program.body);
        scopes
    }

    #[test]
    fn top_level_declarations_shadow() {
        let scopes = program_scope("const eval = makeSandbox();\n");
        assert!(scopes.is_shadowed("eval"));
        assert!(!scopes.is_shadowed("RegExp"));
    }

    #[test]
    fn declarations_inside_blocks_are_found() {
        let scopes = program_scope("if (x) { function require(mod) { return mods[mod]; } }\n");
        assert!(scopes.is_shadowed("require"));
    }

    #[test]
    fn imports_shadow() {
        let scopes = program_scope("import eval from 'safe-eval';\n");
        assert!(scopes.is_shadowed("eval"));
    }

    #[test]
    fn function_bodies_do_not_leak_out() {
        let scopes = program_scope("function outer() { const eval = 1; }\n");
        assert!(!scopes.is_shadowed("eval"));
        assert!(scopes.is_shadowed("outer"));
    }
}
