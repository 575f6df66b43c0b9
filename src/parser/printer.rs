//! Source printer
//!
//! Renders a parsed [`Program`] back into igra source that the parser accepts
//! again. Literals, names and operators are written with their original
//! lexemes; parentheses appear exactly where the tree has a
//! [`Expr::Grouping`], which is enough to rebuild the same tree.

use super::ast::*;
use super::token::TokenKind;

const INDENT: &str = "    ";

/// Print a whole program, one statement per line.
pub fn print_program(program: &Program<'_>) -> String {
    let mut printer = Printer::default();
    for item in &program.items {
        printer.item(item);
    }
    printer.out
}

/// Print a single expression on one line.
pub fn print_expression(expr: &Expr<'_>) -> String {
    let mut printer = Printer::default();
    printer.expr(expr);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn item(&mut self, item: &TopItem<'_>) {
        match item {
            TopItem::Function(def) => {
                self.function(def);
                self.out.push('\n');
            }
            TopItem::Var(decl) => {
                self.var_decl(decl);
                self.out.push('\n');
            }
            TopItem::Stmt {
                stmt: Stmt::Block(block),
            } if block.open.kind == TokenKind::Begin => self.entry_block(block),
            TopItem::Stmt { stmt } => self.statement(stmt),
        }
    }

    fn function(&mut self, def: &FunctionDef<'_>) {
        self.out.push_str(&def.return_type.token.lexeme);
        self.out.push(' ');
        self.out.push_str(&def.name.lexeme);
        self.out.push('(');
        for (i, param) in def.params.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(&param.param_type.token.lexeme);
            self.out.push(' ');
            self.out.push_str(&param.name.lexeme);
        }
        self.out.push_str(") ");
        self.statements_in_braces(&def.body);
        self.out.push('\n');
    }

    fn entry_block(&mut self, block: &Block<'_>) {
        self.out.push_str(&block.open.lexeme);
        self.out.push('\n');
        self.depth += 1;
        for stmt in &block.statements {
            self.statement(stmt);
        }
        self.depth -= 1;
        self.out.push_str(TokenKind::End.describe());
        self.out.push_str(";\n");
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn statement(&mut self, stmt: &Stmt<'_>) {
        self.indent();
        self.statement_inline(stmt);
        self.out.push('\n');
    }

    /// Statement text without leading indentation or trailing newline.
    fn statement_inline(&mut self, stmt: &Stmt<'_>) {
        match stmt {
            Stmt::VarDecl(decl) => self.var_decl(decl),
            Stmt::Assign { target, value } => {
                self.expr(target);
                self.out.push_str(" = ");
                self.expr(value);
                self.out.push(';');
            }
            Stmt::If {
                keyword,
                condition,
                then_branch,
                else_branch,
            } => {
                self.keyword_condition(&keyword.lexeme, condition);
                self.statements_in_braces(&then_branch.statements);
                if let Some(else_branch) = else_branch {
                    self.out.push(' ');
                    self.out.push_str(TokenKind::Else.describe());
                    self.out.push(' ');
                    self.statements_in_braces(&else_branch.statements);
                }
            }
            Stmt::While {
                keyword,
                condition,
                body,
            } => {
                self.keyword_condition(&keyword.lexeme, condition);
                self.statement_inline(body);
            }
            Stmt::Return { keyword, value } => {
                self.out.push_str(&keyword.lexeme);
                self.out.push(' ');
                self.expr(value);
                self.out.push(';');
            }
            Stmt::Block(block) => self.statements_in_braces(&block.statements),
            Stmt::Expression { expr } => {
                self.expr(expr);
                self.out.push(';');
            }
            Stmt::Empty { .. } => self.out.push(';'),
        }
    }

    fn keyword_condition(&mut self, keyword: &str, condition: &Expr<'_>) {
        self.out.push_str(keyword);
        self.out.push_str(" (");
        self.expr(condition);
        self.out.push_str(") ");
    }

    fn statements_in_braces(&mut self, statements: &[Stmt<'_>]) {
        self.out.push_str("{\n");
        self.depth += 1;
        for stmt in statements {
            self.statement(stmt);
        }
        self.depth -= 1;
        self.indent();
        self.out.push('}');
    }

    fn var_decl(&mut self, decl: &VarDecl<'_>) {
        self.out.push_str(&decl.keyword.lexeme);
        self.out.push(' ');
        self.out.push_str(&decl.var_type.token.lexeme);
        self.out.push(' ');
        self.out.push_str(&decl.name.lexeme);
        for dim in &decl.var_type.dims {
            self.out.push('[');
            if let Some(size) = dim {
                self.expr(size);
            }
            self.out.push(']');
        }
        if let Some(init) = &decl.init {
            self.out.push_str(" = ");
            self.expr(init);
        }
        self.out.push(';');
    }

    fn expr(&mut self, expr: &Expr<'_>) {
        match expr {
            Expr::Literal { token, .. } => self.out.push_str(&token.lexeme),
            Expr::Ident { name } => self.out.push_str(&name.lexeme),
            Expr::Index { name, indices } => {
                self.out.push_str(&name.lexeme);
                for index in indices {
                    self.out.push('[');
                    self.expr(index);
                    self.out.push(']');
                }
            }
            Expr::Grouping { inner } => {
                self.out.push('(');
                self.expr(inner);
                self.out.push(')');
            }
            Expr::Call { callee, args } => {
                self.out.push_str(&callee.lexeme);
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expr(arg);
                }
                self.out.push(')');
            }
            Expr::Unary { op_token, right, .. } => {
                self.out.push_str(&op_token.lexeme);
                self.expr(right);
            }
            Expr::Binary {
                left,
                op_token,
                right,
                ..
            } => {
                self.expr(left);
                self.out.push(' ');
                self.out.push_str(&op_token.lexeme);
                self.out.push(' ');
                self.expr(right);
            }
        }
    }
}
