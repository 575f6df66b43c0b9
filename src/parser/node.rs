//! Uniform view over AST nodes
//!
//! [`Node`] borrows any element of a parsed [`Program`] and exposes the same
//! three things for every one of them: a kind label, the token it originates
//! from (if any) and its ordered children. Consumers that only need generic
//! traversal, like [`render_tree`], never match on concrete variants.

use super::ast::*;
use super::token::Token;

#[derive(Debug, Clone, Copy)]
pub enum Node<'a, 't> {
    Program(&'a Program<'t>),
    Function(&'a FunctionDef<'t>),
    Param(&'a Param<'t>),
    Type(&'a Type<'t>),
    /// One array dimension, `None` for `[]`.
    Dim(&'a Option<Expr<'t>>),
    VarDecl(&'a VarDecl<'t>),
    Block(&'a Block<'t>),
    Stmt(&'a Stmt<'t>),
    Expr(&'a Expr<'t>),
}

impl<'a, 't> Node<'a, 't> {
    pub fn item(item: &'a TopItem<'t>) -> Self {
        match item {
            TopItem::Function(def) => Node::Function(def),
            TopItem::Var(decl) => Node::VarDecl(decl),
            TopItem::Stmt { stmt } => Node::stmt(stmt),
        }
    }

    /// Statements that wrap a standalone node are viewed as that node.
    pub fn stmt(stmt: &'a Stmt<'t>) -> Self {
        match stmt {
            Stmt::VarDecl(decl) => Node::VarDecl(decl),
            Stmt::Block(block) => Node::Block(block),
            _ => Node::Stmt(stmt),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::Function(_) => "FunctionDef",
            Node::Param(_) => "Param",
            Node::Type(_) => "Type",
            Node::Dim(_) => "Dim",
            Node::VarDecl(_) => "VarDecl",
            Node::Block(_) => "Block",
            Node::Stmt(stmt) => match stmt {
                Stmt::VarDecl(_) => "VarDecl",
                Stmt::Assign { .. } => "Assign",
                Stmt::If { .. } => "If",
                Stmt::While { .. } => "While",
                Stmt::Return { .. } => "Return",
                Stmt::Block(_) => "Block",
                Stmt::Expression { .. } => "ExpressionStmt",
                Stmt::Empty { .. } => "Empty",
            },
            Node::Expr(expr) => match expr {
                Expr::Literal { .. } => "Literal",
                Expr::Ident { .. } => "Ident",
                Expr::Index { .. } => "Index",
                Expr::Grouping { .. } => "Grouping",
                Expr::Call { .. } => "Call",
                Expr::Unary { .. } => "Unary",
                Expr::Binary { .. } => "Binary",
            },
        }
    }

    pub fn token(&self) -> Option<&'t Token> {
        match *self {
            Node::Program(_) | Node::Dim(_) => None,
            Node::Function(def) => Some(def.name),
            Node::Param(param) => Some(param.name),
            Node::Type(ty) => Some(ty.token),
            Node::VarDecl(decl) => Some(decl.name),
            Node::Block(block) => Some(block.open),
            Node::Stmt(stmt) => match stmt {
                Stmt::VarDecl(decl) => Some(decl.name),
                Stmt::Block(block) => Some(block.open),
                Stmt::If { keyword, .. }
                | Stmt::While { keyword, .. }
                | Stmt::Return { keyword, .. } => Some(*keyword),
                Stmt::Empty { semicolon } => Some(*semicolon),
                Stmt::Assign { .. } | Stmt::Expression { .. } => None,
            },
            Node::Expr(Expr::Grouping { .. }) => None,
            Node::Expr(expr) => Some(expr.token()),
        }
    }

    pub fn children(&self) -> Vec<Node<'a, 't>> {
        match *self {
            Node::Program(program) => program.items.iter().map(Node::item).collect(),
            Node::Function(def) => {
                let mut children = vec![Node::Type(&def.return_type)];
                children.extend(def.params.iter().map(Node::Param));
                children.extend(def.body.iter().map(Node::stmt));
                children
            }
            Node::Param(param) => vec![Node::Type(&param.param_type)],
            Node::Type(ty) => ty.dims.iter().map(Node::Dim).collect(),
            Node::Dim(size) => size.iter().map(Node::Expr).collect(),
            Node::VarDecl(decl) => {
                let mut children = vec![Node::Type(&decl.var_type)];
                children.extend(decl.init.iter().map(Node::Expr));
                children
            }
            Node::Block(block) => block.statements.iter().map(Node::stmt).collect(),
            Node::Stmt(stmt) => match stmt {
                Stmt::VarDecl(decl) => Node::VarDecl(decl).children(),
                Stmt::Block(block) => Node::Block(block).children(),
                Stmt::Assign { target, value } => vec![Node::Expr(target), Node::Expr(value)],
                Stmt::If {
                    condition,
                    then_branch,
                    else_branch,
                    ..
                } => {
                    let mut children = vec![Node::Expr(condition), Node::Block(then_branch)];
                    children.extend(else_branch.iter().map(Node::Block));
                    children
                }
                Stmt::While {
                    condition, body, ..
                } => vec![Node::Expr(condition), Node::stmt(body)],
                Stmt::Return { value, .. } => vec![Node::Expr(value)],
                Stmt::Expression { expr } => vec![Node::Expr(expr)],
                Stmt::Empty { .. } => Vec::new(),
            },
            Node::Expr(expr) => match expr {
                Expr::Literal { .. } | Expr::Ident { .. } => Vec::new(),
                Expr::Index { indices, .. } => indices.iter().map(Node::Expr).collect(),
                Expr::Grouping { inner } => vec![Node::Expr(inner)],
                Expr::Call { args, .. } => args.iter().map(Node::Expr).collect(),
                Expr::Unary { right, .. } => vec![Node::Expr(right)],
                Expr::Binary { left, right, .. } => vec![Node::Expr(left), Node::Expr(right)],
            },
        }
    }
}

/// Render a program as an indented outline, one node per line.
pub fn render_tree(program: &Program<'_>) -> String {
    let mut out = String::new();
    render_node(Node::Program(program), 0, &mut out);
    out
}

fn render_node(node: Node<'_, '_>, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(node.kind());
    if let Some(token) = node.token() {
        out.push(' ');
        out.push_str(&token.lexeme);
    }
    out.push('\n');

    for child in node.children() {
        render_node(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::parse;

    #[test]
    fn test_render_scenario_program() {
        let tokens = tokenize("moj broj x = 5; zapocni_igru napisi(x); zavrsi_igru;").unwrap();
        let program = parse(&tokens).unwrap();

        insta::assert_snapshot!(render_tree(&program), @r"
        Program
          VarDecl x
            Type broj
            Literal 5
          Block zapocni_igru
            ExpressionStmt
              Call napisi
                Ident x
        ");
    }

    #[test]
    fn test_render_function_and_dims() {
        let source = "broj f(niz a) { radi (a > 0) a = a - 1; vrati (a); }\n\
                      zapocni_igru moj niz m[2][]; ; zavrsi_igru;";
        let tokens = tokenize(source).unwrap();
        let program = parse(&tokens).unwrap();

        insta::assert_snapshot!(render_tree(&program), @r"
        Program
          FunctionDef f
            Type broj
            Param a
              Type niz
            While radi
              Binary >
                Ident a
                Literal 0
              Assign
                Ident a
                Binary -
                  Ident a
                  Literal 1
            Return vrati
              Grouping
                Ident a
          Block zapocni_igru
            VarDecl m
              Type niz
                Dim
                  Literal 2
                Dim
            Empty ;
        ");
    }

    #[test]
    fn test_children_follow_source_order() {
        let tokens = tokenize("ako (a) { b = 1; } inace { c = 2; }").unwrap();
        let stmt = crate::parser::parse::Parser::new(&tokens)
            .parse_single_statement()
            .unwrap();

        let node = Node::stmt(&stmt);
        assert_eq!(node.kind(), "If");
        assert_eq!(node.token().map(|t| t.lexeme.as_str()), Some("ako"));

        let kinds: Vec<_> = node.children().iter().map(|child| child.kind()).collect();
        assert_eq!(kinds, ["Ident", "Block", "Block"]);
    }

    #[test]
    fn test_every_node_reachable() {
        let source = "zapocni_igru napisi(-(1 + f(2)) * a[0]); zavrsi_igru;";
        let tokens = tokenize(source).unwrap();
        let program = parse(&tokens).unwrap();

        fn count(node: Node<'_, '_>) -> usize {
            1 + node.children().into_iter().map(count).sum::<usize>()
        }

        // Program, Block, ExpressionStmt, Call, Binary, Unary, Grouping,
        // Binary, Literal, Call, Literal, Index, Literal
        assert_eq!(count(Node::Program(&program)), 13);
    }
}
