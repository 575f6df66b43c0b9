// AST (Abstract Syntax Tree) definitions for igra programs
//
// Nodes borrow their tokens from the token buffer the lexer produced, so a
// `Program<'t>` lives no longer than that buffer. Every node exclusively owns
// its children and never points back at its parent.

use super::token::{Literal, Token, TokenKind};
use serde::Serialize;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Base types of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeKind {
    Int,
    Real,
    Char,
    String,
    Bool,
    Void,
    Array,
}

impl TypeKind {
    /// Map a type keyword to its kind. `None` for any other token.
    pub fn from_keyword(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Int => Some(TypeKind::Int),
            TokenKind::Real => Some(TypeKind::Real),
            TokenKind::Char => Some(TypeKind::Char),
            TokenKind::Text => Some(TypeKind::String),
            TokenKind::Bool => Some(TypeKind::Bool),
            TokenKind::Array => Some(TypeKind::Array),
            _ => None,
        }
    }
}

/// Type descriptor with optional array dimensions
#[derive(Debug, Clone, Serialize)]
pub struct Type<'t> {
    pub kind: TypeKind,
    pub token: &'t Token,
    /// Number of array dimensions, 0 for scalars.
    pub rank: usize,
    /// One entry per dimension. `None` for an unsized `[]`.
    pub dims: Vec<Option<Expr<'t>>>,
}

impl<'t> Type<'t> {
    pub fn new(kind: TypeKind, token: &'t Token) -> Self {
        Type {
            kind,
            token,
            rank: 0,
            dims: Vec::new(),
        }
    }

    pub fn with_dims(mut self, dims: Vec<Option<Expr<'t>>>) -> Self {
        self.rank = dims.len();
        self.dims = dims;
        self
    }

    pub fn is_array(&self) -> bool {
        self.kind == TypeKind::Array || self.rank > 0
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

impl BinOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            TokenKind::Percent => Some(BinOp::Mod),
            TokenKind::EqEq => Some(BinOp::Eq),
            TokenKind::NotEq => Some(BinOp::Ne),
            TokenKind::Lt => Some(BinOp::Lt),
            TokenKind::Le => Some(BinOp::Le),
            TokenKind::Gt => Some(BinOp::Gt),
            TokenKind::Ge => Some(BinOp::Ge),
            TokenKind::And => Some(BinOp::And),
            TokenKind::Or => Some(BinOp::Or),
            _ => None,
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnOp {
    Neg, // -x
    Not, // !x
}

/// Expressions
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "expr")]
pub enum Expr<'t> {
    Literal {
        token: &'t Token,
        value: &'t Literal,
    },
    Ident {
        name: &'t Token,
    },
    Index {
        name: &'t Token,
        indices: Vec<Expr<'t>>,
    },
    Grouping {
        inner: Box<Expr<'t>>,
    },
    Call {
        callee: &'t Token,
        args: Vec<Expr<'t>>,
    },
    Unary {
        op: UnOp,
        op_token: &'t Token,
        right: Box<Expr<'t>>,
    },
    Binary {
        left: Box<Expr<'t>>,
        op: BinOp,
        op_token: &'t Token,
        right: Box<Expr<'t>>,
    },
}

impl<'t> Expr<'t> {
    /// The token this expression is reported at in diagnostics.
    pub fn token(&self) -> &'t Token {
        match self {
            Expr::Literal { token, .. } => *token,
            Expr::Ident { name } | Expr::Index { name, .. } => *name,
            Expr::Grouping { inner } => inner.token(),
            Expr::Call { callee, .. } => *callee,
            Expr::Unary { op_token, .. } | Expr::Binary { op_token, .. } => *op_token,
        }
    }
}

/// Variable declaration: `moj broj x[5] = 1;`
#[derive(Debug, Clone, Serialize)]
pub struct VarDecl<'t> {
    /// `moj` or `moje`
    pub keyword: &'t Token,
    pub var_type: Type<'t>,
    pub name: &'t Token,
    pub init: Option<Expr<'t>>,
}

/// Braced statement list, also used for the entry block.
#[derive(Debug, Clone, Serialize)]
pub struct Block<'t> {
    /// `{` or `zapocni_igru`
    pub open: &'t Token,
    pub statements: Vec<Stmt<'t>>,
}

/// Statements
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "stmt")]
pub enum Stmt<'t> {
    VarDecl(VarDecl<'t>),
    Assign {
        target: Expr<'t>,
        value: Expr<'t>,
    },
    If {
        keyword: &'t Token,
        condition: Expr<'t>,
        then_branch: Block<'t>,
        else_branch: Option<Block<'t>>,
    },
    While {
        keyword: &'t Token,
        condition: Expr<'t>,
        body: Box<Stmt<'t>>,
    },
    Return {
        keyword: &'t Token,
        value: Expr<'t>,
    },
    Block(Block<'t>),
    Expression {
        expr: Expr<'t>,
    },
    Empty {
        semicolon: &'t Token,
    },
}

/// Function parameter
#[derive(Debug, Clone, Serialize)]
pub struct Param<'t> {
    pub name: &'t Token,
    pub param_type: Type<'t>,
}

/// Function definition: `broj zbir(broj a, broj b) { ... }`
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDef<'t> {
    pub name: &'t Token,
    pub params: Vec<Param<'t>>,
    pub return_type: Type<'t>,
    pub body: Vec<Stmt<'t>>,
}

/// Top-level items, in source order
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "item")]
pub enum TopItem<'t> {
    Function(FunctionDef<'t>),
    Var(VarDecl<'t>),
    /// The entry block. Always the last item of a program.
    Stmt { stmt: Stmt<'t> },
}

/// Top-level program structure
#[derive(Debug, Clone, Default, Serialize)]
pub struct Program<'t> {
    pub items: Vec<TopItem<'t>>,
}

impl<'t> Program<'t> {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef<'t>> {
        self.items.iter().filter_map(|item| match item {
            TopItem::Function(def) => Some(def),
            _ => None,
        })
    }

    /// The entry block, if the program has been fully parsed.
    pub fn entry(&self) -> Option<&Block<'t>> {
        match self.items.last() {
            Some(TopItem::Stmt {
                stmt: Stmt::Block(block),
            }) => Some(block),
            _ => None,
        }
    }
}
