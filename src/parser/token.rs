//! Token definitions and the reserved-word table
//!
//! A [`Token`] is produced once by the lexer and never modified afterwards.
//! The parser and the AST only ever hold shared references to tokens.

use super::ast::SourceLocation;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// Lexeme of the end-of-input token. No source text can produce it.
pub const EOF_LEXEME: &str = "<eof>";

/// Every token kind the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Literals
    IntLiteral,
    RealLiteral,
    CharLiteral,
    StringLiteral,
    BoolLiteral,

    Ident,

    // Type keywords
    Int,   // broj
    Real,  // realan
    Char,  // slovo
    Text,  // tekst
    Bool,  // pogodak
    Array, // niz

    // Declarations
    Var,     // moj
    VarChar, // moje

    // Entry block
    Begin, // zapocni_igru
    End,   // zavrsi_igru

    // Control flow
    If,     // ako
    Else,   // inace
    While,  // radi
    Return, // vrati

    // Logical connectives
    And, // i
    Or,  // ili

    // Built-in statements
    Print,   // napisi
    Read,    // upisi
    Encrypt, // enkriptuj
    Decrypt, // dekriptuj

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Comparison
    Lt,
    Le,
    Gt,
    Ge,
    EqEq,
    NotEq,

    Assign,
    Bang,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,

    Eof,
}

impl TokenKind {
    /// Whether this kind names a type (`broj`, `realan`, ...).
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Real
                | TokenKind::Char
                | TokenKind::Text
                | TokenKind::Bool
                | TokenKind::Array
        )
    }

    /// Source spelling for fixed tokens, a category name for the rest.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::IntLiteral => "integer literal",
            TokenKind::RealLiteral => "real literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::BoolLiteral => "boolean literal",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "broj",
            TokenKind::Real => "realan",
            TokenKind::Char => "slovo",
            TokenKind::Text => "tekst",
            TokenKind::Bool => "pogodak",
            TokenKind::Array => "niz",
            TokenKind::Var => "moj",
            TokenKind::VarChar => "moje",
            TokenKind::Begin => "zapocni_igru",
            TokenKind::End => "zavrsi_igru",
            TokenKind::If => "ako",
            TokenKind::Else => "inace",
            TokenKind::While => "radi",
            TokenKind::Return => "vrati",
            TokenKind::And => "i",
            TokenKind::Or => "ili",
            TokenKind::Print => "napisi",
            TokenKind::Read => "upisi",
            TokenKind::Encrypt => "enkriptuj",
            TokenKind::Decrypt => "dekriptuj",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Assign => "=",
            TokenKind::Bang => "!",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntLiteral
            | TokenKind::RealLiteral
            | TokenKind::CharLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteral
            | TokenKind::Ident
            | TokenKind::Eof => write!(f, "{}", self.describe()),
            _ => write!(f, "'{}'", self.describe()),
        }
    }
}

/// Reserved words. Boolean literals carry their constant value.
static KEYWORDS: Lazy<FxHashMap<&'static str, (TokenKind, Option<bool>)>> = Lazy::new(|| {
    [
        ("broj", TokenKind::Int, None),
        ("realan", TokenKind::Real, None),
        ("slovo", TokenKind::Char, None),
        ("tekst", TokenKind::Text, None),
        ("pogodak", TokenKind::Bool, None),
        ("niz", TokenKind::Array, None),
        ("moj", TokenKind::Var, None),
        ("moje", TokenKind::VarChar, None),
        ("zapocni_igru", TokenKind::Begin, None),
        ("zavrsi_igru", TokenKind::End, None),
        ("ako", TokenKind::If, None),
        ("inace", TokenKind::Else, None),
        ("radi", TokenKind::While, None),
        ("vrati", TokenKind::Return, None),
        ("i", TokenKind::And, None),
        ("ili", TokenKind::Or, None),
        ("napisi", TokenKind::Print, None),
        ("upisi", TokenKind::Read, None),
        ("enkriptuj", TokenKind::Encrypt, None),
        ("dekriptuj", TokenKind::Decrypt, None),
        ("tacno", TokenKind::BoolLiteral, Some(true)),
        ("netacno", TokenKind::BoolLiteral, Some(false)),
    ]
    .into_iter()
    .map(|(text, kind, value)| (text, (kind, value)))
    .collect()
});

/// Look up a reserved word. Returns `None` for ordinary identifiers.
pub fn keyword(text: &str) -> Option<(TokenKind, Option<bool>)> {
    KEYWORDS.get(text).copied()
}

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i32),
    Real(f64),
    Bool(bool),
    Char(char),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Real(x) => write!(f, "{:?}", x),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Char(c) => write!(f, "{:?}", c),
            Literal::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// Line and inclusive column range of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub line: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Span {
    pub fn start(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.col_start)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            span,
        }
    }

    pub fn location(&self) -> SourceLocation {
        self.span.start()
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Ident => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::IntLiteral
            | TokenKind::RealLiteral
            | TokenKind::CharLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteral => write!(f, "{} {}", self.kind.describe(), self.lexeme),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Render a token sequence one token per line for debugging dumps.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let position = format!(
            "{}:{}-{}",
            token.span.line, token.span.col_start, token.span.col_end
        );
        let kind = format!("{:?}", token.kind);
        out.push_str(&format!("{:<10} {:<14} '{}'", position, kind, token.lexeme));
        if let Some(value) = &token.literal {
            out.push_str(&format!(" = {}", value));
        }
        out.push('\n');
    }
    out
}
