//! igra source front end
//!
//! This module transforms igra source text into an Abstract Syntax Tree (AST):
//! - [`scanner`]: character cursor with line/column tracking
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`](mod@parse): Parsing (tokens → AST), split over [`declarations`],
//!   [`statements`] and [`expressions`]
//! - [`ast`]: AST node definitions
//! - [`node`]: uniform node view and the tree outline
//! - [`printer`]: AST back to source
//!
//! # Language
//!
//! - Types: `broj`, `realan`, `slovo`, `tekst`, `pogodak`, `niz`, with array dimensions
//! - Declarations: `moj broj x = 1;`, `moje slovo c;`
//! - Statements: assignments, `ako`/`inace`, `radi`, `vrati`, calls
//! - Built-ins: `napisi`, `upisi`, `enkriptuj`, `dekriptuj`
//! - Expressions: arithmetic, comparison, `i`, `ili`, `!`, unary `-`
//! - Every program ends with the entry block `zapocni_igru ... zavrsi_igru;`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one function per precedence level.
//! Lexing and parsing are fail-fast: the first error is returned and no
//! partial result is exposed.

pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod lexer;
pub mod node;
pub mod parse;
pub mod printer;
pub mod scanner;
pub mod statements;
pub mod token;

pub use lexer::{tokenize, LexError, LexErrorKind};
pub use node::{render_tree, Node};
pub use parse::{parse, with_program, FrontendError, ParseError, Parser};
pub use printer::{print_expression, print_program};
pub use token::{format_tokens, Literal, Span, Token, TokenKind};
