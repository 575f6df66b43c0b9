//! # Introduction
//!
//! igra is the front end of a compiler for a small teaching language with
//! Serbian keywords. It turns source text into tokens and tokens into a typed
//! syntax tree; nothing runs the program afterwards.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Lexer → Tokens → Parser → AST → JSON / outline / source
//! ```
//!
//! 1. [`parser::lexer`] drives a [`parser::scanner::Scanner`] over the
//!    characters and produces [`parser::token::Token`]s ending in a single
//!    end-of-input token.
//! 2. [`parser::parse`] builds a [`parser::ast::Program`] that borrows those
//!    tokens.
//! 3. [`parser::node`] and [`parser::printer`] render the tree; every AST type
//!    also implements `serde::Serialize`.
//!
//! ## Example
//!
//! ```
//! use igra::parser::{render_tree, with_program};
//!
//! let outline = with_program("moj broj x = 5; zapocni_igru napisi(x); zavrsi_igru;", |_, program| {
//!     render_tree(program)
//! })
//! .unwrap();
//! assert!(outline.starts_with("Program\n  VarDecl x\n"));
//! ```

pub mod parser;
