//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: function definitions, types, and the entry block
//! - `statements`: statements (declarations, `ako`, `radi`, assignments, ...)
//! - `expressions`: expressions, one function per precedence level
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The parser reads a borrowed token slice and never copies or mutates it.
//! It is fail-fast: the first mismatch aborts with a [`ParseError`] and no
//! partial tree is returned.

use crate::parser::ast::*;
use crate::parser::lexer::{self, LexError};
use crate::parser::token::{Span, Token, TokenKind, EOF_LEXEME};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Parse error at line {}, column {}: {message}",
    .token.span.line,
    .token.span.col_start
)]
pub struct ParseError {
    /// The offending token.
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        self.token.location()
    }
}

/// Any error the front end can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FrontendError {
    pub fn location(&self) -> SourceLocation {
        match self {
            FrontendError::Lex(err) => err.location,
            FrontendError::Parse(err) => err.location(),
        }
    }
}

/// Stand-in returned by `peek` if a token slice lacks its end-of-input token.
static DETACHED_EOF: Lazy<Token> = Lazy::new(|| {
    Token::new(
        TokenKind::Eof,
        EOF_LEXEME,
        None,
        Span {
            line: 1,
            col_start: 1,
            col_end: 1,
        },
    )
});

/// Deepest nesting of blocks, loop bodies, parentheses and unary operators
/// the parser accepts before giving up with a [`ParseError`].
pub const MAX_NESTING_DEPTH: usize = 200;

/// Recursive descent parser for igra programs
pub struct Parser<'t> {
    pub(crate) tokens: &'t [Token],
    pub(crate) position: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    /// Create a parser over a token sequence as produced by [`lexer::tokenize`].
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parse the entire program:
    /// function definitions, then top-level declarations, then the entry block.
    pub fn parse_program(&mut self) -> Result<Program<'t>, ParseError> {
        let mut program = Program::new();

        while self.peek().kind.is_type_keyword() {
            let function = self.parse_function_definition()?;
            program.items.push(TopItem::Function(function));
        }

        while self.check(TokenKind::Var) || self.check(TokenKind::VarChar) {
            let decl = self.parse_variable_declaration()?;
            program.items.push(TopItem::Var(decl));
        }

        let entry = self.parse_entry_block()?;
        program.items.push(TopItem::Stmt {
            stmt: Stmt::Block(entry),
        });

        if !self.is_at_end() {
            return Err(self.error_at_current("Expected end of input after the entry block"));
        }

        Ok(program)
    }

    /// Parse exactly one statement followed by end of input.
    pub fn parse_single_statement(&mut self) -> Result<Stmt<'t>, ParseError> {
        let stmt = self.parse_statement()?;
        self.expect_end()?;
        Ok(stmt)
    }

    /// Parse exactly one expression followed by end of input.
    pub fn parse_single_expression(&mut self) -> Result<Expr<'t>, ParseError> {
        let expr = self.parse_expression()?;
        self.expect_end()?;
        Ok(expr)
    }

    // ===== Helper methods =====

    /// Run `parse` one nesting level deeper, failing once the nesting limit is hit.
    pub(crate) fn nested<R>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<R, ParseError>,
    ) -> Result<R, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at_current("Nesting too deep"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume and return the current token. Never moves past end of input.
    pub(crate) fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &'t Token {
        let tokens: &'t [Token] = self.tokens;
        tokens.get(self.position).unwrap_or(&*DETACHED_EOF)
    }

    pub(crate) fn error_at_current(&self, message: &str) -> ParseError {
        ParseError {
            token: self.peek().clone(),
            message: format!("{}, found {}", message, self.peek()),
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<&'t Token, ParseError> {
        self.match_token(kind)
            .ok_or_else(|| self.error_at_current(message))
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::LParen, &format!("Expected '(' {ctx}"))
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::RParen, &format!("Expected ')' {ctx}"))
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::LBrace, &format!("Expected '{{' {ctx}"))
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::RBrace, &format!("Expected '}}' {ctx}"))
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::Semicolon, &format!("Expected ';' {ctx}"))
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::Ident, &format!("Expected identifier {ctx}"))
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error_at_current("Expected end of input"))
        }
    }
}

/// Parse a whole program from a token sequence.
pub fn parse(tokens: &[Token]) -> Result<Program<'_>, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Lex and parse `source`, handing the tree to `consume` while the token
/// buffer it borrows from is still alive.
pub fn with_program<R>(
    source: &str,
    consume: impl FnOnce(&[Token], &Program<'_>) -> R,
) -> Result<R, FrontendError> {
    let tokens = lexer::tokenize(source)?;
    let program = parse(&tokens)?;
    Ok(consume(&tokens, &program))
}
