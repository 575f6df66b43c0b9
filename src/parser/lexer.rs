//! Lexer (tokenizer) for igra source code
//!
//! Drives a [`Scanner`] over the source text and classifies characters into a
//! flat [`Token`] stream consumed by the parser. The stream always ends with
//! exactly one [`TokenKind::Eof`] token.
//!
//! Literal policy:
//! - strings run to the next `"` on the same line, no escapes, `""` allowed;
//! - char literals hold exactly one character, taken verbatim (`' '` is a space);
//! - integers are 32-bit signed, reals are `digits.digits`;
//! - a letter glued to a number (`12ab`) is rejected.
//!
//! The first error aborts tokenization.

use super::ast::SourceLocation;
use super::scanner::Scanner;
use super::token::{keyword, Literal, Token, TokenKind, EOF_LEXEME};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unexpected character")]
    UnexpectedCharacter,
    #[error("Unterminated string literal")]
    UnterminatedStringLiteral,
    #[error("Unterminated char literal")]
    UnterminatedCharLiteral,
    #[error("Char literal must contain exactly one character")]
    MalformedCharLiteral,
    #[error("Invalid numeric literal")]
    MalformedNumericLiteral,
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Lexer error at line {}, column {}: {kind} near '{snippet}'",
    .location.line,
    .location.column
)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
    /// Source text of the token being scanned when the error was detected.
    pub snippet: String,
}

pub struct Lexer {
    scanner: Scanner,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(source: &str) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.scanner.is_at_end() {
            self.scanner.begin_token();
            if let Some(token) = self.next_token()? {
                tokens.push(token);
            }
        }

        self.scanner.begin_token();
        tokens.push(Token::new(TokenKind::Eof, EOF_LEXEME, None, self.scanner.span()));

        Ok(tokens)
    }

    /// Scan one token. Whitespace yields `None`.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(ch) = self.scanner.advance() else {
            return Ok(None);
        };

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,

            '<' => {
                if self.scanner.match_char('=') {
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.scanner.match_char('=') {
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            }
            '=' => {
                if self.scanner.match_char('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.scanner.match_char('=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }

            '"' => return self.string_literal().map(Some),
            '\'' => return self.char_literal().map(Some),

            ' ' | '\t' | '\r' | '\n' => return Ok(None),

            c if c.is_ascii_digit() => return self.number_literal().map(Some),
            c if c.is_ascii_alphabetic() || c == '_' => {
                return Ok(Some(self.identifier_or_keyword()))
            }

            _ => return Err(self.error(LexErrorKind::UnexpectedCharacter)),
        };

        Ok(Some(self.make_token(kind, None)))
    }

    fn string_literal(&mut self) -> Result<Token, LexError> {
        loop {
            match self.scanner.peek() {
                None | Some('\n') => {
                    return Err(self.error(LexErrorKind::UnterminatedStringLiteral))
                }
                Some('"') => {
                    self.scanner.advance();
                    break;
                }
                Some(_) => {
                    self.scanner.advance();
                }
            }
        }

        let lexeme = self.scanner.lexeme();
        let value = lexeme[1..lexeme.len() - 1].to_string();
        Ok(self.make_token(TokenKind::StringLiteral, Some(Literal::Str(value))))
    }

    fn char_literal(&mut self) -> Result<Token, LexError> {
        let value = match self.scanner.peek() {
            None => return Err(self.error(LexErrorKind::UnterminatedCharLiteral)),
            Some('\n') => return Err(self.error(LexErrorKind::MalformedCharLiteral)),
            Some('\'') => {
                self.scanner.advance();
                return Err(self.error(LexErrorKind::MalformedCharLiteral));
            }
            Some(ch) => {
                self.scanner.advance();
                ch
            }
        };

        match self.scanner.peek() {
            Some('\'') => {
                self.scanner.advance();
            }
            None => return Err(self.error(LexErrorKind::UnterminatedCharLiteral)),
            Some('\n') => return Err(self.error(LexErrorKind::MalformedCharLiteral)),
            Some(_) => {
                self.scanner.advance();
                return Err(self.error(LexErrorKind::MalformedCharLiteral));
            }
        }

        Ok(self.make_token(TokenKind::CharLiteral, Some(Literal::Char(value))))
    }

    fn number_literal(&mut self) -> Result<Token, LexError> {
        self.consume_digits();

        let is_real = self.scanner.peek() == Some('.')
            && self.scanner.peek_next().is_some_and(|c| c.is_ascii_digit());
        if is_real {
            self.scanner.advance(); // '.'
            self.consume_digits();
        }

        if self.scanner.peek().is_some_and(char::is_alphabetic) {
            self.scanner.advance();
            return Err(self.error(LexErrorKind::MalformedNumericLiteral));
        }

        let text = self.scanner.lexeme();
        let literal = if is_real {
            text.parse::<f64>().map(Literal::Real).ok()
        } else {
            text.parse::<i32>().map(Literal::Int).ok()
        };

        match literal {
            Some(literal) => {
                let kind = if is_real {
                    TokenKind::RealLiteral
                } else {
                    TokenKind::IntLiteral
                };
                Ok(self.make_token(kind, Some(literal)))
            }
            None => Err(self.error(LexErrorKind::MalformedNumericLiteral)),
        }
    }

    fn consume_digits(&mut self) {
        while self.scanner.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.scanner.advance();
        }
    }

    fn identifier_or_keyword(&mut self) -> Token {
        while self
            .scanner
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.scanner.advance();
        }

        match keyword(&self.scanner.lexeme()) {
            Some((kind, value)) => self.make_token(kind, value.map(Literal::Bool)),
            None => self.make_token(TokenKind::Ident, None),
        }
    }

    fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(kind, self.scanner.lexeme(), literal, self.scanner.span())
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            location: self.scanner.token_start(),
            snippet: self.scanner.lexeme(),
        }
    }
}

/// Tokenize `source` in one pass.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
