//! Character cursor over the source text
//!
//! [`Scanner`] owns the decoded characters and tracks the absolute index plus
//! line and column. The lexer marks the start of every token with
//! [`Scanner::begin_token`] and later asks for the lexeme and span covering
//! everything consumed since that mark.

use super::ast::SourceLocation;
use super::token::Span;

pub struct Scanner {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    start: usize,
    start_line: usize,
    start_column: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Consume the current character. `None` once the input is exhausted.
    pub fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Consume the current character only if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn begin_token(&mut self) {
        self.start = self.position;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Text consumed since the last [`begin_token`](Self::begin_token).
    pub fn lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    /// Span of the current token. Tokens never cross a line break, so the
    /// end column is the column of the last consumed character.
    pub fn span(&self) -> Span {
        Span {
            line: self.start_line,
            col_start: self.start_column,
            col_end: self.column.saturating_sub(1).max(self.start_column),
        }
    }

    pub fn token_start(&self) -> SourceLocation {
        SourceLocation::new(self.start_line, self.start_column)
    }

    pub fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
