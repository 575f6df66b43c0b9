//! Expression parsing implementation
//!
//! This module handles parsing of igra expressions using one function per
//! precedence level and recursive descent for the primary forms.
//!
//! # Supported Expressions
//!
//! - Literals: integers, reals, characters, strings, `tacno`/`netacno`
//! - Identifiers, indexing `a[i][j]` and calls `f(x, y)`
//! - Binary operators: arithmetic, comparison, `i`, `ili`
//! - Unary operators: `-`, `!`
//! - Parenthesized sub-expressions
//!
//! # Precedence
//!
//! From lowest to highest:
//!
//! ```text
//! ili  <  i  <  == !=  <  < <= > >=  <  + -  <  * / %  <  unary ! -  <  primary
//! ```
//!
//! Every binary level is left-associative: operands are folded into a
//! [`Expr::Binary`] while the lookahead belongs to the level's operator set.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::{Token, TokenKind};

type LevelParser<'t> = fn(&mut Parser<'t>) -> Result<Expr<'t>, ParseError>;

impl<'t> Parser<'t> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr<'t>, ParseError> {
        self.nested(Self::parse_logical_or)
    }

    /// Parse logical OR (ili)
    fn parse_logical_or(&mut self) -> Result<Expr<'t>, ParseError> {
        self.parse_binary_level(&[TokenKind::Or], Self::parse_logical_and)
    }

    /// Parse logical AND (i)
    fn parse_logical_and(&mut self) -> Result<Expr<'t>, ParseError> {
        self.parse_binary_level(&[TokenKind::And], Self::parse_equality)
    }

    /// Parse equality (==, !=)
    fn parse_equality(&mut self) -> Result<Expr<'t>, ParseError> {
        self.parse_binary_level(&[TokenKind::EqEq, TokenKind::NotEq], Self::parse_relational)
    }

    /// Parse relational (<, <=, >, >=)
    fn parse_relational(&mut self) -> Result<Expr<'t>, ParseError> {
        self.parse_binary_level(
            &[TokenKind::Lt, TokenKind::Le, TokenKind::Gt, TokenKind::Ge],
            Self::parse_additive,
        )
    }

    /// Parse additive (+, -)
    fn parse_additive(&mut self) -> Result<Expr<'t>, ParseError> {
        self.parse_binary_level(&[TokenKind::Plus, TokenKind::Minus], Self::parse_multiplicative)
    }

    /// Parse multiplicative (*, /, %)
    fn parse_multiplicative(&mut self) -> Result<Expr<'t>, ParseError> {
        self.parse_binary_level(
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
            Self::parse_unary,
        )
    }

    /// Fold `next (op next)*` into a left-leaning chain of binary nodes.
    fn parse_binary_level(
        &mut self,
        operators: &[TokenKind],
        next: LevelParser<'t>,
    ) -> Result<Expr<'t>, ParseError> {
        let mut left = next(self)?;

        while let Some((op, op_token)) = self.match_operator(operators) {
            let right = next(self)?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                op_token,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn match_operator(&mut self, operators: &[TokenKind]) -> Option<(BinOp, &'t Token)> {
        let kind = self.peek().kind;
        if !operators.contains(&kind) {
            return None;
        }
        let op = BinOp::from_token(kind)?;
        Some((op, self.advance()))
    }

    /// Parse unary operators (-, !)
    fn parse_unary(&mut self) -> Result<Expr<'t>, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Minus => UnOp::Neg,
            TokenKind::Bang => UnOp::Not,
            _ => return self.parse_primary(),
        };

        let op_token = self.advance();
        let right = Box::new(self.nested(Self::parse_unary)?);

        Ok(Expr::Unary {
            op,
            op_token,
            right,
        })
    }

    /// Parse primary expressions (literals, identifiers, calls, indexing, parentheses)
    fn parse_primary(&mut self) -> Result<Expr<'t>, ParseError> {
        let token = self.peek();

        match token.kind {
            TokenKind::IntLiteral
            | TokenKind::RealLiteral
            | TokenKind::CharLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteral => {
                let value = token
                    .literal
                    .as_ref()
                    .ok_or_else(|| self.error_at_current("Literal token without a value"))?;
                self.advance();
                Ok(Expr::Literal { token, value })
            }
            TokenKind::Ident => {
                let name = self.advance();
                if self.check(TokenKind::LParen) {
                    self.parse_call(name)
                } else if self.check(TokenKind::LBracket) {
                    Ok(Expr::Index {
                        name,
                        indices: self.parse_indices()?,
                    })
                } else {
                    Ok(Expr::Ident { name })
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = Box::new(self.parse_expression()?);
                self.expect_rparen("after expression")?;
                Ok(Expr::Grouping { inner })
            }
            _ => Err(self.error_at_current("Expected expression")),
        }
    }

    /// Parse a call whose callee has already been consumed: (args)
    pub(crate) fn parse_call(&mut self, callee: &'t Token) -> Result<Expr<'t>, ParseError> {
        self.expect_lparen("after function name")?;

        let args = if self.check(TokenKind::RParen) {
            Vec::new()
        } else {
            self.parse_argument_list()?
        };

        self.expect_rparen("after arguments")?;

        Ok(Expr::Call { callee, args })
    }

    /// Parse function call arguments
    fn parse_argument_list(&mut self) -> Result<Vec<Expr<'t>>, ParseError> {
        let mut args = vec![self.parse_expression()?];

        while self.match_token(TokenKind::Comma).is_some() {
            args.push(self.parse_expression()?);
        }

        Ok(args)
    }

    /// Parse one or more index expressions: [i][j]...
    pub(crate) fn parse_indices(&mut self) -> Result<Vec<Expr<'t>>, ParseError> {
        let mut indices = Vec::new();

        while self.match_token(TokenKind::LBracket).is_some() {
            indices.push(self.parse_expression()?);
            self.expect_token(TokenKind::RBracket, "Expected ']' after index")?;
        }

        Ok(indices)
    }
}
