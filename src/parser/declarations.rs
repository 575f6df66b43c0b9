//! Declaration parsing implementation
//!
//! This module handles the top-level structure of igra programs:
//!
//! - Function definitions: `broj zbir(broj a, broj b) { ... }`
//! - Type keywords and array dimensions: `niz n[5][]`
//! - The entry block: `zapocni_igru ... zavrsi_igru;`
//!
//! # Grammar
//!
//! ```text
//! program      ::= function_def* var_decl* entry_block EOF
//! function_def ::= type identifier "(" params? ")" block
//! params       ::= type identifier ("," type identifier)*
//! type         ::= "broj" | "realan" | "slovo" | "tekst" | "pogodak" | "niz"
//! dims         ::= ("[" expression? "]")*
//! entry_block  ::= "zapocni_igru" statement* "zavrsi_igru" ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl<'t> Parser<'t> {
    /// Parse function definition: type name(params) { body }
    pub(crate) fn parse_function_definition(&mut self) -> Result<FunctionDef<'t>, ParseError> {
        let return_type = self.parse_type("Expected return type")?;
        let name = self.expect_identifier("as function name")?;

        self.expect_lparen("after function name")?;

        let params = if self.check(TokenKind::RParen) {
            Vec::new()
        } else {
            self.parse_parameter_list()?
        };

        self.expect_rparen("after parameters")?;

        let body = self.parse_block("before function body")?;

        Ok(FunctionDef {
            name,
            params,
            return_type,
            body: body.statements,
        })
    }

    /// Parse parameter list: type name, type name, ...
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Param<'t>>, ParseError> {
        let mut params = Vec::new();

        loop {
            let param_type = self.parse_type("Expected parameter type")?;
            let name = self.expect_identifier("as parameter name")?;
            params.push(Param { name, param_type });

            if self.match_token(TokenKind::Comma).is_none() {
                break;
            }
        }

        Ok(params)
    }

    /// Parse a single type keyword into a scalar (rank 0) type.
    pub(crate) fn parse_type(&mut self, message: &str) -> Result<Type<'t>, ParseError> {
        match TypeKind::from_keyword(self.peek().kind) {
            Some(kind) => Ok(Type::new(kind, self.advance())),
            None => Err(self.error_at_current(message)),
        }
    }

    /// Parse array dimensions: [size][]...
    /// An empty pair of brackets is an unsized dimension.
    pub(crate) fn parse_array_dims(&mut self) -> Result<Vec<Option<Expr<'t>>>, ParseError> {
        let mut dims = Vec::new();

        while self.match_token(TokenKind::LBracket).is_some() {
            if self.match_token(TokenKind::RBracket).is_some() {
                dims.push(None);
            } else {
                dims.push(Some(self.parse_expression()?));
                self.expect_token(TokenKind::RBracket, "Expected ']' after array dimension")?;
            }
        }

        Ok(dims)
    }

    /// Parse the entry block: zapocni_igru statements zavrsi_igru ;
    pub(crate) fn parse_entry_block(&mut self) -> Result<Block<'t>, ParseError> {
        let open = self.expect_token(
            TokenKind::Begin,
            "Expected 'zapocni_igru' to open the entry block",
        )?;

        let statements = self.parse_block_statements(TokenKind::End)?;

        self.expect_token(TokenKind::End, "Expected 'zavrsi_igru' to close the entry block")?;
        self.expect_semicolon("after 'zavrsi_igru'")?;

        Ok(Block { open, statements })
    }
}
