//! Statement parsing implementation
//!
//! This module handles parsing of all igra statement types:
//!
//! - Variable declarations: `moj broj x = 42;`, `moje slovo c;`
//! - Control flow: `ako`/`inace`, `radi`
//! - Jump statements: `vrati`
//! - Built-in calls: `napisi(x);`, `upisi(x);`, `enkriptuj(x);`, `dekriptuj(x);`
//! - Compound statements: `{ ... }`
//! - Assignments and call statements
//!
//! # Grammar
//!
//! ```text
//! statement  ::= var_decl | if_stmt | while_stmt | return_stmt
//!              | builtin_call | block | assign | call_stmt | ";"
//! var_decl   ::= ("moj" type | "moje" "slovo") identifier dims ("=" expression)? ";"
//! if_stmt    ::= "ako" "(" expression ")" block ("inace" block)?
//! while_stmt ::= "radi" "(" expression ")" statement
//! assign     ::= identifier ("[" expression "]")* "=" expression ";"
//! call_stmt  ::= identifier "(" arguments? ")" ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl<'t> Parser<'t> {
    /// Parse a braced block: { statements }
    pub(crate) fn parse_block(&mut self, ctx: &str) -> Result<Block<'t>, ParseError> {
        let open = self.expect_lbrace(ctx)?;
        let statements = self.parse_block_statements(TokenKind::RBrace)?;
        self.expect_rbrace("after block")?;
        Ok(Block { open, statements })
    }

    /// Parse statements until `close` or end of input, leaving `close` unconsumed.
    pub(crate) fn parse_block_statements(
        &mut self,
        close: TokenKind,
    ) -> Result<Vec<Stmt<'t>>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(close) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt<'t>, ParseError> {
        self.nested(Self::parse_statement_kind)
    }

    fn parse_statement_kind(&mut self) -> Result<Stmt<'t>, ParseError> {
        match self.peek().kind {
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block("to open block")?)),
            TokenKind::Var | TokenKind::VarChar => {
                Ok(Stmt::VarDecl(self.parse_variable_declaration()?))
            }
            TokenKind::Print | TokenKind::Read | TokenKind::Encrypt | TokenKind::Decrypt => {
                self.parse_builtin_call()
            }
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Semicolon => Ok(Stmt::Empty {
                semicolon: self.advance(),
            }),
            TokenKind::Ident => self.parse_assignment_or_call(),
            _ => Err(self.error_at_current("Expected statement")),
        }
    }

    /// Parse variable declaration: moj type name dims (= init)? ;
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<VarDecl<'t>, ParseError> {
        let keyword = self.advance();

        let var_type = if keyword.kind == TokenKind::VarChar {
            let token = self.expect_token(TokenKind::Char, "Expected 'slovo' after 'moje'")?;
            Type::new(TypeKind::Char, token)
        } else {
            self.parse_type("Expected type after 'moj'")?
        };

        let name = self.expect_identifier("as variable name")?;
        let var_type = var_type.with_dims(self.parse_array_dims()?);

        let init = if self.match_token(TokenKind::Assign).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_semicolon("after variable declaration")?;

        Ok(VarDecl {
            keyword,
            var_type,
            name,
            init,
        })
    }

    /// Parse a built-in call statement: napisi(expr); upisi(name); ...
    fn parse_builtin_call(&mut self) -> Result<Stmt<'t>, ParseError> {
        let keyword = self.advance();
        let ctx = format!("after '{}'", keyword.lexeme);

        self.expect_lparen(&ctx)?;

        // upisi reads into a plain variable
        let arg = if keyword.kind == TokenKind::Read {
            Expr::Ident {
                name: self.expect_identifier(&format!("in '{}'", keyword.lexeme))?,
            }
        } else {
            self.parse_expression()?
        };

        self.expect_rparen("after argument")?;
        self.expect_semicolon(&format!("after '{}' call", keyword.lexeme))?;

        Ok(Stmt::Expression {
            expr: Expr::Call {
                callee: keyword,
                args: vec![arg],
            },
        })
    }

    /// Parse if statement: ako (cond) { ... } inace { ... }
    fn parse_if_statement(&mut self) -> Result<Stmt<'t>, ParseError> {
        let keyword = self.advance();

        self.expect_lparen("after 'ako'")?;
        let condition = self.parse_expression()?;
        self.expect_rparen("after condition")?;

        let then_branch = self.parse_block("after condition")?;

        let else_branch = if self.match_token(TokenKind::Else).is_some() {
            Some(self.parse_block("after 'inace'")?)
        } else {
            None
        };

        Ok(Stmt::If {
            keyword,
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parse while statement: radi (cond) statement
    fn parse_while_statement(&mut self) -> Result<Stmt<'t>, ParseError> {
        let keyword = self.advance();

        self.expect_lparen("after 'radi'")?;
        let condition = self.parse_expression()?;
        self.expect_rparen("after condition")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While {
            keyword,
            condition,
            body,
        })
    }

    /// Parse return statement: vrati expr ;
    fn parse_return_statement(&mut self) -> Result<Stmt<'t>, ParseError> {
        let keyword = self.advance();
        let value = self.parse_expression()?;
        self.expect_semicolon("after return value")?;

        Ok(Stmt::Return { keyword, value })
    }

    /// Parse a statement starting with an identifier:
    /// name[i][j] = expr;  or  name(args);
    fn parse_assignment_or_call(&mut self) -> Result<Stmt<'t>, ParseError> {
        let name = self.advance();

        if self.check(TokenKind::LParen) {
            let expr = self.parse_call(name)?;
            self.expect_semicolon("after call")?;
            return Ok(Stmt::Expression { expr });
        }

        let target = if self.check(TokenKind::LBracket) {
            Expr::Index {
                name,
                indices: self.parse_indices()?,
            }
        } else {
            Expr::Ident { name }
        };

        if self.match_token(TokenKind::Assign).is_none() {
            let message = match target {
                Expr::Index { .. } => "Expected '=' after indexed target",
                _ => "Expected '=' or '(' after identifier",
            };
            return Err(self.error_at_current(message));
        }

        let value = self.parse_expression()?;
        self.expect_semicolon("after assignment")?;

        Ok(Stmt::Assign { target, value })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::{ParseError, Parser};
    use crate::parser::token::{Token, TokenKind};

    fn statement(tokens: &[Token]) -> Result<Stmt<'_>, ParseError> {
        Parser::new(tokens).parse_single_statement()
    }

    #[test]
    fn test_declaration_with_initializer() {
        let tokens = tokenize("moj realan r = 1.5;").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::VarDecl(decl) => {
                assert_eq!(decl.keyword.kind, TokenKind::Var);
                assert_eq!(decl.var_type.kind, TypeKind::Real);
                assert_eq!(decl.name.lexeme, "r");
                assert!(decl.init.is_some());
            }
            other => panic!("Expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_moje_requires_slovo() {
        let tokens = tokenize("moje broj x;").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Int);
        assert!(err.message.starts_with("Expected 'slovo' after 'moje'"));
    }

    #[test]
    fn test_if_else() {
        let tokens = tokenize("ako (x == 1) { napisi(x); } inace { x = 0; }").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                assert!(matches!(condition, Expr::Binary { op: BinOp::Eq, .. }));
                assert_eq!(then_branch.statements.len(), 1);
                let else_branch = else_branch.expect("else branch");
                assert!(matches!(else_branch.statements[0], Stmt::Assign { .. }));
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_if_requires_braces() {
        let tokens = tokenize("ako (x) napisi(x);").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Print);
        assert!(err.message.starts_with("Expected '{' after condition"));
    }

    #[test]
    fn test_missing_rparen_after_condition() {
        let tokens = tokenize("ako (x > 0 { }").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::LBrace);
        assert!(err.message.starts_with("Expected ')' after condition"));
    }

    #[test]
    fn test_while_with_single_statement_body() {
        let tokens = tokenize("radi (k < 10) k = k + 1;").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::While { body, .. } => assert!(matches!(*body, Stmt::Assign { .. })),
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_while_with_block_body() {
        let tokens = tokenize("radi (tacno) { ; }").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::While { body, .. } => match *body {
                Stmt::Block(block) => {
                    assert!(matches!(block.statements[0], Stmt::Empty { .. }))
                }
                other => panic!("Expected block body, got {:?}", other),
            },
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_return_requires_value() {
        let tokens = tokenize("vrati;").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_read_takes_identifier() {
        let tokens = tokenize("upisi(ime);").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::Expression {
                expr: Expr::Call { callee, args },
            } => {
                assert_eq!(callee.kind, TokenKind::Read);
                assert!(matches!(args[..], [Expr::Ident { .. }]));
            }
            other => panic!("Expected call statement, got {:?}", other),
        }

        let tokens = tokenize("upisi(1 + 2);").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert!(err.message.starts_with("Expected identifier in 'upisi'"));
    }

    #[test]
    fn test_encrypt_takes_expression() {
        let tokens = tokenize("enkriptuj(poruka + \"!\");").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::Expression {
                expr: Expr::Call { callee, args },
            } => {
                assert_eq!(callee.lexeme, "enkriptuj");
                assert!(matches!(args[0], Expr::Binary { op: BinOp::Add, .. }));
            }
            other => panic!("Expected call statement, got {:?}", other),
        }
    }

    #[test]
    fn test_indexed_assignment() {
        let tokens = tokenize("m[r][j + 1] = 0;").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::Assign {
                target: Expr::Index { name, indices },
                ..
            } => {
                assert_eq!(name.lexeme, "m");
                assert_eq!(indices.len(), 2);
            }
            other => panic!("Expected indexed assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_call_statement() {
        let tokens = tokenize("crtaj(1, x);").unwrap();
        match statement(&tokens).unwrap() {
            Stmt::Expression {
                expr: Expr::Call { callee, args },
            } => {
                assert_eq!(callee.lexeme, "crtaj");
                assert_eq!(args.len(), 2);
            }
            other => panic!("Expected call statement, got {:?}", other),
        }
    }

    #[test]
    fn test_identifier_needs_continuation() {
        let tokens = tokenize("x + 1;").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Plus);
        assert!(err.message.starts_with("Expected '=' or '('"));

        let tokens = tokenize("a[0](1);").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::LParen);
        assert!(err.message.starts_with("Expected '=' after indexed target"));
    }

    #[test]
    fn test_unexpected_statement_start() {
        let tokens = tokenize("5;").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(
            err.message,
            "Expected statement, found integer literal 5".to_string()
        );
    }

    #[test]
    fn test_unclosed_block_reports_eof() {
        let tokens = tokenize("{ x = 1;").unwrap();
        let err = statement(&tokens).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Eof);
        assert!(err.message.starts_with("Expected '}' after block"));
    }
}
