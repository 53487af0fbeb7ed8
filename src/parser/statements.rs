//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= variable '은' expr
//!             | '스크럼' expr
//!             | '입' expr block
//!             | '몰' expr block
//!             | function-name block      (definition, top level only)
//!             | function-name            (call)
//!             | '퇴근' expr
//! block     ::= '[' statement* ']'
//! ```
//!
//! There is no `else`; an `if` only has a body.

use crate::parser::ast::*;
use crate::parser::keywords;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser, MAX_BLOCK_DEPTH};

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        let token = self.peek().clone();
        let loc = token.location;

        match token.kind {
            TokenKind::EndOfInput => return Err(self.unexpected_eof("expecting a statement")),
            TokenKind::Identifier if keywords::is_variable_name(&token.text) => {
                self.advance("expecting a variable")?;
                self.expect_token(TokenKind::Keyword, keywords::ASSIGN, "expecting '은'")?;
                let expr = self.parse_expression()?;
                return Ok(AstNode::Assign {
                    name: token.text,
                    expr: Box::new(expr),
                    location: loc,
                });
            }
            TokenKind::String | TokenKind::Symbol | TokenKind::Number => {
                return Err(ParseError::InvalidStatementStart {
                    text: token.text,
                    location: loc,
                });
            }
            _ => {}
        }

        match token.text.as_str() {
            keywords::PRINT => {
                self.advance("expecting '스크럼'")?;
                let expr = self.parse_expression()?;
                Ok(AstNode::Print {
                    expr: Box::new(expr),
                    location: loc,
                })
            }
            keywords::IF => {
                self.advance("expecting '입'")?;
                let condition = Box::new(self.parse_expression()?);
                let body = self.parse_block()?;
                Ok(AstNode::If {
                    condition,
                    body,
                    location: loc,
                })
            }
            keywords::WHILE => {
                self.advance("expecting '몰'")?;
                let condition = Box::new(self.parse_expression()?);
                let body = self.parse_block()?;
                Ok(AstNode::While {
                    condition,
                    body,
                    location: loc,
                })
            }
            keywords::RETURN => {
                self.advance("expecting '퇴근'")?;
                let expr = self.parse_expression()?;
                Ok(AstNode::Return {
                    expr: Box::new(expr),
                    location: loc,
                })
            }
            name if keywords::is_function_name(name) => self.parse_function(),
            _ => Err(ParseError::InvalidStatementStart {
                text: token.text.clone(),
                location: loc,
            }),
        }
    }

    /// Parse a function definition (name followed by a block) or a call (bare name)
    fn parse_function(&mut self) -> Result<AstNode, ParseError> {
        let token = self.advance("expecting a function name")?;

        if !self.peek().is(TokenKind::Symbol, keywords::BLOCK_OPEN) {
            return Ok(AstNode::FuncCall {
                name: token.text,
                location: token.location,
            });
        }

        if self.block_depth > 0 {
            return Err(ParseError::NestedFunction {
                text: token.text,
                location: token.location,
            });
        }

        let body = self.parse_block()?;
        Ok(AstNode::FuncDef {
            name: token.text,
            body,
            location: token.location,
        })
    }

    /// Parse `[` statement* `]`
    pub(crate) fn parse_block(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let open = self.expect_token(TokenKind::Symbol, keywords::BLOCK_OPEN, "expecting '['")?;
        if self.block_depth >= MAX_BLOCK_DEPTH {
            return Err(ParseError::NestingTooDeep {
                text: open.text,
                limit: MAX_BLOCK_DEPTH,
                location: open.location,
            });
        }
        self.block_depth += 1;

        let mut statements = Vec::new();
        loop {
            let next = self.peek();
            if next.is_end() {
                return Err(self.unexpected_eof("expecting ']'"));
            }
            if next.is(TokenKind::Symbol, keywords::BLOCK_CLOSE) {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        self.expect_token(TokenKind::Symbol, keywords::BLOCK_CLOSE, "expecting ']'")?;
        self.block_depth -= 1;
        Ok(statements)
    }
}
