//! Expression parsing implementation
//!
//! Mollang has a single precedence level: `a 덧셈 b 곱 c` is `((a + b) * c)`.
//!
//! ```text
//! expr ::= term (operator term)*
//! term ::= number | string | variable | '뭐먹' | constant-word
//! ```
//!
//! The operator loop only continues on keyword tokens, and stops at the
//! keywords that begin a statement, so one statement ends where the next
//! begins without any separator.

use crate::parser::ast::*;
use crate::parser::keywords;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser, MAX_EXPRESSION_OPERATORS};

impl Parser {
    /// Parse a left-folded chain of binary operations
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        let mut left = self.parse_term()?;
        let mut operators = 0;

        while self.peek().kind == TokenKind::Keyword
            && !keywords::is_statement_keyword(&self.peek().text)
        {
            let token = self.advance("expecting an operator")?;
            operators += 1;
            if operators > MAX_EXPRESSION_OPERATORS {
                return Err(ParseError::ExpressionTooLong {
                    text: token.text,
                    limit: MAX_EXPRESSION_OPERATORS,
                    location: token.location,
                });
            }
            let op = keywords::operator(&token.text).ok_or_else(|| ParseError::UnknownOperator {
                text: token.text.clone(),
                location: token.location,
            })?;
            let right = self.parse_term()?;

            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: token.location,
            };
        }

        Ok(left)
    }

    /// Parse a single-token expression term
    fn parse_term(&mut self) -> Result<AstNode, ParseError> {
        let token = self.advance("expecting an expression")?;
        let location = token.location;

        match token.kind {
            TokenKind::Number => {
                let value = token.text.parse::<i32>().map_err(|_| ParseError::InvalidExpressionTerm {
                    text: token.text.clone(),
                    location,
                })?;
                Ok(AstNode::NumberLiteral { value, location })
            }
            TokenKind::String => Ok(AstNode::StringLiteral {
                value: token.text,
                location,
            }),
            TokenKind::Identifier => Ok(AstNode::Variable {
                name: token.text,
                location,
            }),
            TokenKind::Keyword if token.text == keywords::INPUT => Ok(AstNode::Input { location }),
            TokenKind::Keyword => match keywords::constant(&token.text) {
                Some(payload) => Ok(AstNode::StringLiteral {
                    value: payload.to_string(),
                    location,
                }),
                None => Err(ParseError::InvalidExpressionTerm {
                    text: token.text,
                    location,
                }),
            },
            TokenKind::Symbol | TokenKind::EndOfInput => Err(ParseError::InvalidExpressionTerm {
                text: token.text,
                location,
            }),
        }
    }
}
