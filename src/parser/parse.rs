//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser with one token of lookahead:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: statements and blocks
//! - `expressions`: flat, left-folded binary expressions and terms
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use log::debug;
use thiserror::Error;

/// Most binary operators one expression may chain.
///
/// Later passes walk expressions recursively, and C++ compilers limit how
/// deeply parentheses nest (clang's default is 256).
pub const MAX_EXPRESSION_OPERATORS: usize = 256;

/// Most `[` blocks that may be open at once.
pub const MAX_BLOCK_DEPTH: usize = 128;

/// Parser error type
///
/// Every variant carries the text of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parse error at {location}: unexpected end of input while {context}")]
    UnexpectedEof {
        context: String,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: invalid statement start '{text}'")]
    InvalidStatementStart {
        text: String,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: invalid expression term '{text}'")]
    InvalidExpressionTerm {
        text: String,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: unknown operator '{text}'")]
    UnknownOperator {
        text: String,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: expected '{expected}', found '{text}'")]
    ExpectedToken {
        expected: String,
        text: String,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: function '{text}' must be defined at top level")]
    NestedFunction {
        text: String,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: expression has more than {limit} operators (at '{text}')")]
    ExpressionTooLong {
        text: String,
        limit: usize,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: blocks nested more than {limit} deep (at '{text}')")]
    NestingTooDeep {
        text: String,
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedEof { location, .. }
            | ParseError::InvalidStatementStart { location, .. }
            | ParseError::InvalidExpressionTerm { location, .. }
            | ParseError::UnknownOperator { location, .. }
            | ParseError::ExpectedToken { location, .. }
            | ParseError::NestedFunction { location, .. }
            | ParseError::ExpressionTooLong { location, .. }
            | ParseError::NestingTooDeep { location, .. } => *location,
        }
    }
}

/// Recursive descent parser for Mollang
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Number of enclosing blocks; function definitions are only legal at depth 0.
    pub(crate) block_depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::from_tokens(Lexer::new(source).tokenize())
    }

    /// Build a parser over an already lexed token stream.
    ///
    /// A missing end-of-input marker is appended so the stream is always terminated.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_end) {
            let location = tokens.last().map(|t| t.location).unwrap_or_default();
            tokens.push(Token::new(TokenKind::EndOfInput, "", location));
        }
        Self {
            tokens,
            position: 0,
            block_depth: 0,
        }
    }

    /// Parse the entire program (top-level statements and function definitions)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let node = self.parse_statement()?;
            program.nodes.push(node);
        }

        debug!("parsed {} top-level nodes", program.nodes.len());
        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_end()
    }

    pub(crate) fn peek(&self) -> &Token {
        // The stream always ends with EndOfInput and `advance` never moves past it.
        &self.tokens[self.position]
    }

    /// Consume the current token.
    ///
    /// Reaching end of input here is an error; `context` describes what was expected.
    pub(crate) fn advance(&mut self, context: &str) -> Result<Token, ParseError> {
        let token = self.peek().clone();
        if token.is_end() {
            return Err(self.unexpected_eof(context));
        }
        self.position += 1;
        Ok(token)
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        text: &str,
        context: &str,
    ) -> Result<Token, ParseError> {
        let token = self.advance(context)?;
        if token.is(kind, text) {
            Ok(token)
        } else {
            Err(ParseError::ExpectedToken {
                expected: text.to_string(),
                text: token.text,
                location: token.location,
            })
        }
    }

    pub(crate) fn unexpected_eof(&self, context: &str) -> ParseError {
        ParseError::UnexpectedEof {
            context: context.to_string(),
            location: self.peek().location,
        }
    }
}

/// Parse `source` into a [`Program`].
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_program() {
        let program = parse("  \n ").unwrap();
        assert!(program.nodes.is_empty());
    }

    #[test]
    fn test_parse_assignment_and_print() {
        let program = parse("밥 은 3\n스크럼 밥").unwrap();

        assert_eq!(program.nodes.len(), 2);
        match &program.nodes[0] {
            AstNode::Assign { name, expr, .. } => {
                assert_eq!(name, "밥");
                assert!(matches!(**expr, AstNode::NumberLiteral { value: 3, .. }));
            }
            other => panic!("Expected assignment, got {:?}", other),
        }
        match &program.nodes[1] {
            AstNode::Print { expr, .. } => {
                assert!(matches!(&**expr, AstNode::Variable { name, .. } if name == "밥"));
            }
            other => panic!("Expected print, got {:?}", other),
        }
    }

    #[test]
    fn test_from_tokens_terminates_stream() {
        let tokens = vec![Token::new(TokenKind::Keyword, "스크럼", SourceLocation::new(1, 1))];
        let err = Parser::from_tokens(tokens).parse_program().unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_error_reports_token_and_location() {
        let err = parse("밥 은 1\n  2 곱 2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidStatementStart {
                text: "2".to_string(),
                location: SourceLocation::new(2, 3),
            }
        );
        assert_eq!(
            err.to_string(),
            "Parse error at line 2, column 3: invalid statement start '2'"
        );
    }
}
