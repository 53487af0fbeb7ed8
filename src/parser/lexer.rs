//! Lexer (tokenizer) for Mollang source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Lexing is total: every input produces a token stream ending in exactly one
//! [`TokenKind::EndOfInput`] token, so there is no lexer error type.
//!
//! # Token rules
//!
//! - ASCII whitespace separates tokens and is never emitted.
//! - `[` and `]` are single-character [`TokenKind::Symbol`] tokens.
//! - `"` or `'` starts a string that runs verbatim to the next matching quote
//!   (no escapes). A missing closing quote ends the string at end of input.
//! - Anything else is a raw word, classified as keyword, variable name,
//!   integer or (fallback) free-form identifier such as a function name.

use super::ast::SourceLocation;
use super::keywords;
use log::debug;

/// Token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Symbol,
    EndOfInput,
}

/// A classified token together with its exact source text.
///
/// The text of a [`TokenKind::String`] token is the content between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Whitespace as classified by C `isspace` in the "C" locale.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn is_bracket(ch: char) -> bool {
    ch == '[' || ch == ']'
}

/// Classify a raw (unquoted, non-bracket) word.
pub fn classify(word: &str) -> TokenKind {
    if keywords::is_keyword(word) {
        TokenKind::Keyword
    } else if keywords::is_variable_name(word) {
        TokenKind::Identifier
    } else if word.parse::<i32>().is_ok() {
        TokenKind::Number
    } else {
        // Function names (`캠프1`, `캠프하나`, ...) land here.
        TokenKind::Identifier
    }
}

/// Lexer for Mollang source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let loc = self.current_location();
            let Some(ch) = self.peek() else {
                tokens.push(Token::new(TokenKind::EndOfInput, "", loc));
                break;
            };

            if is_bracket(ch) {
                self.advance();
                tokens.push(Token::new(TokenKind::Symbol, ch.to_string(), loc));
            } else if ch == '"' || ch == '\'' {
                self.advance();
                let text = self.string_literal(ch);
                tokens.push(Token::new(TokenKind::String, text, loc));
            } else {
                let word = self.raw_word();
                if word.is_empty() {
                    continue;
                }
                tokens.push(Token::new(classify(&word), word, loc));
            }
        }

        debug!("lexed {} tokens", tokens.len());
        tokens
    }

    /// Scan to the closing `quote`, or to end of input if there is none.
    fn string_literal(&mut self, quote: char) -> String {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == quote {
                break;
            }
            string.push(ch);
        }

        string
    }

    /// Maximal run of non-whitespace, non-bracket characters.
    fn raw_word(&mut self) -> String {
        let mut word = String::new();

        while let Some(ch) = self.peek() {
            if is_space(ch) || is_bracket(ch) {
                break;
            }
            word.push(ch);
            self.advance();
        }

        word
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Convenience wrapper: tokenize `source` in one call.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
