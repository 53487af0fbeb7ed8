//! Mollang source code parser
//!
//! This module transforms Mollang source text into an Abstract Syntax Tree (AST):
//! - [`keywords`]: the fixed vocabulary and the variable naming rule
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with `statements` and `expressions`
//!   extending the [`parse::Parser`]
//! - [`ast`]: AST node definitions
//!
//! # Language summary
//!
//! - Statements: assignment, print, `if` (no `else`), `while`, zero-argument
//!   function definition/call, return
//! - Expressions: integers, strings, variables, input, six constant words,
//!   and five binary operators folded left to right at one precedence level
//! - Blocks are delimited by `[` and `]`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
pub mod keywords;
pub mod lexer;
pub mod parse;

mod expressions;
mod statements;
