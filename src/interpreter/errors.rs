//! Runtime error types for the Mollang interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to parse errors or toolchain errors).
//!
//! All runtime errors are fatal: they halt execution. The generated C++ program
//! raises the same conditions as `MolRuntimeError`.

use crate::parser::ast::{BinOp, SourceLocation};
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Operator applied to a combination of value types it does not support
    #[error("Runtime error at {location}: unsupported operand types for {op}: {left} and {right}")]
    UnsupportedOperands {
        op: BinOp,
        left: &'static str,
        right: &'static str,
        location: SourceLocation,
    },

    /// Integer overflow in arithmetic operation
    #[error("Runtime error at {location}: integer overflow in {op}")]
    IntegerOverflow { op: BinOp, location: SourceLocation },

    /// `입`/`몰` condition that is not a comparison result
    #[error("Runtime error at {location}: condition is not a boolean (got {got})")]
    NonBooleanCondition {
        got: &'static str,
        location: SourceLocation,
    },

    /// Undefined function call
    #[error("Runtime error at {location}: function '{name}' is not defined")]
    UndefinedFunction {
        name: String,
        location: SourceLocation,
    },

    #[error("Runtime error at {location}: call depth exceeded {limit}")]
    CallDepthExceeded {
        limit: usize,
        location: SourceLocation,
    },

    /// Node in a position the parser never produces
    #[error("Runtime error at {location}: {node} cannot appear here")]
    MisplacedNode {
        node: &'static str,
        location: SourceLocation,
    },

    /// Console read or write failed
    #[error("Runtime error at {location}: console I/O failed: {message}")]
    Io {
        message: String,
        location: SourceLocation,
    },
}

impl RuntimeError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            RuntimeError::UnsupportedOperands { location, .. }
            | RuntimeError::IntegerOverflow { location, .. }
            | RuntimeError::NonBooleanCondition { location, .. }
            | RuntimeError::UndefinedFunction { location, .. }
            | RuntimeError::CallDepthExceeded { location, .. }
            | RuntimeError::MisplacedNode { location, .. }
            | RuntimeError::Io { location, .. } => location,
        }
    }
}
