//! Mollang interpreter
//!
//! This module provides a direct AST interpreter used by `mollang run`:
//! - [`engine`]: Main interpreter with AST execution
//! - [`value`]: Runtime values
//! - [`ops`]: Binary operator semantics
//! - [`terminal`]: Console abstraction and an in-memory mock
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! Functions are hoisted, every variable is global, and values are dynamic.
//! Behavior matches the generated C++ program, including which operand
//! combinations fail at run time.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod ops;
pub mod terminal;
pub mod value;

pub use engine::{run_source, Interpreter};
pub use errors::RuntimeError;
pub use terminal::{Console, MockTerminal, StdConsole};
pub use value::Value;
