//! C++ code generation
//!
//! Lowering happens in two passes over the AST:
//! - [`symbols`]: assigns every variable and function a generated identifier
//!   in order of first appearance
//! - [`emit`]: writes the C++ translation unit, only looking names up
//!
//! [`preamble`] holds the runtime support code (`MolObject` and helpers)
//! that every generated program starts with.

pub mod emit;
pub mod preamble;
pub mod symbols;

pub use emit::{CodeGenerator, CodegenError};
pub use symbols::{resolve, Symbols};
