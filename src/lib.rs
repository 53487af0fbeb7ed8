//! # Introduction
//!
//! Mollang is a tiny Korean-keyword language. This crate translates a Mollang
//! program into a self-contained C++17 program and, optionally, builds it with
//! a native C++ compiler. A tree-walking interpreter with the same semantics
//! runs programs directly for quick checks and tests.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Resolver → Emitter → C++ → g++ → executable
//!                                    └──────→ Interpreter
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST.
//! 2. [`codegen`]: assigns generated identifiers, then emits C++ together
//!    with the `MolObject` runtime.
//! 3. [`compiler`]: runs parser and code generator on one source text.
//! 4. [`interpreter`]: executes an AST directly.
//! 5. [`toolchain`]: file naming and the native compiler invocation.
//!
//! ## Language at a glance
//!
//! ```text
//! 밥 은 0
//! 몰 밥 작 3 [
//!     스크럼 밥
//!     밥 은 밥 덧셈 1
//! ]
//! ```
//!
//! Variables are `밥`, `바압`, `바아압`, ...; function names start with `캠프`.

pub mod codegen;
pub mod compiler;
pub mod interpreter;
pub mod parser;
pub mod toolchain;

pub use compiler::{translate, CompileError};

/// Any error from compiling or running a program in-process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] interpreter::RuntimeError),
}
