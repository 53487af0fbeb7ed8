//! Source-to-source translation
//!
//! [`translate`] runs the whole front end and back end on one source text:
//! lex, parse, resolve symbols, emit C++. Every call starts from fresh symbol
//! tables, so translating the same source twice yields identical output.

use crate::codegen::{resolve, CodeGenerator, CodegenError, Symbols};
use crate::parser::ast::Program;
use crate::parser::parse::{parse, ParseError};
use log::info;
use thiserror::Error;

/// Any error that stops a translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// A parsed and resolved program, ready for either back end.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub program: Program,
    pub symbols: Symbols,
}

impl Compilation {
    /// Parse `source` and resolve its names.
    pub fn new(source: &str) -> Result<Self, CompileError> {
        let program = parse(source)?;
        let symbols = resolve(&program);
        Ok(Self { program, symbols })
    }

    /// Emit the C++ translation unit.
    pub fn to_cpp(&self) -> Result<String, CompileError> {
        let code = CodeGenerator::new(&self.symbols).generate(&self.program)?;
        Ok(code)
    }
}

/// Translate Mollang source text into a C++17 program.
pub fn translate(source: &str) -> Result<String, CompileError> {
    let compilation = Compilation::new(source)?;
    info!(
        "translating {} top-level statements ({} variables, {} functions)",
        compilation.program.nodes.len(),
        compilation.symbols.variables.len(),
        compilation.symbols.functions.len()
    );
    compilation.to_cpp()
}
