//! C++ emission
//!
//! [`CodeGenerator`] lowers a resolved [`Program`] to a single C++17
//! translation unit, in this order:
//!
//! 1. the runtime preamble ([`super::preamble`])
//! 2. one prototype per function symbol
//! 3. one global `MolObject` per variable symbol
//! 4. every function definition, hoisted out of the top-level statement list
//! 5. `main`, running the remaining top-level statements in source order
//!
//! The generator never inserts into the symbol tables; a name missing from
//! them is reported as a [`CodegenError`].

use super::preamble::{MAIN_EPILOGUE, MAIN_PROLOGUE, RUNTIME_PREAMBLE};
use super::symbols::Symbols;
use crate::parser::ast::{AstNode, Program, SourceLocation};
use log::debug;
use std::fmt::Write;
use thiserror::Error;

/// Errors raised while emitting code.
///
/// These only occur for trees the parser cannot produce, or when the symbol
/// tables were not built from the program being emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("Codegen error at {location}: variable '{name}' has no generated identifier")]
    UnresolvedVariable {
        name: String,
        location: SourceLocation,
    },

    #[error("Codegen error at {location}: function '{name}' has no generated identifier")]
    UnresolvedFunction {
        name: String,
        location: SourceLocation,
    },

    #[error("Codegen error at {location}: {node} cannot appear here")]
    MisplacedNode {
        node: &'static str,
        location: SourceLocation,
    },
}

const INDENT: &str = "    ";

/// Emits C++ source text for one program
pub struct CodeGenerator<'a> {
    symbols: &'a Symbols,
    out: String,
    depth: usize,
    /// True while lowering a function body; `return` means different things inside and outside.
    in_function: bool,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(symbols: &'a Symbols) -> Self {
        Self {
            symbols,
            out: String::new(),
            depth: 0,
            in_function: false,
        }
    }

    /// Generate the complete translation unit for `program`.
    pub fn generate(mut self, program: &Program) -> Result<String, CodegenError> {
        self.out.push_str(RUNTIME_PREAMBLE);
        self.out.push('\n');

        for (_, generated) in self.symbols.functions.iter() {
            let _ = writeln!(self.out, "MolObject {}();", generated);
        }
        self.out.push('\n');

        for (_, generated) in self.symbols.variables.iter() {
            let _ = writeln!(self.out, "MolObject {};", generated);
        }
        self.out.push('\n');

        for node in &program.nodes {
            if let AstNode::FuncDef {
                name,
                body,
                location,
            } = node
            {
                self.emit_function(name, body, *location)?;
            }
        }

        self.out.push_str(MAIN_PROLOGUE);
        self.depth = 2;
        for node in program.entry_statements() {
            self.emit_statement(node)?;
        }
        self.depth = 0;
        self.out.push_str(MAIN_EPILOGUE);

        debug!("generated {} bytes of C++", self.out.len());
        Ok(self.out)
    }

    fn emit_function(
        &mut self,
        name: &str,
        body: &[AstNode],
        location: SourceLocation,
    ) -> Result<(), CodegenError> {
        let func = self.function(name, location)?;
        let _ = writeln!(self.out, "MolObject {}() {{", func);

        self.in_function = true;
        self.depth = 1;
        for stmt in body {
            self.emit_statement(stmt)?;
        }
        // Reached only when no `퇴근` ran.
        self.line("return MolObject();");
        self.depth = 0;
        self.in_function = false;

        self.out.push_str("}\n\n");
        Ok(())
    }

    fn emit_statement(&mut self, node: &AstNode) -> Result<(), CodegenError> {
        match node {
            AstNode::Assign {
                name,
                expr,
                location,
            } => {
                let var = self.variable(name, *location)?;
                let value = self.expression(expr)?;
                self.line(&format!("{} = {};", var, value));
            }
            AstNode::Print { expr, .. } => {
                let value = self.expression(expr)?;
                self.line(&format!("mollang_print({});", value));
            }
            AstNode::If {
                condition, body, ..
            } => self.emit_conditional("if", condition, body)?,
            AstNode::While {
                condition, body, ..
            } => self.emit_conditional("while", condition, body)?,
            AstNode::FuncCall { name, location } => {
                let func = self.function(name, *location)?;
                self.line(&format!("{}();", func));
            }
            AstNode::Return { expr, .. } => {
                let value = self.expression(expr)?;
                if self.in_function {
                    self.line(&format!("return {};", value));
                } else {
                    // `main` cannot return a MolObject: evaluate, then stop the program.
                    self.line(&format!("{{ static_cast<void>({}); return 0; }}", value));
                }
            }
            // Top-level definitions are hoisted by `generate`; nothing else may hold one.
            AstNode::FuncDef { location, .. } => {
                return Err(CodegenError::MisplacedNode {
                    node: node.kind(),
                    location: *location,
                });
            }
            AstNode::NumberLiteral { .. }
            | AstNode::StringLiteral { .. }
            | AstNode::Variable { .. }
            | AstNode::Input { .. }
            | AstNode::BinaryOp { .. } => {
                let value = self.expression(node)?;
                self.line(&format!("{};", value));
            }
        }
        Ok(())
    }

    fn emit_conditional(
        &mut self,
        keyword: &str,
        condition: &AstNode,
        body: &[AstNode],
    ) -> Result<(), CodegenError> {
        let cond = self.expression(condition)?;
        self.line(&format!("{} (mollang_truth({})) {{", keyword, cond));
        self.depth += 1;
        for stmt in body {
            self.emit_statement(stmt)?;
        }
        self.depth -= 1;
        self.line("}");
        Ok(())
    }

    /// Lower an expression to a C++ expression of type `MolObject`.
    fn expression(&self, node: &AstNode) -> Result<String, CodegenError> {
        match node {
            AstNode::NumberLiteral { value, .. } => Ok(if *value == i32::MIN {
                // `-2147483648` is a negated long literal in C++.
                "MolObject(-2147483647 - 1)".to_string()
            } else {
                format!("MolObject({})", value)
            }),
            AstNode::StringLiteral { value, .. } => {
                Ok(format!("MolObject(std::string(\"{}\"))", escape_cpp(value)))
            }
            AstNode::Variable { name, location } => {
                self.variable(name, *location).map(str::to_string)
            }
            AstNode::Input { .. } => Ok("mollang_input()".to_string()),
            AstNode::BinaryOp {
                op, left, right, ..
            } => Ok(format!(
                "({} {} {})",
                self.expression(left)?,
                op.symbol(),
                self.expression(right)?
            )),
            AstNode::Assign { location, .. }
            | AstNode::Print { location, .. }
            | AstNode::If { location, .. }
            | AstNode::While { location, .. }
            | AstNode::FuncDef { location, .. }
            | AstNode::FuncCall { location, .. }
            | AstNode::Return { location, .. } => Err(CodegenError::MisplacedNode {
                node: node.kind(),
                location: *location,
            }),
        }
    }

    fn variable(&self, name: &str, location: SourceLocation) -> Result<&'a str, CodegenError> {
        self.symbols
            .variables
            .get(name)
            .ok_or_else(|| CodegenError::UnresolvedVariable {
                name: name.to_string(),
                location,
            })
    }

    fn function(&self, name: &str, location: SourceLocation) -> Result<&'a str, CodegenError> {
        self.symbols
            .functions
            .get(name)
            .ok_or_else(|| CodegenError::UnresolvedFunction {
                name: name.to_string(),
                location,
            })
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

/// Escape `text` for use inside a C++ string literal.
///
/// Non-ASCII characters pass through unchanged (the output file is UTF-8).
pub fn escape_cpp(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            // Octal escapes stop after three digits, unlike `\x`.
            c if c.is_ascii_control() => {
                let _ = write!(escaped, "\\{:03o}", c as u32);
            }
            // Avoid accidental trigraphs such as `??=`.
            '?' => escaped.push_str("\\?"),
            c => escaped.push(c),
        }
    }
    escaped
}
