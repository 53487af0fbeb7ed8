// Execution engine for the Mollang interpreter

use crate::codegen::Symbols;
use crate::compiler::Compilation;
use crate::interpreter::constants::MAX_CALL_DEPTH;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops;
use crate::interpreter::terminal::Console;
use crate::interpreter::value::Value;
use crate::parser::ast::*;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// How a statement list finished
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ControlFlow {
    Normal,
    Return(Value),
}

/// Tree-walking interpreter with the same semantics as the generated C++
pub struct Interpreter<C: Console> {
    /// Name-to-slot mapping shared with the code generator
    symbols: Symbols,

    /// One slot per variable symbol; every variable is global
    globals: Vec<Value>,

    /// Function bodies by source name
    functions: FxHashMap<String, Rc<[AstNode]>>,

    /// Top-level statements other than function definitions
    entry: Rc<[AstNode]>,

    console: C,

    call_depth: usize,

    finished: bool,
}

impl<C: Console> Interpreter<C> {
    /// Create a new interpreter for a parsed and resolved program
    pub fn new(compilation: Compilation, console: C) -> Self {
        let Compilation { program, symbols } = compilation;

        let mut functions: FxHashMap<String, Rc<[AstNode]>> = FxHashMap::default();
        for (name, body) in program.functions() {
            // Later definitions replace earlier ones.
            if functions.insert(name.to_string(), Rc::from(body)).is_some() {
                debug!("function '{}' redefined; using the later body", name);
            }
        }

        let entry: Rc<[AstNode]> = program.entry_statements().cloned().collect();

        Interpreter {
            globals: vec![Value::Absent; symbols.variables.len()],
            symbols,
            functions,
            entry,
            console,
            call_depth: 0,
            finished: false,
        }
    }

    /// Run the program from start to finish
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let entry = Rc::clone(&self.entry);

        if let ControlFlow::Return(value) = self.execute_block(&entry)? {
            debug!("program returned {:?} at top level", value);
        }

        self.finished = true;
        Ok(())
    }

    fn execute_block(&mut self, statements: &[AstNode]) -> Result<ControlFlow, RuntimeError> {
        for stmt in statements {
            if let ControlFlow::Return(value) = self.execute_statement(stmt)? {
                return Ok(ControlFlow::Return(value));
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Execute a single statement
    fn execute_statement(&mut self, stmt: &AstNode) -> Result<ControlFlow, RuntimeError> {
        trace!("executing statement at {}", stmt.location());

        match stmt {
            AstNode::Assign { name, expr, .. } => {
                let value = self.evaluate_expr(expr)?;
                let slot = self.slot(name);
                self.globals[slot] = value;
            }
            AstNode::Print { expr, location } => {
                let value = self.evaluate_expr(expr)?;
                self.console
                    .print_line(&value.to_string())
                    .map_err(|e| RuntimeError::Io {
                        message: e.to_string(),
                        location: *location,
                    })?;
            }
            AstNode::If {
                condition, body, ..
            } => {
                if self.condition(condition)? {
                    return self.execute_block(body);
                }
            }
            AstNode::While {
                condition, body, ..
            } => {
                while self.condition(condition)? {
                    if let ControlFlow::Return(value) = self.execute_block(body)? {
                        return Ok(ControlFlow::Return(value));
                    }
                }
            }
            AstNode::Return { expr, .. } => {
                let value = self.evaluate_expr(expr)?;
                return Ok(ControlFlow::Return(value));
            }
            AstNode::FuncCall { name, location } => {
                self.call_function(name, *location)?;
            }
            // Top-level definitions are indexed in `new`; nothing else may hold one.
            AstNode::FuncDef { location, .. } => {
                return Err(RuntimeError::MisplacedNode {
                    node: stmt.kind(),
                    location: *location,
                });
            }
            _ => {
                self.evaluate_expr(stmt)?;
            }
        }

        Ok(ControlFlow::Normal)
    }

    /// Evaluate an expression to a value
    fn evaluate_expr(&mut self, expr: &AstNode) -> Result<Value, RuntimeError> {
        match expr {
            AstNode::NumberLiteral { value, .. } => Ok(Value::Int(*value)),
            AstNode::StringLiteral { value, .. } => Ok(Value::Text(value.clone())),
            AstNode::Variable { name, .. } => Ok(self
                .symbols
                .variables
                .slot(name)
                .and_then(|slot| self.globals.get(slot))
                .cloned()
                .unwrap_or_default()),
            AstNode::Input { location } => {
                let line = self.console.read_line().map_err(|e| RuntimeError::Io {
                    message: e.to_string(),
                    location: *location,
                })?;
                // End of input reads as an empty line.
                Ok(Value::from_input(&line.unwrap_or_default()))
            }
            AstNode::BinaryOp {
                op,
                left,
                right,
                location,
            } => {
                let left = self.evaluate_expr(left)?;
                let right = self.evaluate_expr(right)?;
                ops::apply(*op, &left, &right, *location)
            }
            AstNode::Assign { location, .. }
            | AstNode::Print { location, .. }
            | AstNode::If { location, .. }
            | AstNode::While { location, .. }
            | AstNode::FuncDef { location, .. }
            | AstNode::FuncCall { location, .. }
            | AstNode::Return { location, .. } => Err(RuntimeError::MisplacedNode {
                node: expr.kind(),
                location: *location,
            }),
        }
    }

    /// Evaluate an `입`/`몰` condition; only booleans are accepted.
    fn condition(&mut self, expr: &AstNode) -> Result<bool, RuntimeError> {
        let value = self.evaluate_expr(expr)?;
        value.as_bool().ok_or(RuntimeError::NonBooleanCondition {
            got: value.type_name(),
            location: *expr.location(),
        })
    }

    fn call_function(
        &mut self,
        name: &str,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let body = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedFunction {
                name: name.to_string(),
                location,
            })?;

        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded {
                limit: MAX_CALL_DEPTH,
                location,
            });
        }

        trace!("calling '{}' at depth {}", name, self.call_depth);
        self.call_depth += 1;
        let flow = self.execute_block(&body);
        self.call_depth -= 1;

        Ok(match flow? {
            ControlFlow::Return(value) => value,
            ControlFlow::Normal => Value::Absent,
        })
    }

    /// Slot for `name`, growing the globals if the name was never resolved.
    fn slot(&mut self, name: &str) -> usize {
        let slot = self.symbols.variables.intern(name);
        if slot >= self.globals.len() {
            self.globals.resize(slot + 1, Value::Absent);
        }
        slot
    }

    /// Current value of a global, by source name
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.symbols
            .variables
            .slot(name)
            .and_then(|slot| self.globals.get(slot))
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

/// Parse, resolve and run `source` against `console`.
pub fn run_source<C: Console>(source: &str, console: C) -> Result<C, crate::Error> {
    let compilation = Compilation::new(source)?;
    let mut interpreter = Interpreter::new(compilation, console);
    interpreter.run()?;
    Ok(interpreter.into_console())
}
