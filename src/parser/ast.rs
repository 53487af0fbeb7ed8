// AST (Abstract Syntax Tree) definitions for Mollang programs

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Binary operators
///
/// All operators share one precedence level and fold left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Mul,
    Eq,
    Lt,
    Le,
}

impl BinOp {
    /// The operator as spelled in the generated C++.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Mul => "*",
            BinOp::Eq => "==",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// AST nodes representing statements and expressions
///
/// Every node owns its children. Blocks (`body`) are plain statement lists.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    // Expressions
    NumberLiteral {
        value: i32,
        location: SourceLocation,
    },
    StringLiteral {
        value: String,
        location: SourceLocation,
    },
    Variable {
        name: String,
        location: SourceLocation,
    },
    Input {
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },

    // Statements
    Assign {
        name: String,
        expr: Box<AstNode>,
        location: SourceLocation,
    },
    Print {
        expr: Box<AstNode>,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    While {
        condition: Box<AstNode>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    FuncDef {
        name: String,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    FuncCall {
        name: String,
        location: SourceLocation,
    },
    Return {
        expr: Box<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::NumberLiteral { location, .. }
            | AstNode::StringLiteral { location, .. }
            | AstNode::Variable { location, .. }
            | AstNode::Input { location }
            | AstNode::BinaryOp { location, .. }
            | AstNode::Assign { location, .. }
            | AstNode::Print { location, .. }
            | AstNode::If { location, .. }
            | AstNode::While { location, .. }
            | AstNode::FuncDef { location, .. }
            | AstNode::FuncCall { location, .. }
            | AstNode::Return { location, .. } => location,
        }
    }

    /// Short name of the node kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::NumberLiteral { .. } => "number",
            AstNode::StringLiteral { .. } => "string",
            AstNode::Variable { .. } => "variable",
            AstNode::Input { .. } => "input",
            AstNode::BinaryOp { .. } => "binary operation",
            AstNode::Assign { .. } => "assignment",
            AstNode::Print { .. } => "print",
            AstNode::If { .. } => "if",
            AstNode::While { .. } => "while",
            AstNode::FuncDef { .. } => "function definition",
            AstNode::FuncCall { .. } => "function call",
            AstNode::Return { .. } => "return",
        }
    }

    pub fn is_func_def(&self) -> bool {
        matches!(self, AstNode::FuncDef { .. })
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub nodes: Vec<AstNode>, // Top-level statements and function definitions, in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Function definitions, in source order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, &[AstNode])> {
        self.nodes.iter().filter_map(|node| match node {
            AstNode::FuncDef { name, body, .. } => Some((name.as_str(), body.as_slice())),
            _ => None,
        })
    }

    /// Everything that runs in the entry point: all top-level nodes except definitions.
    pub fn entry_statements(&self) -> impl Iterator<Item = &AstNode> {
        self.nodes.iter().filter(|node| !node.is_func_def())
    }
}
