//! Symbol resolution
//!
//! Before any code is emitted, [`resolve`] walks the whole program once and
//! gives every distinct variable and function name a generated C++ identifier
//! (`var_0`, `var_1`, … and `func_0`, `func_1`, …) in order of first appearance.
//! The emitter then only looks names up, so a function may be called before its
//! definition and a global may be read before the statement that assigns it.
//!
//! A [`Symbols`] value belongs to one compilation; nothing is shared between
//! programs.

use crate::parser::ast::{AstNode, Program};
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};

/// Insertion-ordered map from source names to generated identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    prefix: &'static str,
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Return the slot for `name`, assigning the next identifier on first sight.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.index.get(name) {
            return slot;
        }

        let slot = self.entries.len();
        let generated = format!("{}_{}", self.prefix, slot);
        self.entries.push((name.to_string(), generated));
        self.index.insert(name.to_string(), slot);
        slot
    }

    pub fn slot(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Generated identifier for `name`, if it was seen.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.slot(name).map(|slot| self.entries[slot].1.as_str())
    }

    /// `(source name, generated identifier)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, generated)| (name.as_str(), generated.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Variable and function tables for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub variables: SymbolTable,
    pub functions: SymbolTable,
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}

impl Symbols {
    pub fn new() -> Self {
        Self {
            variables: SymbolTable::new("var"),
            functions: SymbolTable::new("func"),
        }
    }

    fn collect(&mut self, node: &AstNode) {
        match node {
            AstNode::NumberLiteral { .. } | AstNode::StringLiteral { .. } | AstNode::Input { .. } => {}
            AstNode::Variable { name, .. } => {
                self.variables.intern(name);
            }
            AstNode::BinaryOp { left, right, .. } => {
                self.collect(left);
                self.collect(right);
            }
            AstNode::Assign { name, expr, .. } => {
                self.variables.intern(name);
                self.collect(expr);
            }
            AstNode::Print { expr, .. } | AstNode::Return { expr, .. } => self.collect(expr),
            AstNode::If {
                condition, body, ..
            }
            | AstNode::While {
                condition, body, ..
            } => {
                self.collect(condition);
                self.collect_all(body);
            }
            AstNode::FuncDef { name, body, .. } => {
                self.functions.intern(name);
                self.collect_all(body);
            }
            AstNode::FuncCall { name, .. } => {
                self.functions.intern(name);
            }
        }
    }

    fn collect_all(&mut self, nodes: &[AstNode]) {
        for node in nodes {
            self.collect(node);
        }
    }
}

/// Build the symbol tables for `program` with a pre-order walk.
pub fn resolve(program: &Program) -> Symbols {
    let mut symbols = Symbols::new();
    symbols.collect_all(&program.nodes);

    let mut defined: FxHashSet<&str> = FxHashSet::default();
    for (name, _) in program.functions() {
        if !defined.insert(name) {
            warn!("function '{}' is defined more than once", name);
        }
    }
    for (name, _) in symbols.functions.iter() {
        if !defined.contains(name) {
            warn!("function '{}' is called but never defined", name);
        }
    }

    debug!(
        "resolved {} variables and {} functions",
        symbols.variables.len(),
        symbols.functions.len()
    );
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    fn resolved(source: &str) -> Symbols {
        resolve(&parse(source).unwrap())
    }

    #[test]
    fn test_first_seen_order() {
        let symbols = resolved("바압 은 1\n밥 은 바압\n스크럼 바아압");

        let vars: Vec<_> = symbols.variables.iter().collect();
        assert_eq!(
            vars,
            vec![("바압", "var_0"), ("밥", "var_1"), ("바아압", "var_2")]
        );
    }

    #[test]
    fn test_forward_function_reference() {
        let symbols = resolved("캠프2\n캠프1 [ 퇴근 1 ]\n캠프2 [ 캠프1 ]");

        assert_eq!(symbols.functions.get("캠프2"), Some("func_0"));
        assert_eq!(symbols.functions.get("캠프1"), Some("func_1"));
        assert_eq!(symbols.functions.len(), 2);
    }

    #[test]
    fn test_traversal_reaches_nested_nodes() {
        let symbols = resolved("캠프 [ 몰 밥 작 바압 [ 입 바아압 같 1 [ 퇴근 바아아압 ] ] ]");

        let vars: Vec<_> = symbols.variables.iter().map(|(name, _)| name).collect();
        assert_eq!(vars, vec!["밥", "바압", "바아압", "바아아압"]);
    }

    #[test]
    fn test_assignment_target_before_value() {
        let symbols = resolved("밥 은 바압");
        assert_eq!(symbols.variables.get("밥"), Some("var_0"));
        assert_eq!(symbols.variables.get("바압"), Some("var_1"));
    }

    #[test]
    fn test_variables_and_functions_are_separate() {
        let symbols = resolved("스크럼 캠프1\n캠프1");
        assert_eq!(symbols.variables.get("캠프1"), Some("var_0"));
        assert_eq!(symbols.functions.get("캠프1"), Some("func_0"));
    }

    #[test]
    fn test_fresh_tables_per_program() {
        let first = resolved("바압 은 1");
        let second = resolved("밥 은 1");
        assert_eq!(first.variables.get("바압"), Some("var_0"));
        assert_eq!(second.variables.get("밥"), Some("var_0"));
        assert_eq!(second.variables.get("바압"), None);
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut table = SymbolTable::new("var");
        assert_eq!(table.intern("밥"), 0);
        assert_eq!(table.intern("바압"), 1);
        assert_eq!(table.intern("밥"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.slot("바압"), Some(1));
    }
}
