//! Runtime value representation
//!
//! [`Value`] is the interpreter's counterpart of the generated `MolObject`:
//! a variable starts out [`Value::Absent`] and may later hold an integer,
//! text or a comparison result.

use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Absent,
    Int(i32),
    Text(String),
    Bool(bool),
}

impl Value {
    /// Name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Interpret one line of console input: a whole-line integer, else text.
    ///
    /// Leading whitespace and a sign are accepted before the digits; anything
    /// after them keeps the line as text.
    pub fn from_input(line: &str) -> Value {
        let trimmed = line.trim_start_matches(|c: char| {
            matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
        });
        match trimmed.parse::<i32>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Text(line.to_string()),
        }
    }
}

/// Printed form: what `스크럼` writes before the newline.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}
