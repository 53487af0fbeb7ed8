//! Binary operator semantics
//!
//! | op         | int,int        | text,text | text,int | other           |
//! |------------|----------------|-----------|----------|-----------------|
//! | `+`        | checked add    | concat    | error    | error           |
//! | `*`        | checked mul    | error     | repeat   | error           |
//! | `<` `<=`   | compare        | error     | error    | error           |
//! | `==`       | compare        | compare   | `false`  | `false`         |
//!
//! This table matches the generated C++ runtime operator for operator.

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::value::Value;
use crate::parser::ast::{BinOp, SourceLocation};

/// Apply `op` to two evaluated operands.
pub fn apply(
    op: BinOp,
    left: &Value,
    right: &Value,
    location: SourceLocation,
) -> Result<Value, RuntimeError> {
    let overflow = || RuntimeError::IntegerOverflow { op, location };

    match (op, left, right) {
        (BinOp::Add, Value::Int(a), Value::Int(b)) => {
            a.checked_add(*b).map(Value::Int).ok_or_else(overflow)
        }
        (BinOp::Add, Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{}{}", a, b))),

        (BinOp::Mul, Value::Int(a), Value::Int(b)) => {
            a.checked_mul(*b).map(Value::Int).ok_or_else(overflow)
        }
        // A count of zero or less repeats nothing.
        (BinOp::Mul, Value::Text(s), Value::Int(n)) => {
            Ok(Value::Text(s.repeat(usize::try_from(*n).unwrap_or(0))))
        }

        (BinOp::Lt, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a < b)),
        (BinOp::Le, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a <= b)),

        (BinOp::Eq, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a == b)),
        (BinOp::Eq, Value::Text(a), Value::Text(b)) => Ok(Value::Bool(a == b)),
        (BinOp::Eq, _, _) => Ok(Value::Bool(false)),

        _ => Err(RuntimeError::UnsupportedOperands {
            op,
            left: left.type_name(),
            right: right.type_name(),
            location,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(op: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
        apply(op, &left, &right, SourceLocation::default())
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(eval(BinOp::Add, Value::Int(2), Value::Int(3)), Ok(Value::Int(5)));
        assert_eq!(eval(BinOp::Mul, Value::Int(-4), Value::Int(3)), Ok(Value::Int(-12)));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(matches!(
            eval(BinOp::Add, Value::Int(i32::MAX), Value::Int(1)),
            Err(RuntimeError::IntegerOverflow { op: BinOp::Add, .. })
        ));
        assert!(matches!(
            eval(BinOp::Mul, Value::Int(i32::MIN), Value::Int(-1)),
            Err(RuntimeError::IntegerOverflow { op: BinOp::Mul, .. })
        ));
    }

    #[test]
    fn test_text_operations() {
        assert_eq!(eval(BinOp::Add, text("ab"), text("cd")), Ok(text("abcd")));
        assert_eq!(eval(BinOp::Mul, text("hi"), Value::Int(3)), Ok(text("hihihi")));
        assert_eq!(eval(BinOp::Mul, text("hi"), Value::Int(-1)), Ok(text("")));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eval(BinOp::Lt, Value::Int(1), Value::Int(2)), Ok(Value::Bool(true)));
        assert_eq!(eval(BinOp::Le, Value::Int(2), Value::Int(2)), Ok(Value::Bool(true)));
        assert_eq!(eval(BinOp::Eq, text("a"), text("a")), Ok(Value::Bool(true)));
        assert_eq!(eval(BinOp::Eq, text("1"), Value::Int(1)), Ok(Value::Bool(false)));
        assert_eq!(eval(BinOp::Eq, Value::Absent, Value::Absent), Ok(Value::Bool(false)));
    }

    #[test]
    fn test_unsupported_combinations() {
        for (op, left, right) in [
            (BinOp::Add, Value::Int(1), text("a")),
            (BinOp::Mul, Value::Int(2), text("a")),
            (BinOp::Mul, text("a"), text("b")),
            (BinOp::Lt, text("a"), text("b")),
            (BinOp::Le, Value::Bool(true), Value::Int(1)),
            (BinOp::Add, Value::Absent, Value::Int(1)),
        ] {
            assert!(
                matches!(
                    eval(op, left.clone(), right.clone()),
                    Err(RuntimeError::UnsupportedOperands { .. })
                ),
                "{} {:?} {:?} should be unsupported",
                op,
                left,
                right
            );
        }
    }
}
