//! Primitive operations.
//!
//! The primitive set is fixed, so dispatch is a `match` over `PrimOp` and the
//! argument slice rather than a registry of function pointers. Any name and
//! argument-count combination without an arm is `NoMatchingPrimitive`.

use tracing::debug;

use crate::errors::{
    division_by_zero, no_matching_primitive, operand_type_mismatch, user_error, EvalResult,
};
use crate::Value;

/// Built-in operations bound in the top-level environment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimOp {
    Add,
    Sub,
    Mul,
    Div,
    LessEq,
    Equal,
    True,
    False,
    Error,
}

impl PrimOp {
    /// Every primitive, in top-level binding order.
    pub const ALL: [PrimOp; 9] = [
        PrimOp::Add,
        PrimOp::Sub,
        PrimOp::Mul,
        PrimOp::Div,
        PrimOp::LessEq,
        PrimOp::Equal,
        PrimOp::True,
        PrimOp::False,
        PrimOp::Error,
    ];

    /// Name the primitive is bound under.
    pub const fn name(self) -> &'static str {
        match self {
            PrimOp::Add => "+",
            PrimOp::Sub => "-",
            PrimOp::Mul => "*",
            PrimOp::Div => "/",
            PrimOp::LessEq => "<=",
            PrimOp::Equal => "equal?",
            PrimOp::True => "true",
            PrimOp::False => "false",
            PrimOp::Error => "error",
        }
    }
}

/// Apply a primitive to already-evaluated arguments.
pub fn apply_primitive(op: PrimOp, args: &[Value]) -> EvalResult {
    debug!(op = op.name(), argc = args.len(), "apply_primitive");

    match (op, args) {
        (PrimOp::Add | PrimOp::Sub | PrimOp::Mul | PrimOp::Div | PrimOp::LessEq, [left, right]) => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(operand_type_mismatch(
                    op.name(),
                    left.type_name(),
                    right.type_name(),
                ));
            };
            eval_numeric(op, *a, *b)
        }
        (PrimOp::Equal, [left, right]) => Ok(Value::Bool(left == right)),
        (PrimOp::Error, _) => Err(user_error(error_message(args))),
        _ => Err(no_matching_primitive(op.name(), args.len())),
    }
}

fn eval_numeric(op: PrimOp, a: f64, b: f64) -> EvalResult {
    match op {
        PrimOp::Add => Ok(Value::Number(a + b)),
        PrimOp::Sub => Ok(Value::Number(a - b)),
        PrimOp::Mul => Ok(Value::Number(a * b)),
        PrimOp::Div if b == 0.0 => Err(division_by_zero()),
        PrimOp::Div => Ok(Value::Number(a / b)),
        PrimOp::LessEq => Ok(Value::Bool(a <= b)),
        _ => Err(no_matching_primitive(op.name(), 2)),
    }
}

/// A single string argument is used verbatim; anything else is shown in
/// serialized form.
fn error_message(args: &[Value]) -> String {
    match args {
        [] => "error called".to_string(),
        [Value::Str(message)] => message.to_string(),
        _ => args
            .iter()
            .map(Value::serialize)
            .collect::<Vec<_>>()
            .join(" "),
    }
}
