//! Tests for the primitive dispatcher.

#![allow(clippy::unwrap_used)]

use crate::errors::EvalError;
use crate::{apply_primitive, PrimOp, Value};
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::number(n)
}

#[test]
fn test_arithmetic() {
    assert_eq!(apply_primitive(PrimOp::Add, &[num(1.0), num(2.0)]).unwrap(), num(3.0));
    assert_eq!(apply_primitive(PrimOp::Sub, &[num(3.0), num(0.5)]).unwrap(), num(2.5));
    assert_eq!(apply_primitive(PrimOp::Mul, &[num(2.0), num(3.0)]).unwrap(), num(6.0));
    assert_eq!(apply_primitive(PrimOp::Div, &[num(8.0), num(2.0)]).unwrap(), num(4.0));
}

#[test]
fn test_less_equal() {
    assert_eq!(
        apply_primitive(PrimOp::LessEq, &[num(2.0), num(8.0)]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        apply_primitive(PrimOp::LessEq, &[num(8.0), num(2.0)]).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        apply_primitive(PrimOp::LessEq, &[num(2.0), num(2.0)]).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        apply_primitive(PrimOp::Div, &[num(1.0), num(0.0)]).unwrap_err(),
        EvalError::DivisionByZero
    );
    assert_eq!(
        apply_primitive(PrimOp::Div, &[num(1.0), num(-0.0)]).unwrap_err(),
        EvalError::DivisionByZero
    );
}

#[test]
fn test_division_type_checked_before_zero() {
    let err = apply_primitive(PrimOp::Div, &[Value::string("a"), num(0.0)]).unwrap_err();
    assert!(matches!(err, EvalError::TypeMismatch { .. }));
}

#[test]
fn test_operand_type_mismatch() {
    let err = apply_primitive(PrimOp::Add, &[num(1.0), Value::Bool(true)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: + expects numbers, got number and boolean"
    );
    assert!(matches!(
        apply_primitive(PrimOp::LessEq, &[Value::string("a"), Value::string("b")]).unwrap_err(),
        EvalError::TypeMismatch { .. }
    ));
}

#[test]
fn test_equal_numbers_and_structural() {
    let eq = |a: Value, b: Value| apply_primitive(PrimOp::Equal, &[a, b]).unwrap();

    assert_eq!(eq(num(2.0), num(2.0)), Value::Bool(true));
    assert_eq!(eq(num(1.0), num(2.0)), Value::Bool(false));
    assert_eq!(eq(Value::string("a"), Value::string("a")), Value::Bool(true));
    assert_eq!(eq(Value::string("a"), Value::string("b")), Value::Bool(false));
    assert_eq!(eq(Value::Bool(false), Value::Bool(false)), Value::Bool(true));
    assert_eq!(eq(num(1.0), Value::string("1.0")), Value::Bool(false));
    assert_eq!(
        eq(Value::Primitive(PrimOp::Add), Value::Primitive(PrimOp::Add)),
        Value::Bool(true)
    );
}

#[test]
fn test_wrong_argument_count() {
    for op in [PrimOp::Add, PrimOp::Div, PrimOp::Equal] {
        assert_eq!(
            apply_primitive(op, &[num(1.0)]).unwrap_err(),
            EvalError::NoMatchingPrimitive {
                name: op.name().to_string(),
                arity: 1
            }
        );
    }
    assert!(matches!(
        apply_primitive(PrimOp::Sub, &[num(1.0), num(2.0), num(3.0)]).unwrap_err(),
        EvalError::NoMatchingPrimitive { arity: 3, .. }
    ));
}

#[test]
fn test_boolean_placeholders_do_not_dispatch() {
    let err = apply_primitive(PrimOp::True, &[]).unwrap_err();
    assert_eq!(err.to_string(), "no matching primitive: true with 0 arguments");
    assert!(matches!(
        apply_primitive(PrimOp::False, &[num(1.0)]).unwrap_err(),
        EvalError::NoMatchingPrimitive { .. }
    ));
}

#[test]
fn test_error_primitive_messages() {
    assert_eq!(
        apply_primitive(PrimOp::Error, &[Value::string("boom")]).unwrap_err(),
        EvalError::UserError {
            message: "boom".to_string()
        }
    );
    assert_eq!(
        apply_primitive(PrimOp::Error, &[num(1.0), Value::string("x")]).unwrap_err(),
        EvalError::UserError {
            message: "1.0 \"x\"".to_string()
        }
    );
    assert_eq!(
        apply_primitive(PrimOp::Error, &[]).unwrap_err().to_string(),
        "user error: error called"
    );
}

#[test]
fn test_names_are_distinct() {
    let mut names: Vec<_> = PrimOp::ALL.iter().map(|op| op.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), PrimOp::ALL.len());
}

#[test]
fn test_error_codes() {
    use lumo_diagnostic::ErrorCode;

    assert_eq!(EvalError::DivisionByZero.code(), ErrorCode::E6004);
    assert_eq!(
        EvalError::ArityMismatch {
            expected: 1,
            got: 2
        }
        .to_diagnostic()
        .to_string(),
        "error[E6003]: arity mismatch: expected 1 argument, got 2"
    );
}
