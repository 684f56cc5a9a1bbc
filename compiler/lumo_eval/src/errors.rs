//! Evaluation errors and their constructors.
//!
//! Every failure is fatal: evaluation stops at the first error and no
//! partial value is produced. Construct errors through the functions below
//! so messages stay uniform.

use lumo_diagnostic::{Diagnostic, ErrorCode};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Identifier not bound in the environment.
    #[error("unbound identifier: {name}")]
    UnboundIdentifier { name: String },

    /// Non-boolean condition, non-callable callee, or wrong primitive operand.
    #[error("type mismatch: {context}")]
    TypeMismatch { context: String },

    /// Parameter count differs from argument count.
    #[error("arity mismatch: expected {expected} {}, got {got}", argument_word(.expected))]
    ArityMismatch { expected: usize, got: usize },

    #[error("division by zero")]
    DivisionByZero,

    /// Primitive called with a shape it does not accept.
    #[error("no matching primitive: {name} with {arity} {}", argument_word(.arity))]
    NoMatchingPrimitive { name: String, arity: usize },

    /// Raised by the `error` primitive.
    #[error("user error: {message}")]
    UserError { message: String },
}

fn argument_word(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnboundIdentifier { .. } => ErrorCode::E6001,
            EvalError::TypeMismatch { .. } => ErrorCode::E6002,
            EvalError::ArityMismatch { .. } => ErrorCode::E6003,
            EvalError::DivisionByZero => ErrorCode::E6004,
            EvalError::NoMatchingPrimitive { .. } => ErrorCode::E6005,
            EvalError::UserError { .. } => ErrorCode::E6006,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}

// Variable errors

#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::UnboundIdentifier {
        name: name.to_string(),
    }
}

// Type errors

#[cold]
pub fn condition_not_boolean(got: &str) -> EvalError {
    EvalError::TypeMismatch {
        context: format!("condition must be a boolean, got {got}"),
    }
}

#[cold]
pub fn not_callable(got: &str) -> EvalError {
    EvalError::TypeMismatch {
        context: format!("not callable: {got}"),
    }
}

#[cold]
pub fn operand_type_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    EvalError::TypeMismatch {
        context: format!("{op} expects numbers, got {left} and {right}"),
    }
}

// Call errors

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch { expected, got }
}

#[cold]
pub fn no_matching_primitive(name: &str, arity: usize) -> EvalError {
    EvalError::NoMatchingPrimitive {
        name: name.to_string(),
        arity,
    }
}

// Arithmetic errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

// User errors

#[cold]
pub fn user_error(message: impl Into<String>) -> EvalError {
    EvalError::UserError {
        message: message.into(),
    }
}
