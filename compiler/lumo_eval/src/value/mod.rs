//! Runtime values.
//!
//! Values are immutable. Heap data (`Str`, `Closure`) sits behind `Arc` so
//! values are cheap to clone and can be shared across threads.

use std::fmt;
use std::sync::Arc;

use lumo_ir::{format_number, ExprId, Name, SharedArena};

use crate::{Environment, PrimOp};

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Str(Arc<str>),
    /// Handle into the primitive table.
    Primitive(PrimOp),
    Closure(Arc<ClosureValue>),
}

/// A lambda paired with the environment it was evaluated in.
#[derive(Debug)]
pub struct ClosureValue {
    params: Vec<Name>,
    body: ExprId,
    /// Environment at the lambda's evaluation site, frozen at creation.
    env: Environment,
    /// Arena the body lives in.
    arena: SharedArena,
}

impl ClosureValue {
    pub fn new(params: Vec<Name>, body: ExprId, env: Environment, arena: SharedArena) -> Self {
        ClosureValue {
            params,
            body,
            env,
            arena,
        }
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> ExprId {
        self.body
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn closure(closure: ClosureValue) -> Self {
        Value::Closure(Arc::new(closure))
    }

    /// Kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Primitive(_) => "primitive",
            Value::Closure(_) => "closure",
        }
    }

    /// True for primitives and closures.
    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Primitive(_) | Value::Closure(_))
    }

    /// Caller-facing text form. Total: every value has one.
    pub fn serialize(&self) -> String {
        match self {
            Value::Number(n) => format_number(*n),
            Value::Bool(b) => b.to_string(),
            Value::Str(s) => format!("\"{s}\""),
            Value::Primitive(_) => "#<primop>".to_string(),
            Value::Closure(_) => "#<procedure>".to_string(),
        }
    }
}

/// Numbers compare numerically, closures by identity, everything else by
/// variant and payload. Values of different kinds are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
