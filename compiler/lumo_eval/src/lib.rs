//! Lumo Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - `Value`: closed set of runtime results
//! - `Environment`: persistent chain of binding frames
//! - `PrimOp` / `apply_primitive`: fixed primitive table with enum dispatch
//! - `Interpreter`: recursive reduction of `ExprKind` nodes
//!
//! Entry points mirror the embeddable surface: [`top_environment`],
//! [`interp`], and [`Value::serialize`].

mod environment;
pub mod errors;
mod interpreter;
mod primitives;
mod value;

pub use environment::{top_environment, Environment};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{interp, Interpreter};
pub use primitives::{apply_primitive, PrimOp};
pub use value::{ClosureValue, Value};

#[cfg(test)]
mod tests;
