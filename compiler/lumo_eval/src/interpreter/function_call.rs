//! Application of evaluated callees.

use tracing::debug;

use super::Interpreter;
use crate::errors::{not_callable, EvalResult};
use crate::{apply_primitive, Value};

impl Interpreter<'_> {
    /// Apply a callee to already-evaluated arguments.
    ///
    /// A closure's body runs in its *captured* environment extended with the
    /// parameters, never in the caller's environment.
    pub fn apply(&self, func: &Value, args: Vec<Value>) -> EvalResult {
        match func {
            Value::Primitive(op) => apply_primitive(*op, &args),
            Value::Closure(closure) => {
                debug!(
                    arity = closure.arity(),
                    argc = args.len(),
                    depth = closure.env().depth(),
                    "apply closure"
                );
                let call_env = closure.env().extend(closure.params(), args)?;
                let body_interpreter = Interpreter::new(closure.arena().clone(), self.interner);
                body_interpreter.eval(closure.body(), &call_env)
            }
            Value::Number(_) | Value::Bool(_) | Value::Str(_) => {
                Err(not_callable(func.type_name()))
            }
        }
    }
}
