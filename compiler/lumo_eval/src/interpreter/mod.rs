//! Tree-walking interpreter.
//!
//! `Interpreter` reduces one arena's nodes to values. Evaluation is direct
//! recursion: every nested node and every closure call adds native stack
//! frames, with no tail-call elimination. Each step runs under
//! `ensure_sufficient_stack`, so depth is bounded by memory rather than by
//! the thread's initial stack.

mod function_call;

use lumo_ir::{ExprId, ExprKind, SharedArena, StringInterner};
use lumo_stack::ensure_sufficient_stack;

use crate::errors::{condition_not_boolean, not_callable, unbound_identifier, EvalResult};
use crate::{ClosureValue, Environment, Value};

/// Evaluator over a single frozen arena.
///
/// Calling a closure whose body lives in another arena spins up a child
/// interpreter over that arena.
pub struct Interpreter<'a> {
    arena: SharedArena,
    interner: &'a StringInterner,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: SharedArena, interner: &'a StringInterner) -> Self {
        Interpreter { arena, interner }
    }

    /// Evaluate `id` under `env`.
    ///
    /// `env` is never modified; bindings introduced during evaluation live
    /// in new frames layered on top of it.
    #[tracing::instrument(
        level = "trace",
        skip(self, env),
        fields(kind = self.arena.kind(id).kind_name())
    )]
    pub fn eval(&self, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&self, id: ExprId, env: &Environment) -> EvalResult {
        match self.arena.kind(id) {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),

            ExprKind::Ident(name) => env
                .lookup(*name)
                .ok_or_else(|| unbound_identifier(&self.interner.lookup(*name))),

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(*cond, env)? {
                Value::Bool(true) => self.eval(*then_branch, env),
                Value::Bool(false) => self.eval(*else_branch, env),
                other => Err(condition_not_boolean(other.type_name())),
            },

            ExprKind::Lambda { params, body } => Ok(Value::closure(ClosureValue::new(
                self.arena.get_params(*params).to_vec(),
                *body,
                env.clone(),
                self.arena.clone(),
            ))),

            ExprKind::Apply { callee, args } => {
                let func = self.eval(*callee, env)?;
                // Arguments are only evaluated once the callee is known to be callable
                if !func.is_callable() {
                    return Err(not_callable(func.type_name()));
                }
                let arg_values = self
                    .arena
                    .get_expr_list(*args)
                    .iter()
                    .map(|arg| self.eval(*arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.apply(&func, arg_values)
            }
        }
    }
}

/// Evaluate `expr` from `arena` under `env`.
pub fn interp(
    arena: &SharedArena,
    expr: ExprId,
    env: &Environment,
    interner: &StringInterner,
) -> EvalResult {
    Interpreter::new(arena.clone(), interner).eval(expr, env)
}
