//! Immutable environments.
//!
//! An environment is a persistent chain of frames searched innermost-first.
//! Extending never touches the parent: it allocates a new frame pointing at
//! it. Closures keep their captured chain alive through the `Arc`, and any
//! number of evaluations (or threads) can extend the same environment
//! independently.

use std::fmt;
use std::sync::Arc;

use lumo_ir::{Name, StringInterner};
use rustc_hash::FxHashMap;

use crate::errors::{arity_mismatch, EvalError};
use crate::{PrimOp, Value};

/// One level of bindings.
struct Frame {
    bindings: FxHashMap<Name, Value>,
    parent: Environment,
}

/// Immutable name-to-value mapping with scoped extension.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Frame>>,
}

impl Environment {
    /// Environment with no bindings.
    pub fn empty() -> Self {
        Environment { head: None }
    }

    /// New environment with one frame holding `bindings` on top of `self`.
    ///
    /// Within the frame a later binding for the same name replaces an
    /// earlier one.
    #[must_use]
    pub fn with_frame(&self, bindings: impl IntoIterator<Item = (Name, Value)>) -> Self {
        Environment {
            head: Some(Arc::new(Frame {
                bindings: bindings.into_iter().collect(),
                parent: self.clone(),
            })),
        }
    }

    /// New environment with a single binding on top of `self`.
    #[must_use]
    pub fn bind(&self, name: Name, value: Value) -> Self {
        self.with_frame([(name, value)])
    }

    /// Bind `names` to `values` positionally in a new frame.
    ///
    /// Fails with `ArityMismatch` when the lengths differ; nothing is
    /// truncated or padded.
    pub fn extend(&self, names: &[Name], values: Vec<Value>) -> Result<Self, EvalError> {
        if names.len() != values.len() {
            return Err(arity_mismatch(names.len(), values.len()));
        }
        Ok(self.with_frame(names.iter().copied().zip(values)))
    }

    /// Look up a name, innermost frame first.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            if let Some(value) = frame.bindings.get(&name) {
                return Some(value.clone());
            }
            current = frame.parent.head.as_deref();
        }
        None
    }

    /// Number of frames in the chain.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            depth += 1;
            current = frame.parent.head.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let innermost = self.head.as_ref().map_or(0, |frame| frame.bindings.len());
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("innermost_bindings", &innermost)
            .finish()
    }
}

/// The fixed top-level environment: every primitive bound under its own name.
pub fn top_environment(interner: &StringInterner) -> Environment {
    Environment::empty().with_frame(
        PrimOp::ALL
            .iter()
            .map(|&op| (interner.intern(op.name()), Value::Primitive(op))),
    )
}
