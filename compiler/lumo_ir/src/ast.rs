//! AST node kinds.
//!
//! Nodes are stored in an [`ExprArena`](crate::ExprArena) and never mutated
//! after parsing. Children are `ExprId` indices, always allocated before
//! their parent, so the tree is acyclic by construction.

use crate::{ExprId, ExprRange, Name, ParamRange};

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Number literal: `3`, `2.5`
    Number(f64),

    /// String literal: `"text"`
    Str(String),

    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// Conditional: `(if cond then else)`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Identifier reference
    Ident(Name),

    /// Lambda: `(x y => body)`
    Lambda { params: ParamRange, body: ExprId },

    /// Application: `(callee arg...)`
    Apply { callee: ExprId, args: ExprRange },
}

impl ExprKind {
    /// Short name of the node kind, for logging.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ExprKind::Number(_) => "number",
            ExprKind::Str(_) => "string",
            ExprKind::Bool(_) => "bool",
            ExprKind::If { .. } => "if",
            ExprKind::Ident(_) => "ident",
            ExprKind::Lambda { .. } => "lambda",
            ExprKind::Apply { .. } => "apply",
        }
    }
}
