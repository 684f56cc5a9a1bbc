//! Arena storage for the flat AST.
//!
//! The parser appends to an `ExprArena`; once parsing finishes the arena is
//! frozen into a [`SharedArena`] that closures can hold on to.

use std::fmt::Write as _;
use std::ops::Deref;
use std::sync::Arc;

use crate::{format_number, Expr, ExprId, ExprKind, ExprRange, Name, ParamRange, StringInterner};

/// Append-only storage for expressions, argument lists and parameter lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    params: Vec<Name>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Allocate an expression.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = Self::offset(self.exprs.len());
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Allocate a contiguous argument list.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = Self::offset(self.expr_lists.len());
        self.expr_lists.extend(ids);
        let len = Self::offset(self.expr_lists.len()) - start;
        ExprRange::new(start, len)
    }

    /// Allocate a contiguous parameter list.
    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = Self::offset(self.params.len());
        self.params.extend(names);
        let len = Self::offset(self.params.len()) - start;
        ParamRange::new(start, len)
    }

    fn offset(len: usize) -> u32 {
        u32::try_from(len).unwrap_or_else(|_| panic!("expression arena exceeded u32 capacity"))
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get_expr(id).kind
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let (start, end) = range.bounds();
        &self.expr_lists[start..end]
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        let (start, end) = range.bounds();
        &self.params[start..end]
    }

    /// Render `id` back to canonical S-expression text.
    pub fn display(&self, id: ExprId, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id, interner);
        out
    }

    fn write_expr(&self, out: &mut String, id: ExprId, interner: &StringInterner) {
        match self.kind(id) {
            ExprKind::Number(n) => out.push_str(&format_number(*n)),
            ExprKind::Str(s) => {
                let _ = write!(out, "\"{s}\"");
            }
            ExprKind::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            ExprKind::Ident(name) => out.push_str(&interner.lookup(*name)),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push_str("(if");
                for child in [*cond, *then_branch, *else_branch] {
                    out.push(' ');
                    self.write_expr(out, child, interner);
                }
                out.push(')');
            }
            ExprKind::Lambda { params, body } => {
                out.push('(');
                for param in self.get_params(*params) {
                    out.push_str(&interner.lookup(*param));
                    out.push(' ');
                }
                out.push_str("=> ");
                self.write_expr(out, *body, interner);
                out.push(')');
            }
            ExprKind::Apply { callee, args } => {
                out.push('(');
                self.write_expr(out, *callee, interner);
                for arg in self.get_expr_list(*args) {
                    out.push(' ');
                    self.write_expr(out, *arg, interner);
                }
                out.push(')');
            }
        }
    }
}

/// Frozen, reference-counted arena.
///
/// Cloning is cheap; the arena itself is never mutated once shared.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
