//! Lumo IR - shared data structures for the Lumo interpreter.
//!
//! This crate contains:
//! - `Sexp`: the literal tree consumed by the parser
//! - `Name`/`StringInterner`: interned identifiers
//! - `ExprArena`/`ExprId`/`ExprKind`: the flat, immutable AST
//! - `format_number`: the canonical decimal text for numbers
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: names compare as `u32`, not strings
//! - **Flatten the tree**: no `Box<Expr>`, children are `ExprId` indices
//! - **Freeze after parsing**: an arena is shared as `SharedArena` and never mutated

mod arena;
mod ast;
mod expr_id;
mod interner;
mod name;
mod number;
mod sexp;

pub use arena::{ExprArena, SharedArena};
pub use ast::{Expr, ExprKind};
pub use expr_id::{ExprId, ExprRange, ParamRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use number::format_number;
pub use sexp::Sexp;
