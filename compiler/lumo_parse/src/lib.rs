//! Recursive descent parser for Lumo literal trees.
//!
//! Turns a [`Sexp`] into a flat AST stored in an `ExprArena`. Atoms map
//! directly to literal or identifier nodes; lists are classified by
//! [`shape::classify`].

mod error;
pub mod shape;

pub use error::ParseError;
pub use shape::{is_conditional_shape, is_lambda_shape, Form};

use lumo_ir::{Expr, ExprArena, ExprId, ExprKind, Name, SharedArena, Sexp, StringInterner};
use lumo_stack::ensure_sufficient_stack;
use tracing::trace;

/// Result of parsing one literal tree.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    /// Frozen arena holding every node of the program.
    pub arena: SharedArena,
    /// Root expression.
    pub root: ExprId,
}

impl ParseOutput {
    /// Canonical S-expression text of the root.
    pub fn display(&self, interner: &StringInterner) -> String {
        self.arena.display(self.root, interner)
    }
}

/// Parser state.
pub struct Parser<'a> {
    interner: &'a StringInterner,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(interner: &'a StringInterner) -> Self {
        Parser {
            interner,
            arena: ExprArena::new(),
        }
    }

    /// Parse a program and freeze the arena.
    pub fn parse_program(mut self, sexp: &Sexp) -> Result<ParseOutput, ParseError> {
        let root = self.parse_expr(sexp)?;
        Ok(ParseOutput {
            arena: SharedArena::new(self.arena),
            root,
        })
    }

    /// Parse one literal into a node.
    pub fn parse_expr(&mut self, sexp: &Sexp) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| match sexp {
            Sexp::Number(n) => Ok(self.alloc(ExprKind::Number(*n))),
            Sexp::Str(s) => Ok(self.alloc(ExprKind::Str(s.clone()))),
            Sexp::Bool(b) => Ok(self.alloc(ExprKind::Bool(*b))),
            Sexp::Symbol(s) => {
                let name = self.interner.intern(s);
                Ok(self.alloc(ExprKind::Ident(name)))
            }
            Sexp::List(items) => self.parse_list(items),
        })
    }

    fn parse_list(&mut self, items: &[Sexp]) -> Result<ExprId, ParseError> {
        if items.is_empty() {
            return Err(ParseError::EmptyList);
        }

        let form = shape::classify(items);
        trace!(len = items.len(), ?form, "parse_list");

        match form {
            Form::Conditional => {
                let cond = self.parse_expr(&items[1])?;
                let then_branch = self.parse_expr(&items[2])?;
                let else_branch = self.parse_expr(&items[3])?;
                Ok(self.alloc(ExprKind::If {
                    cond,
                    then_branch,
                    else_branch,
                }))
            }
            Form::Lambda => {
                let arrow = items.len() - 2;
                let names = self.parse_params(&items[..arrow])?;
                let body = self.parse_expr(&items[items.len() - 1])?;
                let params = self.arena.alloc_params(names);
                Ok(self.alloc(ExprKind::Lambda { params, body }))
            }
            Form::Application => {
                let callee = self.parse_expr(&items[0])?;
                let arg_ids = items[1..]
                    .iter()
                    .map(|item| self.parse_expr(item))
                    .collect::<Result<Vec<_>, _>>()?;
                let args = self.arena.alloc_expr_list(arg_ids);
                Ok(self.alloc(ExprKind::Apply { callee, args }))
            }
        }
    }

    fn parse_params(&self, items: &[Sexp]) -> Result<Vec<Name>, ParseError> {
        if items.is_empty() {
            return Err(ParseError::MissingParameters);
        }
        items
            .iter()
            .map(|item| {
                item.as_symbol()
                    .map(|s| self.interner.intern(s))
                    .ok_or_else(|| ParseError::InvalidParameter {
                        found: item.to_string(),
                    })
            })
            .collect()
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind))
    }
}

/// Parse a literal tree into a frozen AST.
pub fn parse(sexp: &Sexp, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(interner).parse_program(sexp)
}

#[cfg(test)]
mod tests;
