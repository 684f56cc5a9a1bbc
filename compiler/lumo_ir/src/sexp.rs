//! Literal trees: the parser's input.
//!
//! A literal tree is already structured by an external reader; there is no
//! textual lexer in this crate. Bare atoms are `Symbol`s, quoted text is
//! `Str`, and the tokens `if` and `=>` are only ever recognized as symbols.

use crate::format_number;
use std::fmt;

/// Generic nested literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Sexp {
    Number(f64),
    Str(String),
    Bool(bool),
    Symbol(String),
    List(Vec<Sexp>),
}

impl Sexp {
    pub fn num(n: f64) -> Self {
        Sexp::Number(n)
    }

    pub fn sym(s: impl Into<String>) -> Self {
        Sexp::Symbol(s.into())
    }

    pub fn str(s: impl Into<String>) -> Self {
        Sexp::Str(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = Sexp>) -> Self {
        Sexp::List(items.into_iter().collect())
    }

    /// Returns the symbol text if this is a `Symbol`.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Sexp::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// True if this is the symbol `token`.
    pub fn is_symbol(&self, token: &str) -> bool {
        self.as_symbol() == Some(token)
    }
}

impl From<f64> for Sexp {
    fn from(n: f64) -> Self {
        Sexp::Number(n)
    }
}

impl From<i32> for Sexp {
    fn from(n: i32) -> Self {
        Sexp::Number(f64::from(n))
    }
}

impl From<bool> for Sexp {
    fn from(b: bool) -> Self {
        Sexp::Bool(b)
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Number(n) => f.write_str(&format_number(*n)),
            Sexp::Str(s) => write!(f, "\"{s}\""),
            Sexp::Bool(b) => write!(f, "{b}"),
            Sexp::Symbol(s) => f.write_str(s),
            Sexp::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
