//! Parse errors.

use lumo_diagnostic::{Diagnostic, ErrorCode};

/// A literal tree that matches none of the recognized forms.
///
/// Parsing never substitutes a default node for malformed input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// `()` is neither a conditional, a lambda, nor an application.
    #[error("empty list is not an expression")]
    EmptyList,

    /// `(=> body)`: the lambda shape matched but no parameters precede `=>`.
    #[error("lambda requires at least one parameter before `=>`")]
    MissingParameters,

    /// A lambda parameter position holds something other than a bare atom.
    #[error("lambda parameter must be an identifier, found {found}")]
    InvalidParameter { found: String },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::EmptyList => ErrorCode::E1001,
            ParseError::MissingParameters => ErrorCode::E1002,
            ParseError::InvalidParameter { .. } => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}
