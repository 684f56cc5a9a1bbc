//! JSON reader for literal trees.
//!
//! The driver accepts programs as JSON text:
//!
//! | JSON                  | Literal tree     |
//! |-----------------------|------------------|
//! | number                | `Sexp::Number`   |
//! | `true` / `false`      | `Sexp::Bool`     |
//! | string                | `Sexp::Symbol`   |
//! | `{"string": "text"}`  | `Sexp::Str`      |
//! | array                 | `Sexp::List`     |
//!
//! Anything else is rejected before parsing.

use lumo_diagnostic::{Diagnostic, ErrorCode};
use lumo_ir::Sexp;
use serde_json::Value as Json;

/// Key of the single-entry object that marks a string literal.
pub const STRING_KEY: &str = "string";

/// Input that could not be turned into a literal tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("malformed input: {message}")]
    Malformed { message: String },

    #[error("{found} has no literal-tree encoding")]
    Unsupported { found: String },
}

impl ReadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReadError::Malformed { .. } => ErrorCode::E0001,
            ReadError::Unsupported { .. } => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self {
            ReadError::Unsupported { .. } => diag.with_note(format!(
                "strings are written as {{\"{STRING_KEY}\": \"text\"}}; bare JSON strings are identifiers"
            )),
            ReadError::Malformed { .. } => diag,
        }
    }
}

/// Parse JSON text into a literal tree.
pub fn read_sexp(text: &str) -> Result<Sexp, ReadError> {
    let json: Json = serde_json::from_str(text).map_err(|e| ReadError::Malformed {
        message: e.to_string(),
    })?;
    from_json(&json)
}

/// Convert an already-decoded JSON value.
///
/// Nesting depth is bounded by `serde_json`'s own recursion limit.
pub fn from_json(json: &Json) -> Result<Sexp, ReadError> {
    match json {
        Json::Number(n) => n.as_f64().map(Sexp::Number).ok_or_else(|| ReadError::Unsupported {
            found: format!("number {n}"),
        }),
        Json::Bool(b) => Ok(Sexp::Bool(*b)),
        Json::String(s) => Ok(Sexp::Symbol(s.clone())),
        Json::Array(items) => items
            .iter()
            .map(from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Sexp::List),
        Json::Object(map) => match (map.len(), map.get(STRING_KEY)) {
            (1, Some(Json::String(s))) => Ok(Sexp::Str(s.clone())),
            _ => Err(ReadError::Unsupported {
                found: format!("object {json}"),
            }),
        },
        Json::Null => Err(ReadError::Unsupported {
            found: "null".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_atoms() {
        assert_eq!(read_sexp("4").unwrap(), Sexp::num(4.0));
        assert_eq!(read_sexp("-0.5").unwrap(), Sexp::num(-0.5));
        assert_eq!(read_sexp("true").unwrap(), Sexp::Bool(true));
        assert_eq!(read_sexp("\"x\"").unwrap(), Sexp::sym("x"));
        assert_eq!(read_sexp(r#"{"string": "hi"}"#).unwrap(), Sexp::str("hi"));
    }

    #[test]
    fn test_nested_lists() {
        let sexp = read_sexp(r#"[["x", "=>", ["+", "x", 1]], 8]"#).unwrap();
        assert_eq!(sexp.to_string(), "((x => (+ x 1.0)) 8.0)");
    }

    #[test]
    fn test_empty_array_reads_as_empty_list() {
        // Rejected later by the parser, not the reader
        assert_eq!(read_sexp("[]").unwrap(), Sexp::List(vec![]));
    }

    #[test]
    fn test_malformed_json() {
        let err = read_sexp("[1, 2").unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0001);
    }

    #[test]
    fn test_unsupported_values() {
        assert_eq!(
            read_sexp("null").unwrap_err(),
            ReadError::Unsupported {
                found: "null".to_string()
            }
        );
        for text in [r#"{"str": "a"}"#, r#"{"string": 1}"#, r#"{"string": "a", "x": 1}"#] {
            assert_eq!(read_sexp(text).unwrap_err().code(), ErrorCode::E0002, "{text}");
        }
        assert_eq!(read_sexp("[1, null]").unwrap_err().code(), ErrorCode::E0002);
    }

    #[test]
    fn test_unsupported_diagnostic_has_note() {
        let diag = read_sexp("null").unwrap_err().to_diagnostic();
        assert_eq!(diag.notes.len(), 1);
        assert!(diag.to_string().starts_with("error[E0002]: null has no literal-tree encoding"));
    }
}
