use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Reader errors (literal tree could not be built)
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Reader Errors (E0xxx)
    /// Input is not well-formed
    E0001,
    /// Input value has no literal-tree encoding
    E0002,

    // Parser Errors (E1xxx)
    /// Empty list matches no form
    E1001,
    /// Lambda without parameters
    E1002,
    /// Lambda parameter is not an identifier
    E1003,

    // Evaluation Errors (E6xxx)
    /// Unbound identifier
    E6001,
    /// Type mismatch
    E6002,
    /// Arity mismatch
    E6003,
    /// Division by zero
    E6004,
    /// No matching primitive
    E6005,
    /// User error raised by `error`
    E6006,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Reader
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            // Evaluation
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
        }
    }

    /// Pipeline phase that raises this code: `"read"`, `"parse"` or `"eval"`.
    pub fn phase(&self) -> &'static str {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => "read",
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 => "parse",
            ErrorCode::E6001
            | ErrorCode::E6002
            | ErrorCode::E6003
            | ErrorCode::E6004
            | ErrorCode::E6005
            | ErrorCode::E6006 => "eval",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
