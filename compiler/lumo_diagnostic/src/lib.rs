//! Diagnostic system for error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Notes (extra context, e.g. the offending input)

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
