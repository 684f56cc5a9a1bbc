//! Command handlers for the Lumo CLI.
//!
//! Each submodule implements one command. The shared pipeline
//! (read -> parse -> evaluate) and `read_file` live here in the module root.
//! Handlers return `true` on success; the binary maps `false` to exit status 1.

mod debug;
mod run;

pub use debug::parse_file;
pub use run::{eval_source, run_file, RunResult};

use lumo_diagnostic::{Diagnostic, ErrorCode};
use lumo_eval::{interp, top_environment, EvalError, Value};
use lumo_ir::SharedInterner;
use lumo_parse::ParseError;
use tracing::debug;

use crate::reader::{read_sexp, ReadError};

/// Failure from any phase of the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl PipelineError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PipelineError::Read(e) => e.code(),
            PipelineError::Parse(e) => e.code(),
            PipelineError::Eval(e) => e.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PipelineError::Read(e) => e.to_diagnostic(),
            PipelineError::Parse(e) => e.to_diagnostic(),
            PipelineError::Eval(e) => e.to_diagnostic(),
        }
    }
}

/// Read, parse, and evaluate one program in a fresh top-level environment.
pub fn evaluate_text(text: &str) -> Result<Value, PipelineError> {
    let sexp = read_sexp(text)?;
    let interner = SharedInterner::default();
    let parsed = lumo_parse::parse(&sexp, &interner)?;
    debug!(nodes = parsed.arena.len(), "parsed program");

    let env = top_environment(&interner);
    let value = interp(&parsed.arena, parsed.root, &env, &interner)?;
    debug!(kind = value.type_name(), "evaluated program");
    Ok(value)
}

/// Read and parse one program, returning its canonical rendering.
pub fn parse_text(text: &str) -> Result<String, PipelineError> {
    let sexp = read_sexp(text)?;
    let interner = SharedInterner::default();
    let parsed = lumo_parse::parse(&sexp, &interner)?;
    Ok(parsed.display(&interner))
}

/// Read a file from disk, reporting a user-friendly error on failure.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}

#[cfg(test)]
mod tests;
