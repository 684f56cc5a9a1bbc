//! `run` and `eval` commands.

use lumo_eval::Value;
use serde::Serialize;

use super::{evaluate_text, read_file, PipelineError};

/// Result of running one program, serialized for `--json` output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub success: bool,
    /// Serialized value; empty on failure.
    pub output: String,
    pub error: Option<String>,
    pub error_code: Option<String>,
    /// `read`, `parse` or `eval`.
    pub error_phase: Option<String>,
}

impl RunResult {
    pub fn from_outcome(outcome: &Result<Value, PipelineError>) -> Self {
        match outcome {
            Ok(value) => RunResult {
                success: true,
                output: value.serialize(),
                error: None,
                error_code: None,
                error_phase: None,
            },
            Err(e) => RunResult {
                success: false,
                output: String::new(),
                error: Some(e.to_string()),
                error_code: Some(e.code().as_str().to_string()),
                error_phase: Some(e.code().phase().to_string()),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"success":false,"output":"","error":"serialization error: {e}","error_code":null,"error_phase":null}}"#)
        })
    }
}

/// Evaluate the program stored in `path`.
pub fn run_file(path: &str, json: bool) -> bool {
    let Some(content) = read_file(path) else {
        return false;
    };
    report(&evaluate_text(&content), json)
}

/// Evaluate a program given inline on the command line.
pub fn eval_source(text: &str, json: bool) -> bool {
    report(&evaluate_text(text), json)
}

fn report(outcome: &Result<Value, PipelineError>, json: bool) -> bool {
    if json {
        let result = RunResult::from_outcome(outcome);
        println!("{}", result.to_json());
        return result.success;
    }

    match outcome {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(e) => {
            eprintln!("{}", e.to_diagnostic());
            false
        }
    }
}
