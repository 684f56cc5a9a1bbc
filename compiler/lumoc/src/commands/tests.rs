#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

fn eval_text(text: &str) -> String {
    evaluate_text(text).unwrap().serialize()
}

#[test]
fn test_evaluate_arithmetic() {
    assert_eq!(eval_text(r#"["+", 1, 2]"#), "3.0");
    assert_eq!(eval_text(r#"["-", 3, 0.5]"#), "2.5");
    assert_eq!(eval_text(r#"["/", 8, 2]"#), "4.0");
}

#[test]
fn test_evaluate_string_literal() {
    assert_eq!(
        eval_text(r#"["if", ["equal?", 1, 1], {"string": "same"}, {"string": "different"}]"#),
        "\"same\""
    );
}

#[test]
fn test_evaluate_closure_value() {
    assert_eq!(eval_text(r#"["x", "=>", "x"]"#), "#<procedure>");
    assert_eq!(eval_text(r#""+""#), "#<primop>");
}

#[test]
fn test_errors_by_phase() {
    assert!(matches!(
        evaluate_text("[1,").unwrap_err(),
        PipelineError::Read(ReadError::Malformed { .. })
    ));
    assert_eq!(
        evaluate_text("[]").unwrap_err(),
        PipelineError::Parse(ParseError::EmptyList)
    );
    assert_eq!(
        evaluate_text(r#"["/", 1, 0]"#).unwrap_err(),
        PipelineError::Eval(EvalError::DivisionByZero)
    );
}

#[test]
fn test_pipeline_error_codes() {
    assert_eq!(evaluate_text("null").unwrap_err().code(), ErrorCode::E0002);
    assert_eq!(
        evaluate_text(r#"["=>", "x"]"#).unwrap_err().code(),
        ErrorCode::E1002
    );
    assert_eq!(
        evaluate_text(r#""y""#).unwrap_err().to_diagnostic().to_string(),
        "error[E6001]: unbound identifier: y"
    );
}

#[test]
fn test_parse_text_renders_ast() {
    assert_eq!(
        parse_text(r#"[["x", "=>", ["+", "x", 1]], 8]"#).unwrap(),
        "((x => (+ x 1.0)) 8.0)"
    );
    assert_eq!(
        parse_text(r#"["if", true, {"string": "a"}, 2]"#).unwrap(),
        "(if true \"a\" 2.0)"
    );
}

#[test]
fn test_run_result_success() {
    let result = RunResult::from_outcome(&evaluate_text(r#"["*", 2, 3]"#));
    assert_eq!(
        result,
        RunResult {
            success: true,
            output: "6.0".to_string(),
            error: None,
            error_code: None,
            error_phase: None,
        }
    );
    assert_eq!(
        result.to_json(),
        r#"{"success":true,"output":"6.0","error":null,"error_code":null,"error_phase":null}"#
    );
}

#[test]
fn test_run_result_failure() {
    let result = RunResult::from_outcome(&evaluate_text(r#"["error", {"string": "boom"}]"#));
    assert!(!result.success);
    assert_eq!(result.output, "");
    assert_eq!(result.error.as_deref(), Some("user error: boom"));
    assert_eq!(result.error_code.as_deref(), Some("E6006"));
    assert_eq!(result.error_phase.as_deref(), Some("eval"));

    let result = RunResult::from_outcome(&evaluate_text("[]"));
    assert_eq!(result.error_code.as_deref(), Some("E1001"));
    assert_eq!(result.error_phase.as_deref(), Some("parse"));
}
