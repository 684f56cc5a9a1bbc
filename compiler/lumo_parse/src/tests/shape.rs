use crate::shape::{classify, is_conditional_shape, is_lambda_shape, Form};
use lumo_ir::Sexp;

fn sym(s: &str) -> Sexp {
    Sexp::sym(s)
}

#[test]
fn test_lambda_shape_checks_second_to_last() {
    assert!(is_lambda_shape(&[sym("=>"), Sexp::from(1)]));
    assert!(is_lambda_shape(&[sym("a"), sym("b"), sym("=>"), sym("a")]));
    assert!(!is_lambda_shape(&[sym("a"), sym("=>")]));
    assert!(!is_lambda_shape(&[sym("=>")]));
    assert!(!is_lambda_shape(&[Sexp::str("=>"), Sexp::from(1)]));
}

#[test]
fn test_conditional_shape_needs_four_elements() {
    let four = [sym("if"), Sexp::from(true), Sexp::from(1), Sexp::from(2)];
    assert!(is_conditional_shape(&four));
    assert!(!is_conditional_shape(&four[..3]));
    assert!(!is_conditional_shape(&[
        sym("iff"),
        Sexp::from(true),
        Sexp::from(1),
        Sexp::from(2)
    ]));
}

#[test]
fn test_classify_precedence() {
    assert_eq!(
        classify(&[sym("if"), sym("c"), sym("=>"), sym("b")]),
        Form::Conditional
    );
    assert_eq!(classify(&[sym("if"), sym("=>"), sym("b")]), Form::Lambda);
    assert_eq!(classify(&[sym("f"), sym("=>")]), Form::Application);
    assert_eq!(classify(&[sym("f")]), Form::Application);
}
