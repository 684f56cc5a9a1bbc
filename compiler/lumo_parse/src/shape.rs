//! Shape classification for list forms.
//!
//! A list is classified by fixed precedence: conditional, then lambda, then
//! application. `(if a b)` with three elements is therefore an application of
//! `if`, and `(if => x)` is a lambda with parameter `if`.

use lumo_ir::Sexp;

/// Token that starts a conditional.
pub const IF_TOKEN: &str = "if";

/// Token that separates lambda parameters from the body.
pub const ARROW_TOKEN: &str = "=>";

/// Which form a non-empty list denotes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Form {
    Conditional,
    Lambda,
    Application,
}

/// Exactly four elements, the first being the symbol `if`.
pub fn is_conditional_shape(items: &[Sexp]) -> bool {
    items.len() == 4 && items[0].is_symbol(IF_TOKEN)
}

/// The second-to-last element is the symbol `=>`.
pub fn is_lambda_shape(items: &[Sexp]) -> bool {
    items.len() >= 2 && items[items.len() - 2].is_symbol(ARROW_TOKEN)
}

/// Classify a list's elements. Precedence is fixed: conditional before
/// lambda before application.
pub fn classify(items: &[Sexp]) -> Form {
    if is_conditional_shape(items) {
        Form::Conditional
    } else if is_lambda_shape(items) {
        Form::Lambda
    } else {
        Form::Application
    }
}
