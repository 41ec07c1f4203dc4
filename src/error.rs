/// Evaluation errors.
///
/// Contains the opaque error returned by the postfix evaluator, plus the
/// crate-internal structured kind it wraps. Only the opaque form crosses the
/// evaluator's public boundary.
pub mod eval_error;
/// Translation errors.
///
/// Defines all error types that can occur while tokenizing an infix
/// expression or translating it to postfix form. Translation errors are
/// structured and informative, so callers can report specifics.
pub mod translate_error;

pub use eval_error::EvalError;
pub use translate_error::TranslateError;
