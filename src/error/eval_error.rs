#[derive(Debug, PartialEq, Eq)]
/// Represents the internal causes of an evaluation failure.
///
/// These variants never leave the crate: the public [`EvalError`] wraps one
/// of them without exposing it, so the evaluator stays opaque at its
/// boundary while remaining debuggable from the inside.
pub(crate) enum EvalErrorKind {
    /// A token was neither a number nor one of the five operators.
    UnknownOperator {
        /// The token encountered.
        token: String,
    },
    /// An operator arrived with fewer than two values on the stack, or the
    /// token sequence was empty.
    StackUnderflow,
    /// Values remained on the stack after the final token.
    LeftoverOperands {
        /// How many extra values were left behind.
        count: usize,
    },
}

/// An opaque evaluation failure.
///
/// Every internal failure of the postfix evaluator collapses into this one
/// type. Its `Display` form carries no structured detail; the wrapped
/// [`EvalErrorKind`] is visible only through `Debug` output inside the
/// crate.
#[derive(Debug)]
pub struct EvalError {
    #[allow(dead_code)]
    kind: EvalErrorKind,
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self { kind }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error")
    }
}

impl std::error::Error for EvalError {}
