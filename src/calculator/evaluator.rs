use crate::{
    calculator::operator::Operator,
    error::{EvalError, eval_error::EvalErrorKind},
};

/// Result type used by the internal reduction step.
///
/// Reduction failures carry a structured [`EvalErrorKind`] so the cause can
/// be inspected inside the crate; the public entry point collapses them.
pub(crate) type ReduceResult<T> = Result<T, EvalErrorKind>;

/// Evaluates a space-delimited postfix string to a number.
///
/// The string is split on whitespace and the tokens are consumed left to
/// right over a value stack: numbers are pushed, and each operator pops its
/// two operands and pushes the result. A well-formed postfix string leaves
/// exactly one value on the stack.
///
/// Arithmetic is IEEE-754 throughout, so `"5 0 / "` evaluates to infinity
/// rather than failing.
///
/// # Parameters
/// - `postfix`: A postfix expression, e.g. `"3 4 2 * + "`.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// Returns the opaque [`EvalError`] for every malformed input: unknown
/// symbols, missing operands, and leftover operands all collapse to it. No
/// structured detail crosses this boundary.
///
/// # Examples
/// ```
/// use rpncalc::calculator::evaluator::eval_postfix;
///
/// assert_eq!(eval_postfix("3 4 2 * + ").unwrap(), 11.0);
/// assert!(eval_postfix("+ 3").is_err());
/// ```
pub fn eval_postfix(postfix: &str) -> Result<f64, EvalError> {
    let tokens: Vec<&str> = postfix.split_whitespace().collect();

    reduce(&tokens).map_err(EvalError::from)
}

/// Reduces a postfix token sequence over a value stack.
///
/// Each operand pop is checked: an operator arriving with fewer than two
/// values on the stack is an underflow, and values still on the stack after
/// the final token mean the sequence was not a single expression. Both
/// checks fail rather than silently dropping tokens.
fn reduce(tokens: &[&str]) -> ReduceResult<f64> {
    let mut values: Vec<f64> = Vec::new();

    for token in tokens {
        if let Ok(number) = token.parse::<f64>() {
            values.push(number);
            continue;
        }

        let op = Operator::from_symbol(token).ok_or_else(|| {
                     EvalErrorKind::UnknownOperator { token: (*token).to_string() }
                 })?;

        // Pop order determines operand order: y was pushed last.
        let y = values.pop().ok_or(EvalErrorKind::StackUnderflow)?;
        let x = values.pop().ok_or(EvalErrorKind::StackUnderflow)?;
        values.push(op.apply(x, y));
    }

    let result = values.pop().ok_or(EvalErrorKind::StackUnderflow)?;
    if !values.is_empty() {
        return Err(EvalErrorKind::LeftoverOperands { count: values.len() });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{eval_postfix, reduce};
    use crate::error::eval_error::EvalErrorKind;

    #[test]
    fn single_number_is_its_own_value() {
        assert_eq!(eval_postfix("42 ").unwrap(), 42.0);
    }

    #[test]
    fn operands_keep_their_order() {
        assert_eq!(eval_postfix("8 3 - ").unwrap(), 5.0);
        assert_eq!(eval_postfix("8 2 / ").unwrap(), 4.0);
        assert_eq!(eval_postfix("2 10 ^ ").unwrap(), 1024.0);
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(eval_postfix("5 0 / ").unwrap(), f64::INFINITY);
    }

    #[test]
    fn missing_operand_underflows() {
        let err = reduce(&["+", "3"]).unwrap_err();
        assert!(matches!(err, EvalErrorKind::StackUnderflow));
    }

    #[test]
    fn leftover_operands_fail() {
        let err = reduce(&["3", "4"]).unwrap_err();
        assert!(matches!(err, EvalErrorKind::LeftoverOperands { count: 1 }));
    }

    #[test]
    fn unknown_symbol_is_reported_internally() {
        let err = reduce(&["3", "4", "%"]).unwrap_err();
        assert!(matches!(err, EvalErrorKind::UnknownOperator { ref token } if token == "%"));
    }

    #[test]
    fn empty_string_underflows() {
        assert!(eval_postfix("").is_err());
        assert!(eval_postfix("   ").is_err());
    }
}
